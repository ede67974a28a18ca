// 완성 패턴의 집계: 주요 조건과 인자 구성 (6枠)
use crate::catalog::{DistanceCategory, RaceCatalog, RaceEvent, Surface};
use crate::profile::{Category, TraineeProfile};

use super::types::{Factor, RotationPattern, Strategy};

/// 인자 枠 수
pub const FACTOR_SLOTS: usize = 6;

/// 패턴에 배치된 레이스를 카탈로그에서 역참조한다 (조회 실패분은 생략)
pub fn races_in_pattern<'a>(
    pattern: &RotationPattern,
    catalog: &'a RaceCatalog,
) -> Vec<&'a RaceEvent> {
    pattern.placed_race_ids().iter().filter_map(|&id| catalog.get(id)).collect()
}

/// 배치 레이스의 최빈 馬場/거리를 패턴에 기록한다.
///
/// 전부 0건이면 芝/短距離 기본값. 동점은 앞 코드가 이긴다.
pub fn apply_dominant_conditions(pattern: &mut RotationPattern, races: &[&RaceEvent]) {
    let mut surface_count = [0u32; 2];
    let mut distance_count = [0u32; 4];
    for race in races {
        surface_count[race.surface.code() as usize] += 1;
        distance_count[(race.distance.code() - 1) as usize] += 1;
    }

    pattern.surface = if surface_count.iter().all(|&v| v == 0) {
        Surface::Turf
    } else if surface_count[1] > surface_count[0] {
        Surface::Dirt
    } else {
        Surface::Turf
    };

    pattern.distance = if distance_count.iter().all(|&v| v == 0) {
        DistanceCategory::Sprint
    } else {
        let mut best = DistanceCategory::Sprint;
        let mut best_count = distance_count[0];
        for &d in &DistanceCategory::ALL[1..] {
            let count = distance_count[(d.code() - 1) as usize];
            if count > best_count {
                best = d;
                best_count = count;
            }
        }
        best
    };
}

/// 인자 구성 6枠을 산출한다.
///
/// 전략이 있으면 전략 가중치대로 채우고, ラーク 패턴은 芝/中距離 枠을 떼어낸
/// 뒤 6枠 예산에 맞춰 재조정한다. 전략이 없으면 출주 실적이 있는 카테고리를
/// 적성 오름차순(급한 순)으로 채운다. 남는 枠은 自由.
pub fn factor_composition(
    profile: &TraineeProfile,
    races: &[&RaceEvent],
    strategy: Option<&Strategy>,
    is_larc: bool,
) -> Vec<Factor> {
    let mut current: Option<Vec<(Category, u8)>> = strategy.map(|s| s.weights.clone());

    if is_larc {
        if let Some(weights) = current.take() {
            let kept: Vec<(Category, u8)> = weights
                .into_iter()
                .filter(|&(c, _)| c != Category::Turf && c != Category::Medium)
                .collect();

            let mut adjusted: Vec<(Category, u8)> = Vec::new();
            let mut total = 0u8;
            for (category, points) in kept {
                let bumped = if profile.aptitude(category) <= -3 { 3 } else { points };
                if total + bumped <= FACTOR_SLOTS as u8 {
                    adjusted.push((category, bumped));
                    total += bumped;
                } else if total + points <= FACTOR_SLOTS as u8 {
                    adjusted.push((category, points));
                    total += points;
                }
            }
            current = if adjusted.is_empty() { None } else { Some(adjusted) };
        }
    }

    if let Some(weights) = current {
        let mut factors = Vec::new();
        for (category, points) in weights {
            for _ in 0..points {
                factors.push(Factor::Aptitude(category));
            }
        }
        return pad_free(factors);
    }

    let mut turf = profile.aptitude(Category::Turf) as i32;
    let dirt = profile.aptitude(Category::Dirt) as i32;
    let sprint = profile.aptitude(Category::Sprint) as i32;
    let mile = profile.aptitude(Category::Mile) as i32;
    let mut medium = profile.aptitude(Category::Medium) as i32;
    let long = profile.aptitude(Category::Long) as i32;
    if is_larc {
        turf = 3;
        medium = 3;
    }

    let mut surface_used = [false; 2];
    let mut distance_used = [false; 4];
    for race in races {
        surface_used[race.surface.code() as usize] = true;
        distance_used[(race.distance.code() - 1) as usize] = true;
    }

    // 긴급한 순으로 채울 후보: 출주 실적이 있고 적성 1 이하인 카테고리만
    let mut to_fix: Vec<(i32, Category)> = Vec::new();
    if distance_used[3] && long <= 1 {
        to_fix.push((long, Category::Long));
    }
    if distance_used[2] && medium <= 1 {
        to_fix.push((medium, Category::Medium));
    }
    if distance_used[1] && mile <= 1 {
        to_fix.push((mile, Category::Mile));
    }
    if distance_used[0] && sprint <= 1 {
        to_fix.push((sprint, Category::Sprint));
    }
    if surface_used[1] && dirt <= 1 {
        to_fix.push((dirt, Category::Dirt));
    }
    if surface_used[0] && turf <= 1 {
        to_fix.push((turf, Category::Turf));
    }
    to_fix.sort_by_key(|&(score, _)| score);

    let low_count = to_fix.iter().filter(|&&(score, _)| score <= -1).count();

    let mut factors: Vec<Factor> = Vec::new();
    for (score, category) in to_fix {
        if factors.len() >= FACTOR_SLOTS {
            break;
        }
        if factors.contains(&Factor::Aptitude(category)) {
            continue;
        }
        let needed = if score <= -1 {
            if low_count >= 2 {
                3
            } else {
                4
            }
        } else if score == 0 {
            3
        } else {
            2
        };
        if factors.len() + needed <= FACTOR_SLOTS {
            for _ in 0..needed {
                factors.push(Factor::Aptitude(category));
            }
        }
    }
    pad_free(factors)
}

fn pad_free(mut factors: Vec<Factor>) -> Vec<Factor> {
    while factors.len() < FACTOR_SLOTS {
        factors.push(Factor::Free);
    }
    factors.truncate(FACTOR_SLOTS);
    factors
}
