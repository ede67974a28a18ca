// 시나리오 레이스와 같은 슬롯을 점유하는 후보(경합 레이스) 추출
use fxhash::FxHashSet;

use crate::catalog::{DistanceCategory, RaceCatalog, RaceEvent, RaceId, Surface};
use crate::profile::{Category, TraineeProfile};

use super::larc::CHAIN_SEED_NAMES;
use super::types::ScenarioEntry;

/// 각 시나리오 레이스와 (月, 前後半, 시기)가 겹치는 풀 내 레이스를 모은다.
///
/// 시나리오 지정 레이스 자신은 제외하고, id 중복 없이 시나리오 순서대로
/// 이어 붙인다. 반환값은 (경합 레이스 목록, 시나리오 레이스 id 집합).
pub fn extract_conflicts<'a>(
    mandates: &[ScenarioEntry],
    pool: &[&'a RaceEvent],
    catalog: &RaceCatalog,
) -> (Vec<&'a RaceEvent>, FxHashSet<RaceId>) {
    let scenario_ids: FxHashSet<RaceId> = mandates.iter().map(|m| m.race_id).collect();
    let mut conflicting = Vec::new();
    let mut added: FxHashSet<RaceId> = FxHashSet::default();

    for mandate in mandates {
        let Some(race) = catalog.get(mandate.race_id) else {
            continue;
        };
        let stage = race.resolved_stage(mandate.stage);
        for &candidate in pool {
            if candidate.month == race.month
                && candidate.half == race.half
                && candidate.stage() == stage
                && !added.contains(&candidate.race_id)
                && !scenario_ids.contains(&candidate.race_id)
            {
                conflicting.push(candidate);
                added.insert(candidate.race_id);
            }
        }
    }
    (conflicting, scenario_ids)
}

/// 사용 완료 집합 초기화: 시나리오 레이스 + 잔존 체인 앵커 레이스
pub fn initialize_used(
    scenario_ids: &FxHashSet<RaceId>,
    pool: &[&RaceEvent],
) -> FxHashSet<RaceId> {
    let mut used = scenario_ids.clone();
    for race in pool {
        if CHAIN_SEED_NAMES.contains(&race.race_name.as_str()) {
            used.insert(race.race_id);
        }
    }
    used
}

/// 가용 경합 레이스의 적성 가중 빈도로 선호 馬場/거리를 정한다.
///
/// 가중 점수가 전부 0이면 芝/短距離 기본값. 동점은 앞 코드가 이긴다.
pub fn preferred_conditions(
    profile: &TraineeProfile,
    available: &[&RaceEvent],
) -> (Surface, DistanceCategory) {
    let mut surface_count = [0i32; 2];
    let mut distance_count = [0i32; 4];
    for race in available {
        surface_count[race.surface.code() as usize] += 1;
        distance_count[(race.distance.code() - 1) as usize] += 1;
    }

    let surface_scores: Vec<(Surface, i32)> = Surface::ALL
        .iter()
        .map(|&s| {
            let apt = profile.aptitude(Category::of_surface(s)) as i32;
            (s, apt * surface_count[s.code() as usize])
        })
        .collect();
    let distance_scores: Vec<(DistanceCategory, i32)> = DistanceCategory::ALL
        .iter()
        .map(|&d| {
            let apt = profile.aptitude(Category::of_distance(d)) as i32;
            (d, apt * distance_count[(d.code() - 1) as usize])
        })
        .collect();

    let preferred_surface = if surface_scores.iter().all(|&(_, v)| v == 0) {
        Surface::Turf
    } else {
        arg_max(&surface_scores)
    };
    let preferred_distance = if distance_scores.iter().all(|&(_, v)| v == 0) {
        DistanceCategory::Sprint
    } else {
        arg_max(&distance_scores)
    };
    (preferred_surface, preferred_distance)
}

fn arg_max<T: Copy>(scores: &[(T, i32)]) -> T {
    let mut best = scores[0];
    for &(key, value) in &scores[1..] {
        if value > best.1 {
            best = (key, value);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Stage, StageHint};
    use crate::profile::AptitudeGrade;

    fn race(
        race_id: u32,
        race_name: &str,
        surface: Surface,
        distance: DistanceCategory,
        month: u8,
        half: bool,
        stage: Stage,
    ) -> RaceEvent {
        RaceEvent {
            race_id,
            race_name: race_name.to_string(),
            surface,
            distance,
            distance_detail: None,
            num_fans: 0,
            month,
            half,
            rank: 1,
            junior: stage == Stage::Junior,
            classic: stage == Stage::Classic,
            senior: stage == Stage::Senior,
        }
    }

    fn profile() -> TraineeProfile {
        TraineeProfile {
            trainee_id: 1,
            name: "テスト".to_string(),
            turf: AptitudeGrade::A,
            dirt: AptitudeGrade::G,
            sprint: AptitudeGrade::C,
            mile: AptitudeGrade::A,
            medium: AptitudeGrade::A,
            long: AptitudeGrade::B,
            scenarios: Vec::new(),
        }
    }

    #[test]
    fn test_extract_conflicts_same_slot_same_stage() {
        let rows = vec![
            race(1, "指定", Surface::Turf, DistanceCategory::Medium, 4, true, Stage::Classic),
            race(2, "裏番組", Surface::Turf, DistanceCategory::Mile, 4, true, Stage::Classic),
            race(3, "別時期", Surface::Turf, DistanceCategory::Mile, 4, true, Stage::Senior),
            race(4, "別スロット", Surface::Turf, DistanceCategory::Mile, 4, false, Stage::Classic),
        ];
        let catalog = RaceCatalog::new(rows.clone());
        let pool: Vec<&RaceEvent> = catalog.events().iter().collect();
        let mandates = [ScenarioEntry::new(1, 1, StageHint::Auto)];

        let (conflicting, scenario_ids) = extract_conflicts(&mandates, &pool, &catalog);
        let ids: Vec<u32> = conflicting.iter().map(|r| r.race_id).collect();
        assert_eq!(ids, vec![2]);
        assert!(scenario_ids.contains(&1));
    }

    #[test]
    fn test_extract_conflicts_honors_stage_hint() {
        let rows = vec![
            {
                let mut r = race(
                    1,
                    "指定",
                    Surface::Turf,
                    DistanceCategory::Medium,
                    10,
                    true,
                    Stage::Classic,
                );
                r.senior = true;
                r
            },
            race(2, "シニア裏", Surface::Turf, DistanceCategory::Mile, 10, true, Stage::Senior),
            race(3, "クラシック裏", Surface::Turf, DistanceCategory::Mile, 10, true, Stage::Classic),
        ];
        let catalog = RaceCatalog::new(rows);
        let pool: Vec<&RaceEvent> = catalog.events().iter().collect();

        let mandates = [ScenarioEntry::new(1, 1, StageHint::Senior)];
        let (conflicting, _) = extract_conflicts(&mandates, &pool, &catalog);
        let ids: Vec<u32> = conflicting.iter().map(|r| r.race_id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_initialize_used_seeds_chain_anchors() {
        let rows = vec![
            race(1, "凱旋門賞", Surface::Turf, DistanceCategory::Medium, 10, false, Stage::Classic),
            race(2, "宝塚記念", Surface::Turf, DistanceCategory::Medium, 6, true, Stage::Classic),
            race(3, "皐月賞", Surface::Turf, DistanceCategory::Medium, 4, true, Stage::Classic),
        ];
        let pool: Vec<&RaceEvent> = rows.iter().collect();
        let mut scenario_ids = FxHashSet::default();
        scenario_ids.insert(3u32);

        let used = initialize_used(&scenario_ids, &pool);
        assert!(used.contains(&1));
        assert!(used.contains(&2));
        assert!(used.contains(&3));
    }

    #[test]
    fn test_preferred_conditions_weighted_argmax() {
        // 芝A × 2레이스 > ダートG, マイルA × 2 > 他
        let rows = vec![
            race(1, "a", Surface::Turf, DistanceCategory::Mile, 4, false, Stage::Classic),
            race(2, "b", Surface::Turf, DistanceCategory::Mile, 5, false, Stage::Classic),
            race(3, "c", Surface::Dirt, DistanceCategory::Sprint, 6, false, Stage::Classic),
        ];
        let pool: Vec<&RaceEvent> = rows.iter().collect();
        let (surface, distance) = preferred_conditions(&profile(), &pool);
        assert_eq!(surface, Surface::Turf);
        assert_eq!(distance, DistanceCategory::Mile);
    }

    #[test]
    fn test_preferred_conditions_all_zero_defaults() {
        let (surface, distance) = preferred_conditions(&profile(), &[]);
        assert_eq!(surface, Surface::Turf);
        assert_eq!(distance, DistanceCategory::Sprint);
    }
}
