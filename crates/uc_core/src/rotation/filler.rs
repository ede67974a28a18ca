// 빈 슬롯 충전: ジュニア 보완 + 반복 일반 충전
use std::cmp::Reverse;

use fxhash::FxHashSet;

use crate::catalog::{RaceEvent, RaceId, Stage, Surface};
use crate::profile::Category;

use super::types::{RotationPattern, ScenarioKind, SlotEntry, Strategy};

/// 빈 ジュニア 슬롯에 (月, 前後半)이 맞는 첫 미사용 레이스를 넣는다
pub fn fill_junior_slots(
    pattern: &mut RotationPattern,
    remaining: &[&RaceEvent],
    used: &mut FxHashSet<RaceId>,
) {
    for slot in pattern.junior.iter_mut() {
        if slot.is_filled() {
            continue;
        }
        let found = remaining.iter().find(|r| {
            r.month == slot.month && r.half == slot.half && r.junior && !used.contains(&r.race_id)
        });
        if let Some(race) = found {
            slot.entry = Some(SlotEntry::from(*race));
            used.insert(race.race_id);
        }
    }
}

/// 전 시기의 빈 슬롯을 추가 배치가 없어질 때까지 반복 충전한다.
///
/// ラーク 패턴에서는 원정 기간(클래식 7〜10月, 시니어 6月後半 이후)을
/// 건너뛴다. 전략이 있으면 2단계 점수 내림차순, 동점은 랭크 오름차순.
pub fn fill_empty_slots(
    pattern: &mut RotationPattern,
    remaining: &[&RaceEvent],
    used: &mut FxHashSet<RaceId>,
) {
    let is_larc = pattern.scenario == ScenarioKind::Larc;
    let strategy = pattern.strategy.clone();

    loop {
        let mut added_any = false;
        for stage in Stage::ALL {
            for slot in pattern.stage_slots_mut(stage).iter_mut() {
                if slot.is_filled() {
                    continue;
                }
                if is_larc {
                    if stage == Stage::Classic && (7..=10).contains(&slot.month) {
                        continue;
                    }
                    if stage == Stage::Senior
                        && ((slot.month == 6 && slot.half) || slot.month >= 7)
                    {
                        continue;
                    }
                }

                let mut matching: Vec<&RaceEvent> = remaining
                    .iter()
                    .filter(|r| {
                        r.month == slot.month
                            && r.half == slot.half
                            && r.runs_in(stage)
                            && !used.contains(&r.race_id)
                    })
                    .copied()
                    .collect();
                if matching.is_empty() {
                    continue;
                }

                matching.sort_by_key(|r| (Reverse(strategy_fill_score(r, strategy.as_ref())), r.rank));
                let chosen = matching[0];
                slot.entry = Some(SlotEntry::from(chosen));
                used.insert(chosen.race_id);
                added_any = true;
            }
        }
        if !added_any {
            break;
        }
    }
}

/// 전략 적합도: ダート 지정 + 거리 지정을 모두 충족하면 2, 한쪽이면 1
fn strategy_fill_score(race: &RaceEvent, strategy: Option<&Strategy>) -> u8 {
    let Some(strategy) = strategy else {
        return 0;
    };
    let dirt_hit = strategy.contains(Category::Dirt) && race.surface == Surface::Dirt;
    let distance_hit = strategy.contains(Category::of_distance(race.distance));
    if dirt_hit && distance_hit {
        2
    } else if dirt_hit || distance_hit {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DistanceCategory;
    use crate::rotation::calendar;

    fn race(
        race_id: u32,
        surface: Surface,
        distance: DistanceCategory,
        month: u8,
        half: bool,
        rank: u8,
        junior: bool,
        classic: bool,
        senior: bool,
    ) -> RaceEvent {
        RaceEvent {
            race_id,
            race_name: format!("レース{}", race_id),
            surface,
            distance,
            distance_detail: None,
            num_fans: 0,
            month,
            half,
            rank,
            junior,
            classic,
            senior,
        }
    }

    #[test]
    fn test_junior_fill_takes_first_unused() {
        let rows = vec![
            race(1, Surface::Turf, DistanceCategory::Sprint, 9, false, 3, true, false, false),
            race(2, Surface::Turf, DistanceCategory::Mile, 9, false, 2, true, false, false),
        ];
        let refs: Vec<&RaceEvent> = rows.iter().collect();
        let mut pattern = calendar::empty_pattern();
        let mut used = FxHashSet::default();
        used.insert(1u32);

        fill_junior_slots(&mut pattern, &refs, &mut used);
        let slot = pattern.junior.iter().find(|s| s.month == 9 && !s.half).unwrap();
        assert_eq!(slot.entry.as_ref().unwrap().race_id, 2);
    }

    #[test]
    fn test_iterative_fill_sweeps_until_fixpoint() {
        let rows = vec![
            race(1, Surface::Turf, DistanceCategory::Mile, 4, false, 2, false, true, false),
            race(2, Surface::Turf, DistanceCategory::Mile, 4, false, 1, false, false, true),
        ];
        let refs: Vec<&RaceEvent> = rows.iter().collect();
        let mut pattern = calendar::empty_pattern();
        let mut used = FxHashSet::default();

        fill_empty_slots(&mut pattern, &refs, &mut used);
        let classic_slot = pattern.classic.iter().find(|s| s.month == 4 && !s.half).unwrap();
        let senior_slot = pattern.senior.iter().find(|s| s.month == 4 && !s.half).unwrap();
        assert_eq!(classic_slot.entry.as_ref().unwrap().race_id, 1);
        assert_eq!(senior_slot.entry.as_ref().unwrap().race_id, 2);
    }

    #[test]
    fn test_strategy_score_orders_candidates() {
        // ダート+マイル 동시 충족(2) > ダート만(1) > 무관(0, 랭크 우세여도 후순위)
        let rows = vec![
            race(1, Surface::Turf, DistanceCategory::Medium, 4, false, 1, false, true, false),
            race(2, Surface::Dirt, DistanceCategory::Sprint, 4, false, 2, false, true, false),
            race(3, Surface::Dirt, DistanceCategory::Mile, 4, false, 3, false, true, false),
        ];
        let refs: Vec<&RaceEvent> = rows.iter().collect();
        let mut pattern = calendar::empty_pattern();
        pattern.strategy = Some(Strategy::pair(Category::Dirt, Category::Mile, 3));
        let mut used = FxHashSet::default();

        fill_empty_slots(&mut pattern, &refs, &mut used);
        let slot = pattern.classic.iter().find(|s| s.month == 4 && !s.half).unwrap();
        assert_eq!(slot.entry.as_ref().unwrap().race_id, 3);
    }

    #[test]
    fn test_rank_breaks_score_ties() {
        let rows = vec![
            race(1, Surface::Turf, DistanceCategory::Medium, 4, false, 3, false, true, false),
            race(2, Surface::Turf, DistanceCategory::Medium, 4, false, 1, false, true, false),
        ];
        let refs: Vec<&RaceEvent> = rows.iter().collect();
        let mut pattern = calendar::empty_pattern();
        let mut used = FxHashSet::default();

        fill_empty_slots(&mut pattern, &refs, &mut used);
        let slot = pattern.classic.iter().find(|s| s.month == 4 && !s.half).unwrap();
        assert_eq!(slot.entry.as_ref().unwrap().race_id, 2);
    }

    #[test]
    fn test_larc_pattern_reserves_expedition_window() {
        let rows = vec![
            race(1, Surface::Turf, DistanceCategory::Medium, 8, true, 2, false, true, false),
            race(2, Surface::Turf, DistanceCategory::Medium, 10, true, 1, false, false, true),
            race(3, Surface::Turf, DistanceCategory::Medium, 4, false, 1, false, true, false),
        ];
        let refs: Vec<&RaceEvent> = rows.iter().collect();
        let mut pattern = calendar::empty_pattern();
        pattern.scenario = ScenarioKind::Larc;
        let mut used = FxHashSet::default();

        fill_empty_slots(&mut pattern, &refs, &mut used);
        assert!(pattern
            .classic
            .iter()
            .filter(|s| (7..=10).contains(&s.month))
            .all(|s| !s.is_filled()));
        assert!(pattern
            .senior
            .iter()
            .filter(|s| s.month >= 7 || (s.month == 6 && s.half))
            .all(|s| !s.is_filled()));
        let kept = pattern.classic.iter().find(|s| s.month == 4 && !s.half).unwrap();
        assert_eq!(kept.entry.as_ref().unwrap().race_id, 3);
    }
}
