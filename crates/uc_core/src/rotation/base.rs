// 베이스 패턴: 경합 레이스를 우선순위에 따라 슬롯에 배치
use fxhash::FxHashSet;

use crate::catalog::{DistanceCategory, RaceEvent, RaceId, Stage, Surface};

use super::calendar;
use super::types::{RotationPattern, SlotEntry};

/// 모든 슬롯을 순회하며 미사용 경합 레이스를 시드한다.
///
/// 슬롯 후보가 복수인 경우 ジュニア는 풀 순서를 유지하고, 그 외 시기는
/// 선호 馬場/거리 우선의 4키 정렬로 선두를 고른다. 반환값의 bool은
/// 경합이 하나라도 해소되었는지 여부.
pub fn build_base_pattern(
    conflicting: &[&RaceEvent],
    used: &mut FxHashSet<RaceId>,
    preferred_surface: Surface,
    preferred_distance: DistanceCategory,
) -> (RotationPattern, bool) {
    let mut pattern = calendar::empty_pattern();
    let mut has_conflicts = false;

    for stage in Stage::ALL {
        for slot in pattern.stage_slots_mut(stage).iter_mut() {
            let mut candidates: Vec<&RaceEvent> = conflicting
                .iter()
                .filter(|r| {
                    r.month == slot.month
                        && r.half == slot.half
                        && r.stage() == stage
                        && !used.contains(&r.race_id)
                })
                .copied()
                .collect();
            if candidates.is_empty() {
                continue;
            }

            if stage != Stage::Junior {
                candidates
                    .sort_by_key(|r| slot_priority(r, preferred_surface, preferred_distance));
            }
            let chosen = candidates[0];
            used.insert(chosen.race_id);
            has_conflicts = true;
            slot.entry = Some(SlotEntry::from(chosen));
        }
    }
    (pattern, has_conflicts)
}

/// 우선도 키 (오름차순): 선호 馬場 일치 → 선호 거리 일치 → 코드 순.
/// 馬場 일치가 거리 일치보다 우선한다.
fn slot_priority(
    race: &RaceEvent,
    preferred_surface: Surface,
    preferred_distance: DistanceCategory,
) -> (bool, bool, u8, u8) {
    (
        race.surface != preferred_surface,
        race.distance != preferred_distance,
        race.surface.code(),
        race.distance.code(),
    )
}
