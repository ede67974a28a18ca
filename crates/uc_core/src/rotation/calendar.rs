// 슬롯 캘린더: 시기별 고정 개최 월 × 전/후반
use crate::catalog::{DistanceCategory, Stage, Surface};

use super::types::{RaceSlot, RotationPattern, ScenarioKind};

/// 월 전반 → 후반 순
pub const HALVES: [bool; 2] = [false, true];

/// 시기별 개최 월 (ジュニア는 7月 데뷔 이후)
pub fn stage_months(stage: Stage) -> &'static [u8] {
    const JUNIOR_MONTHS: [u8; 6] = [7, 8, 9, 10, 11, 12];
    const FULL_MONTHS: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    match stage {
        Stage::Junior => &JUNIOR_MONTHS,
        Stage::Classic | Stage::Senior => &FULL_MONTHS,
    }
}

pub fn empty_stage_slots(stage: Stage) -> Vec<RaceSlot> {
    let mut slots = Vec::new();
    for &month in stage_months(stage) {
        for half in HALVES {
            slots.push(RaceSlot::empty(month, half));
        }
    }
    slots
}

/// 전 슬롯이 빈 캘린더로 초기화된 패턴
pub fn empty_pattern() -> RotationPattern {
    RotationPattern {
        scenario: ScenarioKind::Standard,
        strategy: None,
        junior: empty_stage_slots(Stage::Junior),
        classic: empty_stage_slots(Stage::Classic),
        senior: empty_stage_slots(Stage::Senior),
        surface: Surface::Turf,
        distance: DistanceCategory::Sprint,
        factors: Vec::new(),
        total_races: 0,
    }
}
