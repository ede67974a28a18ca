//! 로테이션 패턴 생성 엔진
//!
//! 카탈로그·프로필·출주 완료 집합·시나리오 지정 레이스를 입력으로,
//! 대안 로테이션 패턴의 목록을 결정적으로 생성한다. 영속화나 통신은
//! 하지 않는다.

pub mod calendar;

mod base;
mod conflict;
mod filler;
mod larc;
mod orchestrator;
mod strategy;
mod summary;
mod types;

pub use base::build_base_pattern;
pub use conflict::{extract_conflicts, initialize_used, preferred_conditions};
pub use filler::{fill_empty_slots, fill_junior_slots};
pub use larc::{
    apply_larc_scenario, larc_blocked, recheck_larc_scenario, LarcOutcome, ARC_NAME, DERBY_NAME,
    FOY_NAME, NIEL_NAME, TAKARAZUKA_NAME,
};
pub use orchestrator::{
    generate_for_trainee, generate_patterns, scenario_entries_for, TraineeRotation, MAX_PATTERNS,
};
pub use strategy::{filter_by_strategy, reinforcement_strategies};
pub use summary::{
    apply_dominant_conditions, factor_composition, races_in_pattern, FACTOR_SLOTS,
};
pub use types::{
    Factor, RaceSlot, RotationPattern, ScenarioEntry, ScenarioKind, SlotEntry, Strategy,
};
