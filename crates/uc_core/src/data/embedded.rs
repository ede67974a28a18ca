//! 임베딩된 기본 데이터
//!
//! `include_str!` 매크로로 컴파일 시점에 JSON을 바이너리에 포함하고,
//! 첫 사용 시 한 번만 파싱합니다. 레이스 id는 적재 순서로 부여합니다.

use std::sync::OnceLock;

use once_cell::sync::OnceCell;

use crate::catalog::{RaceCatalog, RaceEvent, RaceId};
use crate::profile::{TraineeProfile, TraineeRoster};

/// 중상 레이스 카탈로그 JSON
pub const RACES_JSON: &str = include_str!("../../data/races.json");

/// 육성 대상 로스터 JSON
pub const TRAINEES_JSON: &str = include_str!("../../data/trainees.json");

static CATALOG: OnceLock<RaceCatalog> = OnceLock::new();
static ROSTER: OnceCell<TraineeRoster> = OnceCell::new();

/// 기본 레이스 카탈로그 (G1〜G3만, id는 1-origin 연번)
pub fn default_catalog() -> &'static RaceCatalog {
    CATALOG.get_or_init(|| {
        let mut rows: Vec<RaceEvent> =
            serde_json::from_str(RACES_JSON).expect("Embedded race catalog JSON is corrupted");
        for (idx, row) in rows.iter_mut().enumerate() {
            row.race_id = (idx + 1) as RaceId;
        }
        rows.retain(|r| r.is_graded());
        RaceCatalog::new(rows)
    })
}

/// 기본 육성 대상 로스터
pub fn default_roster() -> &'static TraineeRoster {
    ROSTER.get_or_init(|| {
        let trainees: Vec<TraineeProfile> =
            serde_json::from_str(TRAINEES_JSON).expect("Embedded trainee roster JSON is corrupted");
        TraineeRoster::new(trainees)
    })
}
