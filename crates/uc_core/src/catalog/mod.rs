//! 레이스 카탈로그 (정적 이벤트 목록과 인덱스)

mod index;
mod types;

pub use index::RaceCatalog;
pub use types::{
    DistanceCategory, RaceEvent, RaceId, Stage, StageHint, Surface, GRADED_RANK_MAX,
};
