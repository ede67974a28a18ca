//! # uc_core - Deterministic Race Rotation Pattern Engine
//!
//! This library generates alternative race rotation patterns for a
//! horse-racing career sim: given the graded-race catalog, a trainee's
//! aptitude profile, the set of already-run races and the scenario-mandated
//! races, it produces a bounded list of internally consistent calendar
//! assignments with per-pattern training-factor recommendations.
//!
//! ## Features
//! - 100% deterministic generation (same inputs = same patterns)
//! - No I/O inside the engine; catalogs and profiles are plain inputs
//! - Embedded default catalog/roster for tests and host integration
//! - JSON API for easy integration with UI layers

pub mod api;
pub mod catalog;
pub mod data;
pub mod error;
pub mod profile;
pub mod rotation;

// Re-export main API functions
pub use api::{rotation_patterns_json, RotationRequest, RotationResponse};
pub use error::{CoreError, CoreResult};

// Re-export catalog and profile types
pub use catalog::{DistanceCategory, RaceCatalog, RaceEvent, RaceId, Stage, StageHint, Surface};
pub use profile::{AptitudeGrade, Category, ScenarioSpec, TraineeProfile, TraineeRoster};

// Re-export the rotation engine surface
pub use rotation::{
    generate_for_trainee, generate_patterns, Factor, RaceSlot, RotationPattern, ScenarioEntry,
    ScenarioKind, SlotEntry, Strategy, TraineeRotation,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
