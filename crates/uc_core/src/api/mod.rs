pub mod rotation_json;

pub use rotation_json::{rotation_patterns_json, RotationRequest, RotationResponse};
