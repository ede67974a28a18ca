// 로테이션 패턴 JSON API
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::RaceId;
use crate::data;
use crate::rotation::{generate_for_trainee, RotationPattern};
use crate::SCHEMA_VERSION;

/// 패턴 생성 요청
#[derive(Debug, Deserialize)]
pub struct RotationRequest {
    pub schema_version: u8,
    pub trainee_id: u32,
    /// 출주 완료 레이스 id
    #[serde(default)]
    pub run_race_ids: Vec<RaceId>,
}

/// 패턴 생성 응답
#[derive(Debug, Serialize)]
pub struct RotationResponse {
    pub schema_version: u8,
    pub success: bool,
    pub trainee_name: Option<String>,
    pub patterns: Vec<RotationPattern>,
    pub error_message: Option<String>,
}

impl RotationResponse {
    fn failure(message: String) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            success: false,
            trainee_name: None,
            patterns: Vec::new(),
            error_message: Some(message),
        }
    }
}

/// 임베딩 데이터 기준으로 패턴 일람을 생성해 JSON으로 돌려준다
pub fn rotation_patterns_json(request_json: &str) -> String {
    let request: RotationRequest = match serde_json::from_str(request_json) {
        Ok(request) => request,
        Err(err) => {
            warn!("invalid rotation request: {}", err);
            return respond(RotationResponse::failure(format!("invalid request: {}", err)));
        }
    };

    if request.schema_version != SCHEMA_VERSION {
        return respond(RotationResponse::failure(format!(
            "unsupported schema version: {}",
            request.schema_version
        )));
    }

    info!("processing rotation request: trainee_id={}", request.trainee_id);

    let catalog = data::default_catalog();
    let roster = data::default_roster();
    let run_race_ids = request.run_race_ids.iter().copied().collect();

    match generate_for_trainee(catalog, roster, request.trainee_id, &run_race_ids) {
        Ok(rotation) => {
            debug!(
                "generated {} patterns for {}",
                rotation.patterns.len(),
                rotation.trainee_name
            );
            respond(RotationResponse {
                schema_version: SCHEMA_VERSION,
                success: true,
                trainee_name: Some(rotation.trainee_name),
                patterns: rotation.patterns,
                error_message: None,
            })
        }
        Err(err) => {
            warn!("rotation generation failed: {}", err);
            respond(RotationResponse::failure(err.to_string()))
        }
    }
}

fn respond(response: RotationResponse) -> String {
    serde_json::to_string(&response).unwrap_or_else(|err| {
        format!(
            r#"{{"schema_version":{},"success":false,"trainee_name":null,"patterns":[],"error_message":"serialization failed: {}"}}"#,
            SCHEMA_VERSION, err
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_request_roundtrip() {
        let response = rotation_patterns_json(r#"{ "schema_version": 1, "trainee_id": 1 }"#);
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["trainee_name"], "スペシャルウィーク");
        assert!(value["patterns"].as_array().map_or(0, |p| p.len()) > 0);
    }

    #[test]
    fn test_unknown_trainee_is_not_found() {
        let response = rotation_patterns_json(r#"{ "schema_version": 1, "trainee_id": 999 }"#);
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["success"], false);
        assert!(value["error_message"].as_str().unwrap().contains("Not found"));
    }

    #[test]
    fn test_malformed_request_is_rejected() {
        let response = rotation_patterns_json("{");
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["success"], false);
    }

    #[test]
    fn test_schema_version_mismatch() {
        let response = rotation_patterns_json(r#"{ "schema_version": 9, "trainee_id": 1 }"#);
        let value: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["success"], false);
        assert!(value["error_message"].as_str().unwrap().contains("schema version"));
    }
}
