//! 육성 대상 프로필과 적성 모델

use serde::{Deserialize, Serialize};

use crate::catalog::{DistanceCategory, StageHint, Surface};
use crate::error::{CoreError, CoreResult};

/// 적성 등급 (S〜G)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AptitudeGrade {
    S,
    A,
    B,
    C,
    #[default]
    D,
    E,
    F,
    G,
}

impl AptitudeGrade {
    /// 등급 → 부호 있는 점수 (S=4 〜 G=-3)
    pub fn score(&self) -> i8 {
        match self {
            AptitudeGrade::S => 4,
            AptitudeGrade::A => 3,
            AptitudeGrade::B => 2,
            AptitudeGrade::C => 1,
            AptitudeGrade::D => 0,
            AptitudeGrade::E => -1,
            AptitudeGrade::F => -2,
            AptitudeGrade::G => -3,
        }
    }
}

/// 적성 카테고리 (馬場 2종 + 거리 4종)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "芝")]
    Turf,
    #[serde(rename = "ダート")]
    Dirt,
    #[serde(rename = "短距離")]
    Sprint,
    #[serde(rename = "マイル")]
    Mile,
    #[serde(rename = "中距離")]
    Medium,
    #[serde(rename = "長距離")]
    Long,
}

impl Category {
    /// 순회 순서는 전 모듈 공통으로 이 배열을 따른다
    pub const ALL: [Category; 6] = [
        Category::Turf,
        Category::Dirt,
        Category::Sprint,
        Category::Mile,
        Category::Medium,
        Category::Long,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Turf => "芝",
            Category::Dirt => "ダート",
            Category::Sprint => "短距離",
            Category::Mile => "マイル",
            Category::Medium => "中距離",
            Category::Long => "長距離",
        }
    }

    pub fn of_surface(surface: Surface) -> Category {
        match surface {
            Surface::Turf => Category::Turf,
            Surface::Dirt => Category::Dirt,
        }
    }

    pub fn of_distance(distance: DistanceCategory) -> Category {
        match distance {
            DistanceCategory::Sprint => Category::Sprint,
            DistanceCategory::Mile => Category::Mile,
            DistanceCategory::Medium => Category::Medium,
            DistanceCategory::Long => Category::Long,
        }
    }
}

/// 로스터 데이터 상의 시나리오 지정 레이스 (이름 참조)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub race_name: String,
    #[serde(default)]
    pub stage: StageHint,
}

/// 육성 대상 1명분의 프로필
///
/// 와이어 필드명은 로스터 데이터(JSON) 쪽 명칭을 그대로 따른다.
/// 등급 결손 시의 기본값도 적재 규칙과 맞춘다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraineeProfile {
    pub trainee_id: u32,
    pub name: String,
    #[serde(rename = "turf_aptitude", default = "default_grade_a")]
    pub turf: AptitudeGrade,
    #[serde(rename = "dirt_aptitude", default = "default_grade_g")]
    pub dirt: AptitudeGrade,
    #[serde(rename = "sprint_aptitude", default = "default_grade_g")]
    pub sprint: AptitudeGrade,
    #[serde(rename = "mile_aptitude", default = "default_grade_a")]
    pub mile: AptitudeGrade,
    #[serde(rename = "classic_aptitude", default = "default_grade_a")]
    pub medium: AptitudeGrade,
    #[serde(rename = "long_distance_aptitude", default = "default_grade_a")]
    pub long: AptitudeGrade,
    #[serde(default)]
    pub scenarios: Vec<ScenarioSpec>,
}

fn default_grade_a() -> AptitudeGrade {
    AptitudeGrade::A
}

fn default_grade_g() -> AptitudeGrade {
    AptitudeGrade::G
}

impl TraineeProfile {
    pub fn grade(&self, category: Category) -> AptitudeGrade {
        match category {
            Category::Turf => self.turf,
            Category::Dirt => self.dirt,
            Category::Sprint => self.sprint,
            Category::Mile => self.mile,
            Category::Medium => self.medium,
            Category::Long => self.long,
        }
    }

    /// 카테고리별 적성 점수
    pub fn aptitude(&self, category: Category) -> i8 {
        self.grade(category).score()
    }
}

/// 육성 대상 로스터
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraineeRoster {
    trainees: Vec<TraineeProfile>,
}

impl TraineeRoster {
    pub fn new(trainees: Vec<TraineeProfile>) -> Self {
        Self { trainees }
    }

    /// id 조회. 미등록이면 NotFound
    pub fn find(&self, trainee_id: u32) -> CoreResult<&TraineeProfile> {
        self.trainees.iter().find(|t| t.trainee_id == trainee_id).ok_or_else(|| {
            CoreError::NotFound(format!("trainee not registered: id={}", trainee_id))
        })
    }

    pub fn find_by_name(&self, name: &str) -> Option<&TraineeProfile> {
        self.trainees.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraineeProfile> {
        self.trainees.iter()
    }

    pub fn len(&self) -> usize {
        self.trainees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trainees.is_empty()
    }
}
