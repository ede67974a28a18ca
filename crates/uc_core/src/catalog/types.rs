// 레이스 카탈로그 기본 타입 정의
use serde::{Deserialize, Serialize};

/// 레이스 식별자 (카탈로그 적재 순서 기준, 1-origin)
pub type RaceId = u32;

/// 패턴 생성 대상이 되는 중상 랭크 (G1=1, G2=2, G3=3)
pub const GRADED_RANK_MAX: u8 = 3;

/// 馬場 (와이어 코드: 0=芝, 1=ダート)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Surface {
    #[default]
    Turf,
    Dirt,
}

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::Turf, Surface::Dirt];

    pub fn code(&self) -> u8 {
        match self {
            Surface::Turf => 0,
            Surface::Dirt => 1,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Surface::Turf => "芝",
            Surface::Dirt => "ダート",
        }
    }
}

impl TryFrom<u8> for Surface {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Surface::Turf),
            1 => Ok(Surface::Dirt),
            other => Err(format!("unknown surface code: {}", other)),
        }
    }
}

impl From<Surface> for u8 {
    fn from(surface: Surface) -> u8 {
        surface.code()
    }
}

/// 거리 구분 (와이어 코드: 1=短距離, 2=マイル, 3=中距離, 4=長距離)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DistanceCategory {
    #[default]
    Sprint,
    Mile,
    Medium,
    Long,
}

impl DistanceCategory {
    pub const ALL: [DistanceCategory; 4] = [
        DistanceCategory::Sprint,
        DistanceCategory::Mile,
        DistanceCategory::Medium,
        DistanceCategory::Long,
    ];

    pub fn code(&self) -> u8 {
        match self {
            DistanceCategory::Sprint => 1,
            DistanceCategory::Mile => 2,
            DistanceCategory::Medium => 3,
            DistanceCategory::Long => 4,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DistanceCategory::Sprint => "短距離",
            DistanceCategory::Mile => "マイル",
            DistanceCategory::Medium => "中距離",
            DistanceCategory::Long => "長距離",
        }
    }
}

impl TryFrom<u8> for DistanceCategory {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(DistanceCategory::Sprint),
            2 => Ok(DistanceCategory::Mile),
            3 => Ok(DistanceCategory::Medium),
            4 => Ok(DistanceCategory::Long),
            other => Err(format!("unknown distance code: {}", other)),
        }
    }
}

impl From<DistanceCategory> for u8 {
    fn from(distance: DistanceCategory) -> u8 {
        distance.code()
    }
}

/// 육성 시기
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Junior,
    Classic,
    Senior,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Junior, Stage::Classic, Stage::Senior];

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Junior => "ジュニア",
            Stage::Classic => "クラシック",
            Stage::Senior => "シニア",
        }
    }
}

/// 시나리오 레이스의 시기 지정 (지정 없음 = 레이스 플래그에서 도출)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StageHint {
    #[default]
    Auto,
    #[serde(rename = "クラシック")]
    Classic,
    #[serde(rename = "シニア")]
    Senior,
}

/// 카탈로그의 레이스 1행
///
/// 와이어 필드명은 적재 데이터(JSON) 쪽 명칭을 그대로 따른다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceEvent {
    #[serde(default)]
    pub race_id: RaceId,
    pub race_name: String,
    #[serde(rename = "race_state", default)]
    pub surface: Surface,
    #[serde(default)]
    pub distance: DistanceCategory,
    /// 실거리 (m)
    #[serde(default)]
    pub distance_detail: Option<u16>,
    #[serde(default)]
    pub num_fans: u32,
    #[serde(rename = "race_months", default = "default_month")]
    pub month: u8,
    /// false=前半, true=後半
    #[serde(rename = "half_flag", default)]
    pub half: bool,
    #[serde(rename = "race_rank", default = "default_rank")]
    pub rank: u8,
    #[serde(rename = "junior_flag", default)]
    pub junior: bool,
    #[serde(rename = "classic_flag", default)]
    pub classic: bool,
    #[serde(rename = "senior_flag", default)]
    pub senior: bool,
}

fn default_month() -> u8 {
    1
}

fn default_rank() -> u8 {
    1
}

impl RaceEvent {
    /// G1〜G3 여부
    pub fn is_graded(&self) -> bool {
        (1..=GRADED_RANK_MAX).contains(&self.rank)
    }

    /// 단독 시기 판정: junior → classic → senior 순으로 첫 플래그를 채택,
    /// 전부 없으면 junior
    pub fn stage(&self) -> Stage {
        if self.junior {
            Stage::Junior
        } else if self.classic {
            Stage::Classic
        } else if self.senior {
            Stage::Senior
        } else {
            Stage::Junior
        }
    }

    /// 해당 시기에 출주 가능한지 (플래그 기준)
    pub fn runs_in(&self, stage: Stage) -> bool {
        match stage {
            Stage::Junior => self.junior,
            Stage::Classic => self.classic,
            Stage::Senior => self.senior,
        }
    }

    /// 시나리오 시기 지정을 반영한 시기 판정
    pub fn resolved_stage(&self, hint: StageHint) -> Stage {
        match hint {
            StageHint::Classic => Stage::Classic,
            StageHint::Senior => Stage::Senior,
            StageHint::Auto => self.stage(),
        }
    }
}
