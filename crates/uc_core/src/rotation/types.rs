// 로테이션 패턴 기본 타입 정의
use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::{DistanceCategory, RaceEvent, RaceId, Stage, StageHint, Surface};
use crate::profile::Category;

/// 패턴의 시나리오 구분
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScenarioKind {
    /// 통상 로테이션
    #[serde(rename = "メイクラ")]
    Standard,
    /// 라크 원정 (고정 6전 체인)
    #[serde(rename = "ラーク")]
    Larc,
    /// 시나리오 지정 레이스를 전부 소화하는 패턴
    #[serde(rename = "伝説")]
    Legend,
}

impl ScenarioKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ScenarioKind::Standard => "メイクラ",
            ScenarioKind::Larc => "ラーク",
            ScenarioKind::Legend => "伝説",
        }
    }
}

/// 시나리오 지정 레이스 (엔진 입력, 카탈로그 id 참조)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEntry {
    pub race_id: RaceId,
    #[serde(default)]
    pub order: u16,
    #[serde(default)]
    pub stage: StageHint,
}

impl ScenarioEntry {
    pub fn new(race_id: RaceId, order: u16, stage: StageHint) -> Self {
        Self { race_id, order, stage }
    }
}

/// 강화 전략: 저적성 카테고리 → 인자 포인트 (최대 2건, 삽입 순서 유지)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub weights: Vec<(Category, u8)>,
}

impl Strategy {
    pub fn pair(first: Category, second: Category, points: u8) -> Self {
        Self { weights: vec![(first, points), (second, points)] }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.weights.iter().any(|&(c, _)| c == category)
    }
}

/// 슬롯에 배치된 레이스
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotEntry {
    pub race_id: RaceId,
    pub race_name: String,
    pub surface: Surface,
    pub distance: DistanceCategory,
}

impl From<&RaceEvent> for SlotEntry {
    fn from(race: &RaceEvent) -> Self {
        Self {
            race_id: race.race_id,
            race_name: race.race_name.clone(),
            surface: race.surface,
            distance: race.distance,
        }
    }
}

/// (月, 前後半) 캘린더 슬롯. 최대 1레이스
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceSlot {
    pub month: u8,
    pub half: bool,
    pub entry: Option<SlotEntry>,
}

impl RaceSlot {
    pub fn empty(month: u8, half: bool) -> Self {
        Self { month, half, entry: None }
    }

    pub fn is_filled(&self) -> bool {
        self.entry.is_some()
    }

    pub fn race_name(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.race_name.as_str())
    }
}

/// 인자 구성 요소 (6枠)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Aptitude(Category),
    /// 자유 枠
    Free,
}

impl Factor {
    pub fn display_name(&self) -> &'static str {
        match self {
            Factor::Aptitude(category) => category.display_name(),
            Factor::Free => "自由",
        }
    }
}

impl Serialize for Factor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

/// 생성된 로테이션 패턴 1건
///
/// 확정(반환) 후에는 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RotationPattern {
    pub scenario: ScenarioKind,
    pub strategy: Option<Strategy>,
    pub junior: Vec<RaceSlot>,
    pub classic: Vec<RaceSlot>,
    pub senior: Vec<RaceSlot>,
    /// 주요 馬場 (배치 레이스의 최빈값)
    pub surface: Surface,
    /// 주요 거리 (배치 레이스의 최빈값)
    pub distance: DistanceCategory,
    pub factors: Vec<Factor>,
    pub total_races: usize,
}

impl RotationPattern {
    pub fn stage_slots(&self, stage: Stage) -> &[RaceSlot] {
        match stage {
            Stage::Junior => &self.junior,
            Stage::Classic => &self.classic,
            Stage::Senior => &self.senior,
        }
    }

    pub fn stage_slots_mut(&mut self, stage: Stage) -> &mut Vec<RaceSlot> {
        match stage {
            Stage::Junior => &mut self.junior,
            Stage::Classic => &mut self.classic,
            Stage::Senior => &mut self.senior,
        }
    }

    /// 배치된 레이스 id (junior → classic → senior 순)
    pub fn placed_race_ids(&self) -> Vec<RaceId> {
        Stage::ALL
            .iter()
            .flat_map(|&stage| self.stage_slots(stage))
            .filter_map(|slot| slot.entry.as_ref().map(|e| e.race_id))
            .collect()
    }
}
