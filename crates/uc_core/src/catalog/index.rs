// 카탈로그 인덱스: id / 이름 / (이름, 月, 半) 키로의 조회를 1회 구축
use fxhash::FxHashMap;

use super::types::{RaceEvent, RaceId};

/// 읽기 전용 레이스 카탈로그
///
/// 같은 키가 여러 행에 걸리는 경우 나중 행이 우선한다 (적재 순서 기준).
#[derive(Debug, Clone)]
pub struct RaceCatalog {
    events: Vec<RaceEvent>,
    by_id: FxHashMap<RaceId, usize>,
    by_name: FxHashMap<String, usize>,
    by_slot_key: FxHashMap<(String, u8, bool), usize>,
}

impl RaceCatalog {
    pub fn new(events: Vec<RaceEvent>) -> Self {
        let mut by_id = FxHashMap::default();
        let mut by_name = FxHashMap::default();
        let mut by_slot_key = FxHashMap::default();
        for (idx, race) in events.iter().enumerate() {
            by_id.insert(race.race_id, idx);
            by_name.insert(race.race_name.clone(), idx);
            by_slot_key.insert((race.race_name.clone(), race.month, race.half), idx);
        }
        Self { events, by_id, by_name, by_slot_key }
    }

    pub fn events(&self) -> &[RaceEvent] {
        &self.events
    }

    pub fn get(&self, race_id: RaceId) -> Option<&RaceEvent> {
        self.by_id.get(&race_id).map(|&idx| &self.events[idx])
    }

    pub fn lookup_name(&self, race_name: &str) -> Option<&RaceEvent> {
        self.by_name.get(race_name).map(|&idx| &self.events[idx])
    }

    /// (レース名, 月, 前後半) 키 조회
    pub fn lookup_slot(&self, race_name: &str, month: u8, half: bool) -> Option<&RaceEvent> {
        self.by_slot_key
            .get(&(race_name.to_string(), month, half))
            .map(|&idx| &self.events[idx])
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
