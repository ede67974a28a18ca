// 라크 원정 체인: 클래식/시니어 각 3전의 고정 배치
use fxhash::FxHashSet;

use crate::catalog::{RaceCatalog, RaceId, Stage};

use super::types::{RotationPattern, ScenarioKind, SlotEntry};

pub const DERBY_NAME: &str = "日本ダービー";
pub const NIEL_NAME: &str = "ニエル賞";
pub const FOY_NAME: &str = "フォワ賞";
pub const ARC_NAME: &str = "凱旋門賞";
pub const TAKARAZUKA_NAME: &str = "宝塚記念";

/// 사용 완료 집합에 선점시키는 앵커 레이스
pub(crate) const CHAIN_SEED_NAMES: [&str; 4] =
    [NIEL_NAME, FOY_NAME, ARC_NAME, TAKARAZUKA_NAME];

/// 원정 3레이스. 하나라도 잔존하면 체인 적용 여지가 있다
pub(crate) const CHAIN_KEY_NAMES: [&str; 3] = [ARC_NAME, NIEL_NAME, FOY_NAME];

/// (月, 前後半, レース名) 고정 배치
const CLASSIC_LEGS: [(u8, bool, &str); 3] =
    [(5, true, DERBY_NAME), (9, false, NIEL_NAME), (10, false, ARC_NAME)];
const SENIOR_LEGS: [(u8, bool, &str); 3] =
    [(6, true, TAKARAZUKA_NAME), (9, false, FOY_NAME), (10, false, ARC_NAME)];

/// 클래식 7〜9月 또는 10月前半에 기존 배치가 있으면 원정 불가
fn classic_window_blocked(pattern: &RotationPattern) -> bool {
    pattern.classic.iter().any(|slot| {
        slot.is_filled() && ((7..=9).contains(&slot.month) || (slot.month == 10 && !slot.half))
    })
}

/// 시니어 6月後半 이후에 기존 배치가 있으면 원정 불가
fn senior_window_blocked(pattern: &RotationPattern) -> bool {
    pattern
        .senior
        .iter()
        .any(|slot| slot.is_filled() && (slot.month >= 7 || (slot.month == 6 && slot.half)))
}

/// 클래식 5月後半이 ダービー 이외의 레이스로 차 있으면 체인 기점이 막힌다
fn derby_slot_conflicted(pattern: &RotationPattern) -> bool {
    pattern.classic.iter().any(|slot| {
        slot.month == 5 && slot.half && slot.race_name().is_some_and(|name| name != DERBY_NAME)
    })
}

/// 체인 적용 가능 여부 판정
pub fn larc_blocked(pattern: &RotationPattern) -> bool {
    classic_window_blocked(pattern) || senior_window_blocked(pattern) || derby_slot_conflicted(pattern)
}

/// 체인 적용 결과
pub struct LarcOutcome {
    /// 이 패턴에 체인이 올라갔는지
    pub applied: bool,
    /// 이 런에서 라크 패턴이 이미 만들어졌는지
    pub created: bool,
}

/// 런당 1회 한도 내에서 체인을 적용한다.
///
/// 이미 한도를 소진했거나 배치 조건이 막혀 있으면 패턴은 변경되지 않는다.
pub fn apply_larc_scenario(
    pattern: &mut RotationPattern,
    already_created: bool,
    catalog: &RaceCatalog,
    used: &mut FxHashSet<RaceId>,
) -> LarcOutcome {
    if already_created {
        return LarcOutcome { applied: false, created: true };
    }
    if larc_blocked(pattern) {
        return LarcOutcome { applied: false, created: false };
    }
    overlay_chain(pattern, catalog, Some(used));
    LarcOutcome { applied: true, created: true }
}

/// 확정된 통상 패턴의 재판정.
///
/// 조건을 충족하면 ラーク로 태그를 바꾸고 빈 슬롯에 체인을 채운다.
/// 1회 한도나 사용 완료 집합에는 손대지 않는다.
pub fn recheck_larc_scenario(pattern: &mut RotationPattern, catalog: &RaceCatalog) {
    if larc_blocked(pattern) {
        return;
    }
    pattern.scenario = ScenarioKind::Larc;
    overlay_chain(pattern, catalog, None);
}

/// 빈 슬롯에만 체인 레이스를 올린다. 이름 키 조회가 실패한 슬롯은 빈 채로 둔다.
fn overlay_chain(
    pattern: &mut RotationPattern,
    catalog: &RaceCatalog,
    mut used: Option<&mut FxHashSet<RaceId>>,
) {
    let legs: [(Stage, &[(u8, bool, &str)]); 2] =
        [(Stage::Classic, &CLASSIC_LEGS), (Stage::Senior, &SENIOR_LEGS)];

    for (stage, stage_legs) in legs {
        for slot in pattern.stage_slots_mut(stage).iter_mut() {
            for &(month, half, race_name) in stage_legs {
                if slot.month == month && slot.half == half && !slot.is_filled() {
                    if let Some(race) = catalog.lookup_slot(race_name, month, half) {
                        slot.entry = Some(SlotEntry::from(race));
                        if let Some(used) = used.as_mut() {
                            used.insert(race.race_id);
                        }
                    }
                    break;
                }
            }
        }
    }
}
