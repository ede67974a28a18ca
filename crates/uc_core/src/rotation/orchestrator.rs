// 패턴 생성 루프: 전략 순환 → 베이스 → ラーク → 충전 → 집계 → 수집
use fxhash::FxHashSet;
use serde::Serialize;

use crate::catalog::{RaceCatalog, RaceEvent, RaceId};
use crate::error::CoreResult;
use crate::profile::{TraineeProfile, TraineeRoster};

use super::base::build_base_pattern;
use super::calendar;
use super::conflict::{extract_conflicts, initialize_used, preferred_conditions};
use super::filler::{fill_empty_slots, fill_junior_slots};
use super::larc::{apply_larc_scenario, recheck_larc_scenario, CHAIN_KEY_NAMES};
use super::strategy::{filter_by_strategy, reinforcement_strategies};
use super::summary::{apply_dominant_conditions, factor_composition, races_in_pattern};
use super::types::{RotationPattern, ScenarioEntry, ScenarioKind, SlotEntry};

/// 생성 패턴 수 상한 (레전드 합성 제외)
pub const MAX_PATTERNS: usize = 20;

/// 한 육성 대상의 로테이션 패턴 일람을 생성한다.
///
/// 카탈로그·프로필은 읽기 전용이며, 사용 완료 집합 등 런 상태는 전부
/// 이 호출 안에서만 산다. 같은 입력이면 같은 출력을 낸다.
pub fn generate_patterns(
    catalog: &RaceCatalog,
    profile: &TraineeProfile,
    run_race_ids: &FxHashSet<RaceId>,
    mandates: &[ScenarioEntry],
) -> Vec<RotationPattern> {
    let remaining_all: Vec<&RaceEvent> = catalog
        .events()
        .iter()
        .filter(|r| r.is_graded() && !run_race_ids.contains(&r.race_id))
        .collect();

    let strategies = reinforcement_strategies(profile, &remaining_all);
    let (_, scenario_ids) = extract_conflicts(mandates, &remaining_all, catalog);

    let has_remaining_larc =
        remaining_all.iter().any(|r| CHAIN_KEY_NAMES.contains(&r.race_name.as_str()));
    let mut larc_created = !has_remaining_larc;
    let mut used = initialize_used(&scenario_ids, &remaining_all);

    log::debug!(
        "pattern generation start: trainee={} remaining={} strategies={} mandates={}",
        profile.name,
        remaining_all.len(),
        strategies.len(),
        mandates.len()
    );

    let mut patterns: Vec<RotationPattern> = Vec::new();
    let mut index = 0usize;
    loop {
        let used_before = used.len();
        let strategy = strategies[index % strategies.len()].clone();

        let remaining = filter_by_strategy(&remaining_all, strategy.as_ref(), profile);
        let (conflicting, _) = extract_conflicts(mandates, &remaining, catalog);
        let available: Vec<&RaceEvent> =
            conflicting.iter().filter(|r| !used.contains(&r.race_id)).copied().collect();

        let (preferred_surface, preferred_distance) = preferred_conditions(profile, &available);
        let (mut pattern, _) =
            build_base_pattern(&conflicting, &mut used, preferred_surface, preferred_distance);
        pattern.strategy = strategy.clone();

        let larc = apply_larc_scenario(&mut pattern, larc_created, catalog, &mut used);
        larc_created = larc.created;
        pattern.scenario = if larc.applied { ScenarioKind::Larc } else { ScenarioKind::Standard };

        fill_junior_slots(&mut pattern, &remaining, &mut used);
        fill_empty_slots(&mut pattern, &remaining, &mut used);

        let final_races = races_in_pattern(&pattern, catalog);
        apply_dominant_conditions(&mut pattern, &final_races);
        pattern.factors = factor_composition(profile, &final_races, strategy.as_ref(), larc.applied);
        pattern.total_races = final_races.len();

        if used.len() > used_before || larc.applied {
            patterns.push(pattern);
        } else {
            break;
        }
        index += 1;
        if index >= MAX_PATTERNS {
            break;
        }
    }

    // 시나리오 지정 레이스의 수용: 충돌 없는 첫 통상 패턴에 덮어쓴다
    let mut found_non_conflicting = false;
    if !mandates.is_empty() {
        for pattern in patterns.iter_mut() {
            if pattern.scenario != ScenarioKind::Standard {
                continue;
            }
            if mandate_slots_clash(pattern, mandates, catalog) {
                continue;
            }
            overlay_mandates(pattern, mandates, catalog, false);
            pattern.scenario = ScenarioKind::Legend;
            pattern.strategy = None;
            let races = races_in_pattern(pattern, catalog);
            apply_dominant_conditions(pattern, &races);
            pattern.factors = factor_composition(profile, &races, None, false);
            pattern.total_races = races.len();
            found_non_conflicting = true;
            break;
        }
    }

    // 통상 패턴으로 남은 것의 ラーク 재판정
    for pattern in patterns.iter_mut() {
        if pattern.scenario == ScenarioKind::Standard {
            recheck_larc_scenario(pattern, catalog);
        }
    }

    if mandates.iter().any(|m| run_race_ids.contains(&m.race_id)) {
        found_non_conflicting = true;
    }

    // 어느 패턴에도 수용되지 않았으면 전용 레전드 패턴을 합성한다
    if !mandates.is_empty() && !found_non_conflicting {
        let mut pattern = calendar::empty_pattern();
        pattern.scenario = ScenarioKind::Legend;
        overlay_mandates(&mut pattern, mandates, catalog, true);
        fill_empty_slots(&mut pattern, &remaining_all, &mut used);
        let races = races_in_pattern(&pattern, catalog);
        apply_dominant_conditions(&mut pattern, &races);
        pattern.factors = factor_composition(profile, &races, None, false);
        pattern.total_races = races.len();
        patterns.push(pattern);
    }

    log::debug!("pattern generation done: trainee={} patterns={}", profile.name, patterns.len());
    patterns
}

/// 시나리오 레이스의 슬롯이 이미 차 있는 패턴인지
fn mandate_slots_clash(
    pattern: &RotationPattern,
    mandates: &[ScenarioEntry],
    catalog: &RaceCatalog,
) -> bool {
    mandates.iter().any(|mandate| {
        let Some(race) = catalog.get(mandate.race_id) else {
            return false;
        };
        let stage = race.resolved_stage(mandate.stage);
        pattern
            .stage_slots(stage)
            .iter()
            .any(|slot| slot.month == race.month && slot.half == race.half && slot.is_filled())
    })
}

/// 시나리오 레이스를 해당 슬롯에 배치한다.
///
/// `force`가 아니면 빈 슬롯만 채운다 (기존 패턴에의 덮어쓰기용).
fn overlay_mandates(
    pattern: &mut RotationPattern,
    mandates: &[ScenarioEntry],
    catalog: &RaceCatalog,
    force: bool,
) {
    for mandate in mandates {
        let Some(race) = catalog.get(mandate.race_id) else {
            continue;
        };
        let stage = race.resolved_stage(mandate.stage);
        let slot = pattern
            .stage_slots_mut(stage)
            .iter_mut()
            .find(|s| s.month == race.month && s.half == race.half && (force || !s.is_filled()));
        if let Some(slot) = slot {
            slot.entry = Some(SlotEntry::from(race));
        }
    }
}

/// 생성 결과 (대상 이름 + 패턴 일람)
#[derive(Debug, Clone, Serialize)]
pub struct TraineeRotation {
    pub trainee_name: String,
    pub patterns: Vec<RotationPattern>,
}

/// 로스터의 시나리오 지정(이름 참조)을 카탈로그 id로 해결한다.
/// 해결되지 않는 이름은 건너뛴다.
pub fn scenario_entries_for(
    profile: &TraineeProfile,
    catalog: &RaceCatalog,
) -> Vec<ScenarioEntry> {
    profile
        .scenarios
        .iter()
        .enumerate()
        .filter_map(|(idx, spec)| {
            catalog.lookup_name(&spec.race_name).map(|race| {
                ScenarioEntry::new(race.race_id, (idx + 1) as u16, spec.stage)
            })
        })
        .collect()
}

/// 로스터 경유의 생성 입구: 미등록 id는 NotFound로 돌려준다
pub fn generate_for_trainee(
    catalog: &RaceCatalog,
    roster: &TraineeRoster,
    trainee_id: u32,
    run_race_ids: &FxHashSet<RaceId>,
) -> CoreResult<TraineeRotation> {
    let profile = roster.find(trainee_id)?;
    let mandates = scenario_entries_for(profile, catalog);
    let patterns = generate_patterns(catalog, profile, run_race_ids, &mandates);
    Ok(TraineeRotation { trainee_name: profile.name.clone(), patterns })
}
