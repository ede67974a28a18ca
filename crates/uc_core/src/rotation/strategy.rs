// 강화 전략 생성과 전략 기반 후보 필터
use fxhash::FxHashSet;

use crate::catalog::RaceEvent;
use crate::profile::{Category, TraineeProfile};

use super::types::Strategy;

/// 저적성(점수 0 이하) 카테고리 쌍에서 강화 전략 후보를 도출한다.
///
/// 쌍이 성립하려면 잔존 레이스 중에 (馬場, 거리) 카테고리가 정확히 그 쌍을
/// 이루는 레이스가 하나 이상 있어야 한다. 성립하는 쌍이 없으면 편향 없는
/// 단일 전략(None)만 반환한다.
pub fn reinforcement_strategies(
    profile: &TraineeProfile,
    remaining: &[&RaceEvent],
) -> Vec<Option<Strategy>> {
    let low: Vec<Category> =
        Category::ALL.iter().copied().filter(|&c| profile.aptitude(c) <= 0).collect();

    let race_combos: FxHashSet<(Category, Category)> = remaining
        .iter()
        .map(|r| (Category::of_surface(r.surface), Category::of_distance(r.distance)))
        .collect();

    let mut strategies = Vec::new();
    if low.len() >= 2 {
        for i in 0..low.len() {
            for j in (i + 1)..low.len() {
                let (first, second) = (low[i], low[j]);
                let combo_needed = race_combos.iter().any(|&(surface, distance)| {
                    (surface == first || surface == second)
                        && (distance == first || distance == second)
                });
                if combo_needed {
                    strategies.push(Some(Strategy::pair(first, second, 3)));
                }
            }
        }
    }

    if strategies.is_empty() {
        strategies.push(None);
    }
    strategies
}

/// 전략이 지원하지 않는 저적성 카테고리의 레이스를 후보에서 제외한다.
pub fn filter_by_strategy<'a>(
    races: &[&'a RaceEvent],
    strategy: Option<&Strategy>,
    profile: &TraineeProfile,
) -> Vec<&'a RaceEvent> {
    let Some(strategy) = strategy else {
        return races.to_vec();
    };

    let unsupported: FxHashSet<Category> = Category::ALL
        .iter()
        .copied()
        .filter(|&c| profile.aptitude(c) <= 0 && !strategy.contains(c))
        .collect();

    if unsupported.is_empty() {
        return races.to_vec();
    }

    races
        .iter()
        .filter(|r| {
            !unsupported.contains(&Category::of_surface(r.surface))
                && !unsupported.contains(&Category::of_distance(r.distance))
        })
        .copied()
        .collect()
}
