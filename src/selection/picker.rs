use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::component::{Component, ComponentId};
use crate::selection::budgeting::reserve_for_remaining;
use crate::selection::config::GeneratorConfig;
use crate::selection::ranking::Scorer;

/// Budget context for picking one category's part.
#[derive(Debug, Clone, Copy)]
pub struct StepBudget {
    /// This category's slice of the total budget under the active allocation.
    pub ideal: f64,
    /// Total budget minus everything chosen so far.
    pub remaining: f64,
    /// 1-based position in the selection order.
    pub step: usize,
    pub total_steps: usize,
}

/// Internal: an affordable candidate with its ranking inputs.
#[derive(Debug, Clone)]
pub struct RankedCandidate<'a> {
    pub component: &'a Component,
    pub score: f64,
    /// Absolute distance from the target price.
    pub distance: f64,
    group: usize,
}

/// Order candidates best-first.
///
/// Primary key is score, descending. Runs of scores where each is within
/// `tie_window` of its predecessor form a tie group, ordered internally by
/// closeness to `target`. Grouping keeps the comparison a total order.
pub fn rank_candidates<'a, S>(
    candidates: &[&'a Component],
    target: f64,
    tie_window: f64,
    scorer: &S,
) -> Vec<RankedCandidate<'a>>
where
    S: Scorer + ?Sized,
{
    let mut ranked: Vec<RankedCandidate<'a>> = candidates
        .iter()
        .map(|&component| RankedCandidate {
            component,
            score: scorer.score(component),
            distance: (component.price - target).abs(),
            group: 0,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut group = 0;
    let mut previous: Option<f64> = None;
    for candidate in &mut ranked {
        if let Some(prev) = previous {
            if prev - candidate.score > tie_window {
                group += 1;
            }
        }
        candidate.group = group;
        previous = Some(candidate.score);
    }

    ranked.sort_by(|a, b| {
        a.group
            .cmp(&b.group)
            .then_with(|| a.distance.total_cmp(&b.distance))
    });

    debug_assert!(ranked.windows(2).all(|w| w[0].group <= w[1].group));
    ranked
}

/// Pick one part from `pool` balancing value and budget fit.
///
/// A share of the remaining budget is held back for the categories still to
/// come. When nothing fits what is left, the cheapest part is returned anyway
/// so the attempt keeps moving; the caller catches an overall overrun. Among
/// affordable parts, one of the top-ranked few is drawn with exponentially
/// decreasing weight, so repeated runs at one budget vary.
///
/// Returns `None` only for an empty pool.
pub fn select_component<'a, S, R>(
    pool: &[&'a Component],
    budget: StepBudget,
    scorer: &S,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<&'a Component>
where
    S: Scorer + ?Sized,
    R: Rng + ?Sized,
{
    let mut by_price: Vec<&'a Component> = pool.to_vec();
    by_price.sort_by(|a, b| a.price.total_cmp(&b.price));
    let cheapest = *by_price.first()?;

    let reserve = reserve_for_remaining(
        budget.remaining,
        budget.step,
        budget.total_steps,
        config.reserve_per_remaining_step,
    );
    let available = budget.remaining - reserve;

    let affordable: Vec<&'a Component> = by_price
        .into_iter()
        .filter(|c| c.price <= available)
        .collect();
    if affordable.is_empty() {
        return Some(cheapest);
    }

    let target = budget.ideal.min(available);
    let ranked = rank_candidates(&affordable, target, config.score_tie_window, scorer);

    let top = config.top_candidates.max(1).min(ranked.len());
    let weights: Vec<f64> = (0..top).map(|i| 2f64.powi((top - i) as i32)).collect();
    let index = match WeightedIndex::new(&weights) {
        Ok(dist) => dist.sample(rng),
        Err(_) => 0,
    };

    Some(ranked[index].component)
}

/// Uniform pick among the `limit` cheapest parts that cost at most `ceiling`.
pub fn select_cheap<'a, R>(
    pool: &[&'a Component],
    limit: usize,
    ceiling: f64,
    rng: &mut R,
) -> Option<&'a Component>
where
    R: Rng + ?Sized,
{
    let mut by_price: Vec<&'a Component> = pool
        .iter()
        .copied()
        .filter(|c| c.price <= ceiling)
        .collect();
    by_price.sort_by(|a, b| a.price.total_cmp(&b.price));
    by_price.truncate(limit.max(1));

    if by_price.is_empty() {
        return None;
    }
    Some(by_price[rng.gen_range(0..by_price.len())])
}

/// Up to `limit` parts from `pool`, cheapest first, excluding `selected`.
pub fn alternatives<'a, I>(pool: I, selected: &ComponentId, limit: usize) -> Vec<&'a Component>
where
    I: IntoIterator<Item = &'a Component>,
{
    let mut others: Vec<&'a Component> = pool.into_iter().filter(|c| &c.id != selected).collect();
    others.sort_by(|a, b| a.price.total_cmp(&b.price));
    others.truncate(limit);
    others
}
