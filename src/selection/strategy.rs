use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::CategorySet;
use crate::component::{Category, Component};
use crate::selection::budgeting::{cheapest_price, exceeds, PRICE_EPSILON};
use crate::selection::compatibility::compatible_pool;
use crate::selection::config::{AllocationTable, GeneratorConfig};
use crate::selection::picker::{alternatives, select_cheap, select_component, StepBudget};
use crate::selection::ranking::Scorer;
use crate::types::build::PartialBuild;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Standard,
    BudgetOptimized,
    Aggressive,
    MinimumViable,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrategyKind::Standard => "standard",
            StrategyKind::BudgetOptimized => "budget_optimized",
            StrategyKind::Aggressive => "aggressive",
            StrategyKind::MinimumViable => "minimum_viable",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Plan {
    /// Smart selection guided by per-category budget slices.
    Allocate(AllocationTable),
    /// Cheapest compatible parts, lightly randomized.
    MinimumViable,
}

/// One full attempt at assembling a build.
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy {
    pub kind: StrategyKind,
    pub plan: Plan,
}

impl Strategy {
    /// The ordered retry cascade: standard (jittered per call), then
    /// budget-optimized, aggressive, and finally minimum-viable.
    pub fn ladder<R>(config: &GeneratorConfig, rng: &mut R) -> Vec<Strategy>
    where
        R: Rng + ?Sized,
    {
        vec![
            Strategy {
                kind: StrategyKind::Standard,
                plan: Plan::Allocate(config.standard.jittered(config.allocation_jitter, rng)),
            },
            Strategy {
                kind: StrategyKind::BudgetOptimized,
                plan: Plan::Allocate(config.budget_optimized.clone()),
            },
            Strategy {
                kind: StrategyKind::Aggressive,
                plan: Plan::Allocate(config.aggressive.clone()),
            },
            Strategy {
                kind: StrategyKind::MinimumViable,
                plan: Plan::MinimumViable,
            },
        ]
    }

    pub(crate) fn run<'a, S, R>(
        &self,
        catalog: &'a CategorySet,
        budget: f64,
        scorer: &S,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<Assembly<'a>, AttemptFailure>
    where
        S: Scorer + ?Sized,
        R: Rng + ?Sized,
    {
        match &self.plan {
            Plan::Allocate(table) => allocate(catalog, budget, table, scorer, config, rng),
            Plan::MinimumViable => minimum_viable(catalog, budget, config, rng),
        }
    }
}

/// Why a single strategy attempt gave up. Recovered by moving to the next
/// strategy; only surfaced once every strategy has failed.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum AttemptFailure {
    #[error("No compatible {category} found")]
    NoCompatibleParts { category: Category },
    #[error("No {category} fits the remaining budget")]
    NoAffordableParts { category: Category },
    #[error("Budget exceeded after choosing {category} (running total {total})")]
    BudgetExceeded { category: Category, total: f64 },
}

/// Internal: a successful attempt, still borrowing from the catalog.
#[derive(Debug, Clone)]
pub(crate) struct Assembly<'a> {
    pub parts: PartialBuild<'a>,
    pub alternatives: BTreeMap<Category, Vec<&'a Component>>,
    pub total: f64,
}

impl<'a> Assembly<'a> {
    fn new() -> Self {
        Assembly {
            parts: PartialBuild::new(),
            alternatives: BTreeMap::new(),
            total: 0.0,
        }
    }

    fn accept(
        &mut self,
        category: Category,
        chosen: &'a Component,
        pool: &[&'a Component],
        budget: f64,
        limit: usize,
    ) -> Result<(), AttemptFailure> {
        self.parts.insert(chosen);
        self.alternatives
            .insert(category, alternatives(pool.iter().copied(), &chosen.id, limit));
        self.total += chosen.price;

        if exceeds(self.total, budget) {
            return Err(AttemptFailure::BudgetExceeded {
                category,
                total: self.total,
            });
        }
        Ok(())
    }
}

fn allocate<'a, S, R>(
    catalog: &'a CategorySet,
    budget: f64,
    table: &AllocationTable,
    scorer: &S,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Assembly<'a>, AttemptFailure>
where
    S: Scorer + ?Sized,
    R: Rng + ?Sized,
{
    let mut assembly = Assembly::new();
    let total_steps = Category::SELECTION_ORDER.len();

    for (index, category) in Category::SELECTION_ORDER.into_iter().enumerate() {
        let pool = compatible_pool(catalog, category, &assembly.parts);
        if pool.is_empty() {
            return Err(AttemptFailure::NoCompatibleParts { category });
        }

        let step = StepBudget {
            ideal: budget * table.fraction(category),
            remaining: budget - assembly.total,
            step: index + 1,
            total_steps,
        };
        let chosen = select_component(&pool, step, scorer, config, rng)
            .ok_or(AttemptFailure::NoCompatibleParts { category })?;

        assembly.accept(category, chosen, &pool, budget, config.alternatives_limit)?;
    }

    Ok(assembly)
}

fn minimum_viable<'a, R>(
    catalog: &'a CategorySet,
    budget: f64,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Assembly<'a>, AttemptFailure>
where
    R: Rng + ?Sized,
{
    let failure = match cheapest_first(catalog, budget, config, rng) {
        Ok(assembly) => return Ok(assembly),
        Err(failure) => failure,
    };

    debug!(%failure, "randomized cheapest-first pass failed, searching in price order");
    let mut selected = PartialBuild::new();
    let mut visits = 0;
    let found = descend(
        catalog,
        &Category::SELECTION_ORDER,
        budget,
        &mut selected,
        0.0,
        &mut visits,
        config.fallback_search_limit,
    );
    if !found {
        debug!(visits, "no build fits the budget");
        return Err(failure);
    }

    // Replay the found parts in order so alternatives come from the same pools.
    let mut assembly = Assembly::new();
    for category in Category::SELECTION_ORDER {
        let pool = compatible_pool(catalog, category, &assembly.parts);
        let chosen = selected
            .get(category)
            .ok_or(AttemptFailure::NoCompatibleParts { category })?;
        assembly.accept(category, chosen, &pool, budget, config.alternatives_limit)?;
    }
    Ok(assembly)
}

/// Cheapest compatible parts, drawn at random from the few cheapest that
/// still leave room for the rest of the build.
fn cheapest_first<'a, R>(
    catalog: &'a CategorySet,
    budget: f64,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Assembly<'a>, AttemptFailure>
where
    R: Rng + ?Sized,
{
    let mut assembly = Assembly::new();
    let order = Category::SELECTION_ORDER;

    for (index, category) in order.into_iter().enumerate() {
        let pool = compatible_pool(catalog, category, &assembly.parts);
        if pool.is_empty() {
            return Err(AttemptFailure::NoCompatibleParts { category });
        }

        // Leave room for the cheapest part of every category still to come.
        let floor_after: f64 = order[index + 1..]
            .iter()
            .filter_map(|c| cheapest_price(catalog, *c))
            .sum();
        let ceiling = budget - assembly.total - floor_after + PRICE_EPSILON;

        let chosen = select_cheap(&pool, config.fallback_candidates, ceiling, rng)
            .ok_or(AttemptFailure::NoAffordableParts { category })?;

        assembly.accept(category, chosen, &pool, budget, config.alternatives_limit)?;
    }

    Ok(assembly)
}

/// Lower bound on completing `selected` with one part from each of
/// `remaining`. `None` when some category has no compatible part left.
fn cheapest_completion(
    catalog: &CategorySet,
    selected: &PartialBuild<'_>,
    remaining: &[Category],
) -> Option<f64> {
    remaining
        .iter()
        .map(|category| {
            compatible_pool(catalog, *category, selected)
                .into_iter()
                .map(|c| c.price)
                .min_by(|a, b| a.total_cmp(b))
        })
        .sum()
}

/// Depth-first search over compatible pools in ascending price, pruned by
/// [`cheapest_completion`]. Finds a fitting build whenever one exists, unless
/// more than `limit` candidates are visited first.
fn descend<'a>(
    catalog: &'a CategorySet,
    order: &[Category],
    budget: f64,
    selected: &mut PartialBuild<'a>,
    total: f64,
    visits: &mut usize,
    limit: usize,
) -> bool {
    let Some((&category, rest)) = order.split_first() else {
        return true;
    };

    let mut pool = compatible_pool(catalog, category, &*selected);
    pool.sort_by(|a, b| a.price.total_cmp(&b.price));

    for candidate in pool {
        *visits += 1;
        if *visits > limit {
            return false;
        }

        let running = total + candidate.price;
        if exceeds(running, budget) {
            break;
        }

        selected.insert(candidate);
        let fits = cheapest_completion(catalog, selected, rest)
            .is_some_and(|floor| !exceeds(running + floor, budget));
        if fits && descend(catalog, rest, budget, selected, running, visits, limit) {
            return true;
        }
        selected.remove(category);
    }

    false
}
