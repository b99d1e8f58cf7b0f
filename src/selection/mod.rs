pub mod budgeting;
pub mod compatibility;
pub mod config;
pub mod picker;
pub mod ranking;
pub mod strategy;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::catalog::{CatalogSource, CategorySet};
use crate::report::check_compatibility;
use crate::types::build_result::{utilization, FailedAttempt, GeneratedBuild, GenerationError};

pub use budgeting::{cheapest_price, minimum_viable_cost, round_cents};
pub use compatibility::{compatible_pool, is_compatible, swap_candidates};
pub use config::{AllocationTable, ConfigError, GeneratorConfig};
pub use picker::{
    alternatives, rank_candidates, select_cheap, select_component, RankedCandidate, StepBudget,
};
pub use ranking::{Scorer, ValueScorer};
pub use strategy::{AttemptFailure, Plan, Strategy, StrategyKind};

/// Assembles one compatible, budget-respecting build per call.
///
/// Holds no per-request state: the catalog and the random source are passed
/// in, so one generator can serve concurrent requests.
pub struct BuildGenerator<S> {
    scorer: S,
    config: GeneratorConfig,
}

impl Default for BuildGenerator<ValueScorer> {
    fn default() -> Self {
        Self {
            scorer: ValueScorer,
            config: GeneratorConfig::v0(),
        }
    }
}

impl<S> BuildGenerator<S>
where
    S: Scorer,
{
    pub fn new(scorer: S, config: GeneratorConfig) -> Self {
        Self { scorer, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate with the thread-local entropy source.
    pub fn generate(
        &self,
        catalog: &CategorySet,
        budget: f64,
    ) -> Result<GeneratedBuild, GenerationError> {
        self.generate_with_rng(catalog, budget, &mut rand::thread_rng())
    }

    /// Fetch a snapshot from `source`, then generate. Catalog failures are
    /// returned as-is and never retried.
    pub fn generate_from_source<C, R>(
        &self,
        source: &C,
        budget: f64,
        rng: &mut R,
    ) -> Result<GeneratedBuild, GenerationError>
    where
        C: CatalogSource + ?Sized,
        R: Rng + ?Sized,
    {
        let catalog = source.fetch_all_grouped()?;
        self.generate_with_rng(&catalog, budget, rng)
    }

    pub fn generate_with_rng<R>(
        &self,
        catalog: &CategorySet,
        budget: f64,
        rng: &mut R,
    ) -> Result<GeneratedBuild, GenerationError>
    where
        R: Rng + ?Sized,
    {
        // 0. Admissibility: reject what no strategy could satisfy
        if !budget.is_finite() || budget < 0.0 {
            return Err(GenerationError::InvalidBudget(budget));
        }

        let missing = catalog.missing_categories();
        if !missing.is_empty() {
            return Err(GenerationError::IncompleteCatalog { missing });
        }

        let minimum = minimum_viable_cost(catalog);
        if budget < minimum {
            debug!(budget, minimum, "budget below minimum viable cost");
            return Err(GenerationError::BudgetTooLow { budget, minimum });
        }

        // 1. Strategy cascade; the first assembly that fits wins
        let mut attempts = Vec::new();
        for strategy in Strategy::ladder(&self.config, rng) {
            if strategy.kind == StrategyKind::MinimumViable {
                warn!(
                    budget,
                    "allocation strategies exhausted, falling back to minimum viable build"
                );
            }

            match strategy.run(catalog, budget, &self.scorer, &self.config, rng) {
                Ok(assembly) => {
                    // 2. Validate and package
                    let build = assembly.parts.to_build();
                    let total_price = round_cents(assembly.total);
                    let compatibility_report = check_compatibility(&build);
                    let alternatives = assembly
                        .alternatives
                        .into_iter()
                        .map(|(category, alts)| (category, alts.into_iter().cloned().collect()))
                        .collect();

                    info!(
                        strategy = %strategy.kind,
                        total_price,
                        budget,
                        compatible = compatibility_report.compatible,
                        "generated build"
                    );

                    return Ok(GeneratedBuild {
                        fingerprint: build.fingerprint(),
                        build,
                        total_price,
                        budget,
                        strategy: strategy.kind,
                        compatibility_report,
                        alternatives,
                        minimum_required_budget: minimum,
                        budget_utilization: utilization(total_price, budget),
                        generated_at: Utc::now(),
                    });
                }
                Err(failure) => {
                    debug!(strategy = %strategy.kind, %failure, "strategy attempt failed");
                    attempts.push(FailedAttempt {
                        strategy: strategy.kind,
                        failure,
                    });
                }
            }
        }

        Err(GenerationError::Exhausted {
            budget,
            minimum,
            attempts,
        })
    }
}
