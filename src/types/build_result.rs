use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::component::{Category, Component};
use crate::report::{swap_component, CompatibilityReport, SwapOutcome};
use crate::selection::strategy::{AttemptFailure, StrategyKind};
use crate::types::build::Build;
use crate::types::identifiers::BuildFingerprint;

/// A successful generation. Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedBuild {
    pub build: Build,
    pub total_price: f64,
    pub budget: f64,
    /// Which rung of the strategy ladder produced this build.
    pub strategy: StrategyKind,
    pub compatibility_report: CompatibilityReport,
    /// Up to N substitutes per category from the same compatible pool,
    /// cheapest first, never including the selected part.
    pub alternatives: BTreeMap<Category, Vec<Component>>,
    pub minimum_required_budget: f64,
    /// `total_price / budget` as a percentage, one decimal.
    pub budget_utilization: f64,
    pub fingerprint: BuildFingerprint,
    pub generated_at: DateTime<Utc>, // informational only
}

impl GeneratedBuild {
    /// Swap one part and bring price, report and fingerprint up to date.
    ///
    /// The replacement leaves its category's alternatives and the displaced
    /// part joins them in price order, keeping the list at most as long as
    /// before (one entry for a previously empty list). The result may exceed
    /// the original budget; the caller decides whether that is acceptable.
    pub fn swap(&mut self, replacement: Component) -> SwapOutcome {
        let category = replacement.category();
        let replacement_id = replacement.id.clone();

        let outcome = swap_component(&mut self.build, replacement);

        let alts = self.alternatives.entry(category).or_default();
        let keep = alts.len().max(1);
        alts.retain(|c| c.id != replacement_id);
        if let Some(previous) = &outcome.previous {
            if previous.id != replacement_id && alts.iter().all(|c| c.id != previous.id) {
                let at = alts.partition_point(|c| c.price <= previous.price);
                alts.insert(at, previous.clone());
            }
        }
        alts.truncate(keep);
        self.total_price = self.build.total_price();
        self.budget_utilization = utilization(self.total_price, self.budget);
        self.compatibility_report = outcome.report.clone();
        self.fingerprint = self.build.fingerprint();

        outcome
    }
}

/// Percentage of `budget` spent, rounded to one decimal. Zero for a zero budget.
pub fn utilization(total: f64, budget: f64) -> f64 {
    if budget <= 0.0 {
        return 0.0;
    }
    (total / budget * 1000.0).round() / 10.0
}

/// One strategy that did not produce a build, and why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedAttempt {
    pub strategy: StrategyKind,
    #[serde(flatten)]
    pub failure: AttemptFailure,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Invalid budget: {0}")]
    InvalidBudget(f64),

    #[error("Component inventory is incomplete: no parts for {}", join_categories(.missing))]
    IncompleteCatalog { missing: Vec<Category> },

    #[error("The minimum build cost with the current inventory is ${minimum:.2}. Increase your budget to continue.")]
    BudgetTooLow { budget: f64, minimum: f64 },

    #[error("Unable to generate a build within ${budget:.2} budget. Try increasing your budget to at least ${minimum:.2}.")]
    Exhausted {
        budget: f64,
        minimum: f64,
        attempts: Vec<FailedAttempt>,
    },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl GenerationError {
    /// The budget the caller should raise to, when one is known. Infinite
    /// for an incomplete catalog.
    pub fn minimum_required_budget(&self) -> Option<f64> {
        match self {
            GenerationError::IncompleteCatalog { .. } => Some(f64::INFINITY),
            GenerationError::BudgetTooLow { minimum, .. } => Some(*minimum),
            GenerationError::Exhausted { minimum, .. } => Some(*minimum),
            GenerationError::InvalidBudget(_) | GenerationError::Catalog(_) => None,
        }
    }
}

fn join_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flat `{ success, ... }` envelope for callers that hand results straight to
/// a UI or persistence layer.
///
/// An infinite minimum (incomplete catalog) serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<Build>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_report: Option<CompatibilityReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<BTreeMap<Category, Vec<Component>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub minimum_required_budget: Option<f64>,
}

impl From<GeneratedBuild> for GenerationResult {
    fn from(generated: GeneratedBuild) -> Self {
        GenerationResult {
            success: true,
            build: Some(generated.build),
            total_price: Some(generated.total_price),
            budget: Some(generated.budget),
            compatibility_report: Some(generated.compatibility_report),
            alternatives: Some(generated.alternatives),
            error: None,
            minimum_required_budget: Some(generated.minimum_required_budget),
        }
    }
}

impl From<GenerationError> for GenerationResult {
    fn from(err: GenerationError) -> Self {
        GenerationResult {
            success: false,
            build: None,
            total_price: None,
            budget: None,
            compatibility_report: None,
            alternatives: None,
            error: Some(err.to_string()),
            minimum_required_budget: err.minimum_required_budget().filter(|m| m.is_finite()),
        }
    }
}

impl From<Result<GeneratedBuild, GenerationError>> for GenerationResult {
    fn from(result: Result<GeneratedBuild, GenerationError>) -> Self {
        match result {
            Ok(generated) => generated.into(),
            Err(err) => err.into(),
        }
    }
}
