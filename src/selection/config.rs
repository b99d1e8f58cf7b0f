use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::component::Category;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Per-category target fraction of the total budget.
///
/// Fractions express relative priority and need not sum to 1.0. A category
/// missing from the table gets no allocation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationTable {
    fractions: BTreeMap<Category, f64>,
}

impl AllocationTable {
    pub fn new(fractions: impl IntoIterator<Item = (Category, f64)>) -> Self {
        AllocationTable {
            fractions: fractions.into_iter().collect(),
        }
    }

    pub fn fraction(&self, category: Category) -> f64 {
        self.fractions.get(&category).copied().unwrap_or(0.0)
    }

    /// Each fraction shifted by an independent uniform offset in
    /// `[-amplitude, amplitude)`, floored at zero.
    pub fn jittered<R: Rng + ?Sized>(&self, amplitude: f64, rng: &mut R) -> Self {
        let fractions = self
            .fractions
            .iter()
            .map(|(category, fraction)| {
                let offset = (rng.gen::<f64>() - 0.5) * 2.0 * amplitude;
                (*category, (fraction + offset).max(0.0))
            })
            .collect();
        AllocationTable { fractions }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.fractions.iter().map(|(c, f)| (*c, *f))
    }

    pub fn standard() -> Self {
        AllocationTable::new([
            (Category::Cpu, 0.20),
            (Category::Gpu, 0.30),
            (Category::Motherboard, 0.12),
            (Category::Ram, 0.10),
            (Category::Storage, 0.10),
            (Category::Psu, 0.08),
            (Category::Case, 0.06),
            (Category::Cooler, 0.04),
        ])
    }

    /// Leans toward cheaper CPU, GPU and motherboard.
    pub fn budget_optimized() -> Self {
        AllocationTable::new([
            (Category::Cpu, 0.18),
            (Category::Gpu, 0.28),
            (Category::Motherboard, 0.10),
            (Category::Ram, 0.12),
            (Category::Storage, 0.12),
            (Category::Psu, 0.10),
            (Category::Case, 0.06),
            (Category::Cooler, 0.04),
        ])
    }

    pub fn aggressive() -> Self {
        AllocationTable::new([
            (Category::Cpu, 0.16),
            (Category::Gpu, 0.25),
            (Category::Motherboard, 0.09),
            (Category::Ram, 0.13),
            (Category::Storage, 0.14),
            (Category::Psu, 0.11),
            (Category::Case, 0.07),
            (Category::Cooler, 0.05),
        ])
    }
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub version: String,
    pub standard: AllocationTable,
    pub budget_optimized: AllocationTable,
    pub aggressive: AllocationTable,
    /// Half-width of the uniform offset applied to the standard table per call.
    pub allocation_jitter: f64,
    /// Fraction of the remaining budget reserved per category still to pick.
    pub reserve_per_remaining_step: f64,
    /// Scores closer than this are ranked by budget fit instead.
    pub score_tie_window: f64,
    pub top_candidates: usize,
    /// How many of the cheapest parts the minimum-viable pass chooses among.
    pub fallback_candidates: usize,
    /// Candidates the price-ordered fallback search may visit before giving up.
    pub fallback_search_limit: usize,
    pub alternatives_limit: usize,
}

impl GeneratorConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            standard: AllocationTable::standard(),
            budget_optimized: AllocationTable::budget_optimized(),
            aggressive: AllocationTable::aggressive(),
            allocation_jitter: 0.02,
            reserve_per_remaining_step: 0.06,
            score_tie_window: 0.1,
            top_candidates: 5,
            fallback_candidates: 3,
            fallback_search_limit: 100_000,
            alternatives_limit: 3,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let f = std::fs::File::open(path)?;
        let config: GeneratorConfig = serde_json::from_reader(std::io::BufReader::new(f))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let tables = [
            ("standard", &self.standard),
            ("budget_optimized", &self.budget_optimized),
            ("aggressive", &self.aggressive),
        ];
        for (name, table) in tables {
            if let Some((category, fraction)) =
                table.iter().find(|(_, f)| !f.is_finite() || *f < 0.0)
            {
                return Err(ConfigError::Invalid(format!(
                    "{name} allocation for {category} must be a non-negative number, got {fraction}"
                )));
            }
        }

        let scalars = [
            ("allocation_jitter", self.allocation_jitter),
            ("reserve_per_remaining_step", self.reserve_per_remaining_step),
            ("score_tie_window", self.score_tie_window),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let counts = [
            self.top_candidates,
            self.fallback_candidates,
            self.fallback_search_limit,
        ];
        if counts.contains(&0) {
            return Err(ConfigError::Invalid(
                "candidate counts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig::v0()
    }
}
