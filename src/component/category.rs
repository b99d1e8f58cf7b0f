use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the eight slots every build must fill.
///
/// Declaration order is the canonical order used for maps, reports and
/// fingerprints. Selection follows [`Category::SELECTION_ORDER`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Motherboard,
    Ram,
    Gpu,
    Storage,
    Case,
    Psu,
    Cooler,
}

#[derive(Debug, Error)]
#[error("Unknown component category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Ram,
        Category::Gpu,
        Category::Storage,
        Category::Case,
        Category::Psu,
        Category::Cooler,
    ];

    /// Dependencies before dependents: CPU before motherboard before RAM and
    /// cooler, GPU before case, CPU and GPU before PSU.
    pub const SELECTION_ORDER: [Category; 8] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Ram,
        Category::Gpu,
        Category::Case,
        Category::Storage,
        Category::Psu,
        Category::Cooler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Motherboard => "motherboard",
            Category::Ram => "ram",
            Category::Gpu => "gpu",
            Category::Storage => "storage",
            Category::Case => "case",
            Category::Psu => "psu",
            Category::Cooler => "cooler",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or(UnknownCategory(s.to_string()))
    }
}
