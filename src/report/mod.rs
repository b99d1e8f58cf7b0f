pub mod compatibility;
pub mod swap;

pub use compatibility::{check_compatibility, CompatibilityReport, RECOMMENDED_PSU_HEADROOM};
pub use swap::{swap_component, SwapOutcome};
