use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::report::compatibility::{check_compatibility, CompatibilityReport};
use crate::selection::budgeting::round_cents;
use crate::types::build::Build;

/// What changed when a part was swapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOutcome {
    /// The part that was displaced, if the slot was filled.
    pub previous: Option<Component>,
    /// New part price minus old part price, in cents precision.
    pub price_difference: f64,
    /// Fresh report for the build after the swap.
    pub report: CompatibilityReport,
}

/// Put `replacement` into its category's slot and revalidate.
///
/// The swap always happens, even if it makes the build incompatible; the
/// returned report says so.
pub fn swap_component(build: &mut Build, replacement: Component) -> SwapOutcome {
    let category = replacement.category();
    let new_price = replacement.price;
    let previous = build.insert(replacement);
    let old_price = previous.as_ref().map_or(0.0, |p| p.price);

    tracing::debug!(%category, price_difference = new_price - old_price, "swapped component");

    SwapOutcome {
        previous,
        price_difference: round_cents(new_price - old_price),
        report: check_compatibility(&*build),
    }
}

impl Build {
    /// Method form of [`swap_component`].
    pub fn swap(&mut self, replacement: Component) -> SwapOutcome {
        swap_component(self, replacement)
    }
}
