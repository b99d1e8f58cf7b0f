use crate::catalog::CategorySet;
use crate::component::Category;

/// Tolerance for comparing accumulated prices against a limit.
pub const PRICE_EPSILON: f64 = 1e-6;

/// Does `amount` go over `limit` by more than float noise?
pub fn exceeds(amount: f64, limit: f64) -> bool {
    amount - limit > PRICE_EPSILON
}

/// Round a currency amount to whole cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Cheapest part in `category`, ignoring compatibility. `None` for an empty pool.
pub fn cheapest_price(catalog: &CategorySet, category: Category) -> Option<f64> {
    catalog
        .components(category)
        .iter()
        .map(|c| c.price)
        .min_by(|a, b| a.total_cmp(b))
}

/// Sum of the cheapest part per required category, rounded to cents.
///
/// Cross-category compatibility is ignored, so this is a lower bound on the
/// cost of any complete build drawn from `catalog`. Returns infinity when a
/// category has no parts: no budget can fill it.
pub fn minimum_viable_cost(catalog: &CategorySet) -> f64 {
    let mut total = 0.0;
    for category in Category::ALL {
        match cheapest_price(catalog, category) {
            Some(price) => total += price,
            None => return f64::INFINITY,
        }
    }
    round_cents(total)
}

/// Share of `remaining` held back for the categories still to be chosen.
///
/// `step` is 1-based; the last step reserves nothing.
pub fn reserve_for_remaining(
    remaining: f64,
    step: usize,
    total_steps: usize,
    per_step: f64,
) -> f64 {
    let steps_left = total_steps.saturating_sub(step) as f64;
    remaining * steps_left * per_step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_shrinks_with_each_step() {
        let first = reserve_for_remaining(1000.0, 1, 8, 0.06);
        let last = reserve_for_remaining(1000.0, 8, 8, 0.06);
        assert!((first - 420.0).abs() < 1e-9);
        assert_eq!(last, 0.0);
    }

    #[test]
    fn round_cents_rounds_half_away() {
        assert_eq!(round_cents(10.005_1), 10.01);
        assert_eq!(round_cents(149.994), 149.99);
    }
}
