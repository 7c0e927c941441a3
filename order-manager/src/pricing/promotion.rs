//! Included Dessert Promotion
//!
//! Matches an order's entree, salad and beverage against the configured
//! qualifying combinations.

use shared::models::{Dessert, DessertPromotion};
use shared::order::OrderInput;

/// First promotion the order qualifies for
pub fn find_promotion<'a>(
    promotions: &'a [DessertPromotion],
    order: &OrderInput,
) -> Option<&'a DessertPromotion> {
    promotions
        .iter()
        .find(|promo| promo.matches(order.entree, order.salad, order.beverage))
}

/// Set the dessert to `IncludedDessert` when the order qualifies
///
/// Returns whether the order qualified. Non-qualifying orders are left
/// untouched, and applying twice gives the same order as applying once.
pub fn apply_included_dessert(promotions: &[DessertPromotion], order: &mut OrderInput) -> bool {
    if find_promotion(promotions, order).is_none() {
        return false;
    }
    order.dessert = Dessert::IncludedDessert;
    true
}
