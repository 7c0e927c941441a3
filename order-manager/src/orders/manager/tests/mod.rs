use super::*;
use shared::models::{Beverage, Dessert, DessertPromotion, Entree, PriceTable, Salad};

fn create_test_manager() -> OrderManager {
    OrderManager::default()
}

fn prices() -> PriceTable {
    PriceTable::default()
}

// ========================================================================
// Helper: orders
// ========================================================================

fn entree_only(entree: Entree) -> OrderInput {
    OrderInput::new(entree)
}

fn steak_combo() -> OrderInput {
    OrderInput::new(Entree::Steak)
        .with_salad(Salad::Caesar)
        .with_beverage(Beverage::MixedDrink)
}

fn full_order(entree: Entree, salad: Salad, beverage: Beverage, dessert: Dessert) -> OrderInput {
    OrderInput::new(entree)
        .with_salad(salad)
        .with_beverage(beverage)
        .with_dessert(dessert)
}
