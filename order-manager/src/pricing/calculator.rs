//! Check Calculator
//!
//! Prices seat orders against the price table. All prices are whole currency
//! units, so sums are exact integer arithmetic.

use shared::models::{Money, PriceTable};
use shared::order::SeatOrder;

/// Price of a single seat order
///
/// entree + salad (if any) + beverage (if any) + dessert (if any).
/// An included dessert is present on the order but priced at zero.
pub fn order_price(prices: &PriceTable, order: &SeatOrder) -> Money {
    let salad = order.salad.map_or(0, |s| prices.salad(s));
    let beverage = order.beverage.map_or(0, |b| prices.beverage(b));
    prices.entree(order.entree) + salad + beverage + prices.dessert(order.dessert)
}

/// Sum of order prices across seats
pub fn check_total<'a>(
    prices: &PriceTable,
    orders: impl IntoIterator<Item = &'a SeatOrder>,
) -> Money {
    orders
        .into_iter()
        .map(|order| order_price(prices, order))
        .sum()
}
