//! Dining table seat map

use shared::order::{SeatNumber, SeatOrder, TableId};
use std::collections::BTreeMap;

/// A table and the pending order at each occupied seat
///
/// Seat numbers are validated by the manager before they reach the table.
#[derive(Debug, Clone)]
pub struct DiningTable {
    id: TableId,
    capacity: SeatNumber,
    seats: BTreeMap<SeatNumber, SeatOrder>,
}

impl DiningTable {
    pub fn new(id: TableId, capacity: SeatNumber) -> Self {
        Self {
            id,
            capacity,
            seats: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn capacity(&self) -> SeatNumber {
        self.capacity
    }

    /// Record an order at a seat, returning the order it replaced
    pub fn place(&mut self, seat: SeatNumber, order: SeatOrder) -> Option<SeatOrder> {
        self.seats.insert(seat, order)
    }

    pub fn seat(&self, seat: SeatNumber) -> Option<&SeatOrder> {
        self.seats.get(&seat)
    }

    /// Occupied seats in seat order
    pub fn orders(&self) -> impl Iterator<Item = (SeatNumber, &SeatOrder)> {
        self.seats.iter().map(|(seat, order)| (*seat, order))
    }

    pub fn occupied_seats(&self) -> usize {
        self.seats.len()
    }

    pub fn is_clear(&self) -> bool {
        self.seats.is_empty()
    }

    /// Remove every order, returning how many seats were occupied
    pub fn clear(&mut self) -> usize {
        let cleared = self.seats.len();
        self.seats.clear();
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Entree;
    use shared::order::OrderInput;

    fn order(entree: Entree) -> SeatOrder {
        SeatOrder::from_input(&OrderInput::new(entree)).unwrap()
    }

    #[test]
    fn test_new_table_is_clear() {
        let table = DiningTable::new(3, 4);
        assert_eq!(table.id(), 3);
        assert_eq!(table.capacity(), 4);
        assert!(table.is_clear());
    }

    #[test]
    fn test_place_replaces_previous_order() {
        let mut table = DiningTable::new(1, 4);
        assert_eq!(table.place(2, order(Entree::Steak)), None);
        assert_eq!(table.place(2, order(Entree::Pasta)), Some(order(Entree::Steak)));
        assert_eq!(table.seat(2), Some(&order(Entree::Pasta)));
        assert_eq!(table.occupied_seats(), 1);
    }

    #[test]
    fn test_orders_iterate_by_seat() {
        let mut table = DiningTable::new(1, 4);
        table.place(3, order(Entree::Chicken));
        table.place(1, order(Entree::Steak));
        let seats: Vec<_> = table.orders().map(|(seat, _)| seat).collect();
        assert_eq!(seats, vec![1, 3]);
    }

    #[test]
    fn test_clear_empties_seats() {
        let mut table = DiningTable::new(1, 4);
        table.place(1, order(Entree::Steak));
        table.place(2, order(Entree::Lobster));
        assert_eq!(table.clear(), 2);
        assert!(table.is_clear());
        assert_eq!(table.clear(), 0);
    }
}
