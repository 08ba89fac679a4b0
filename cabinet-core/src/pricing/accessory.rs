//! Accessory cost aggregation.

use crate::model::{AccessoryItem, AccessoryLine};

/// Anything priced per unit with a quantity.
pub trait Priced {
    fn unit_price(&self) -> f64;
    fn quantity(&self) -> f64;
}

impl Priced for AccessoryLine {
    fn unit_price(&self) -> f64 {
        self.price
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }
}

impl Priced for AccessoryItem {
    fn unit_price(&self) -> f64 {
        self.price
    }

    fn quantity(&self) -> f64 {
        self.quantity
    }
}

/// Sum of `price * quantity`. An empty list costs nothing.
pub fn accessory_cost<T: Priced>(accessories: &[T]) -> f64 {
    accessories
        .iter()
        .map(|a| a.unit_price() * a.quantity())
        .sum()
}
