//! Shuffled item columns of one question instance.

use crate::types::{Item, Side};
use rand::seq::SliceRandom;
use rand::Rng;

/// Left and right items in presentation order.
///
/// Orderings stay fixed until [`ItemRegistry::reshuffle`] is called. The
/// registry also defines which ids are selectable on each side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRegistry {
    left: Vec<Item>,
    right: Vec<Item>,
}

impl ItemRegistry {
    /// Registry keeping the authored order of both columns.
    pub fn new(left: Vec<Item>, right: Vec<Item>) -> Self {
        Self { left, right }
    }

    /// Registry with both columns independently shuffled.
    pub fn shuffled<R: Rng + ?Sized>(left: Vec<Item>, right: Vec<Item>, rng: &mut R) -> Self {
        let mut registry = Self::new(left, right);
        registry.reshuffle(rng);
        registry
    }

    /// Produce fresh, independent orderings of both columns.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.left.shuffle(rng);
        self.right.shuffle(rng);
    }

    pub fn left(&self) -> &[Item] {
        &self.left
    }

    pub fn right(&self) -> &[Item] {
        &self.right
    }

    pub fn items(&self, side: Side) -> &[Item] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Whether `id` names an item in the given column.
    pub fn contains(&self, side: Side, id: &str) -> bool {
        self.items(side).iter().any(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}
