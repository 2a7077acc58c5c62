//! Partition-plane selection strategies.
//!
//! Which polygon's plane partitions a node changes the tree's shape, and in
//! pathological inputs its depth, but never its correctness. The strategy
//! lives behind a trait so callers can trade build cost against balance.

use crate::polygon::Polygon;

/// Strategy for choosing the polygon whose plane partitions a node.
pub trait PlaneSelector {
    /// Index of the chosen polygon, or `None` for an empty slice.
    fn select(&self, polygons: &[Polygon]) -> Option<usize>;
}

/// Takes the first polygon of the working set.
///
/// The cheapest possible choice. Tree shape then depends on input order,
/// which is fine for small scenes and pre-shuffled input.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPolygon;

impl PlaneSelector for FirstPolygon {
    fn select(&self, polygons: &[Polygon]) -> Option<usize> {
        if polygons.is_empty() { None } else { Some(0) }
    }
}
