//! Traversal callbacks.

use crate::polygon::Polygon;

/// Callback invoked once per visited node during tree traversal, with that
/// node's coincident polygons.
///
/// Implementations decouple what happens at each node (rendering,
/// collecting, counting) from the traversal order itself.
pub trait BspVisitor {
    fn visit(&mut self, polygons: &[Polygon]);
}

/// Visitor that accumulates every polygon it sees, in visit order.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<Polygon>,
}

impl CollectingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the visitor, returning the polygons in visit order.
    pub fn into_polygons(self) -> Vec<Polygon> {
        self.collected
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.collected
    }
}

impl BspVisitor for CollectingVisitor {
    fn visit(&mut self, polygons: &[Polygon]) {
        self.collected.extend_from_slice(polygons);
    }
}

/// Adapter turning a closure into a visitor.
pub struct FnVisitor<F: FnMut(&[Polygon])> {
    func: F,
}

impl<F: FnMut(&[Polygon])> FnVisitor<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F: FnMut(&[Polygon])> BspVisitor for FnVisitor<F> {
    fn visit(&mut self, polygons: &[Polygon]) {
        (self.func)(polygons);
    }
}
