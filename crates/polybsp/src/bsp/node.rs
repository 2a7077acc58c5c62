//! BSP tree node.

use crate::plane::Plane3D;
use crate::polygon::Polygon;

/// A node in the BSP tree.
///
/// Owns the polygons lying exactly on its partition plane and, exclusively,
/// its two optional child subtrees. The builder never constructs a node
/// without at least one coincident polygon, and a node with no polygons and
/// no children does not exist.
#[derive(Debug, Clone)]
pub struct BspNode {
    plane: Plane3D,
    coincident: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a childless node from a partition plane and the polygons
    /// coincident with it.
    pub fn with_coincident(plane: Plane3D, coincident: Vec<Polygon>) -> Self {
        Self {
            plane,
            coincident,
            front: None,
            back: None,
        }
    }

    /// The partition plane.
    #[inline]
    pub fn plane(&self) -> &Plane3D {
        &self.plane
    }

    /// Polygons lying on the partition plane.
    #[inline]
    pub fn coincident(&self) -> &[Polygon] {
        &self.coincident
    }

    /// Subtree in front of the partition plane.
    #[inline]
    pub fn front(&self) -> Option<&BspNode> {
        self.front.as_deref()
    }

    /// Subtree behind the partition plane.
    #[inline]
    pub fn back(&self) -> Option<&BspNode> {
        self.back.as_deref()
    }

    pub(crate) fn set_front(&mut self, node: Option<BspNode>) {
        self.front = node.map(Box::new);
    }

    pub(crate) fn set_back(&mut self, node: Option<BspNode>) {
        self.back = node.map(Box::new);
    }

    /// True when the node has no child subtrees.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Total polygons in this subtree.
    pub fn polygon_count(&self) -> usize {
        let mut count = self.coincident.len();
        if let Some(ref front) = self.front {
            count += front.polygon_count();
        }
        if let Some(ref back) = self.back {
            count += back.polygon_count();
        }
        count
    }

    /// Depth of this subtree; a leaf counts 1.
    pub fn depth(&self) -> usize {
        let front = self.front.as_ref().map_or(0, |n| n.depth());
        let back = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front.max(back)
    }
}
