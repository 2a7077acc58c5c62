//! BSP tree container, construction and traversal.

use log::{debug, warn};
use nalgebra::Point3;

use crate::plane::PlaneSide;
use crate::polygon::Polygon;
use crate::split::{SplitOutcome, split_polygon};

use super::node::BspNode;
use super::selector::{FirstPolygon, PlaneSelector};
use super::visitor::BspVisitor;

/// A Binary Space Partitioning tree over planar polygons.
///
/// Construction consumes a polygon set and recursively partitions it: a
/// [`PlaneSelector`] picks one polygon per node, that polygon's own plane
/// becomes the node's partition plane, and every remaining polygon is
/// routed whole to one side, onto the plane, or cut in two by the edge-walk
/// splitter. Splitting only ever subdivides, so the tree holds at least as
/// many polygons as went in and drops none.
///
/// A finished tree supports eye-relative traversal in both depth orders,
/// which is the contract a painter's-algorithm renderer builds on.
#[derive(Debug, Clone, Default)]
pub struct BspTree {
    root: Option<BspNode>,
}

impl BspTree {
    /// An empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree from a polygon set using the given partition-plane
    /// strategy. Empty input yields an empty tree.
    pub fn build<S: PlaneSelector>(polygons: Vec<Polygon>, selector: &S) -> Self {
        Self {
            root: build_node(polygons, selector),
        }
    }

    /// Builds a tree with the default [`FirstPolygon`] strategy.
    pub fn from_polygons(polygons: Vec<Polygon>) -> Self {
        Self::build(polygons, &FirstPolygon)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn root(&self) -> Option<&BspNode> {
        self.root.as_ref()
    }

    /// Total polygons stored across the tree.
    pub fn polygon_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.polygon_count())
    }

    /// Maximum node depth; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    /// Visits every node's coincident polygons, nearest-to-`eye` first.
    ///
    /// At each node the eye is classified against the partition plane and
    /// the nearer subtree is descended first. An eye inside the plane's
    /// epsilon band sees the node's own polygons edge-on; both subtrees are
    /// visited and the coincident list is skipped.
    pub fn traverse_front_to_back<V: BspVisitor>(&self, eye: Point3<f32>, visitor: &mut V) {
        if let Some(ref root) = self.root {
            front_to_back(root, eye, visitor);
        }
    }

    /// Visits every node's coincident polygons, farthest-from-`eye` first.
    ///
    /// The painter's-algorithm order: drawing in visit order paints near
    /// polygons over far ones. The same edge-on rule applies as in
    /// [`Self::traverse_front_to_back`].
    pub fn traverse_back_to_front<V: BspVisitor>(&self, eye: Point3<f32>, visitor: &mut V) {
        if let Some(ref root) = self.root {
            back_to_front(root, eye, visitor);
        }
    }

    /// All polygons in the tree, in no particular order.
    pub fn collect_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::with_capacity(self.polygon_count());
        collect(self.root.as_ref(), &mut result);
        result
    }
}

fn build_node<S: PlaneSelector>(mut polygons: Vec<Polygon>, selector: &S) -> Option<BspNode> {
    let splitter_idx = selector.select(&polygons)?;
    let splitter = polygons.swap_remove(splitter_idx);

    let plane = match splitter.plane() {
        Ok(plane) => plane,
        Err(err) => {
            // A partition polygon whose vertices define no plane cannot
            // route anything; it contributes no geometry.
            warn!("dropping partition polygon with no usable plane: {err}");
            return build_node(polygons, selector);
        }
    };

    let mut coincident = vec![splitter];
    let mut front_set: Vec<Polygon> = Vec::new();
    let mut back_set: Vec<Polygon> = Vec::new();

    for polygon in polygons {
        match split_polygon(&polygon, &plane) {
            SplitOutcome::Split { front, back } => {
                front_set.push(front);
                back_set.push(back);
            }
            SplitOutcome::NotSplit(PlaneSide::Front) => front_set.push(polygon),
            SplitOutcome::NotSplit(PlaneSide::Back) => back_set.push(polygon),
            SplitOutcome::NotSplit(PlaneSide::OnPlane) => coincident.push(polygon),
        }
    }

    debug!(
        "bsp node: {} coincident, {} front, {} back",
        coincident.len(),
        front_set.len(),
        back_set.len()
    );

    let mut node = BspNode::with_coincident(plane, coincident);
    node.set_front(build_node(front_set, selector));
    node.set_back(build_node(back_set, selector));
    Some(node)
}

fn front_to_back<V: BspVisitor>(node: &BspNode, eye: Point3<f32>, visitor: &mut V) {
    match node.plane().classify_point(eye) {
        PlaneSide::Front => {
            if let Some(front) = node.front() {
                front_to_back(front, eye, visitor);
            }
            visitor.visit(node.coincident());
            if let Some(back) = node.back() {
                front_to_back(back, eye, visitor);
            }
        }
        PlaneSide::Back => {
            if let Some(back) = node.back() {
                front_to_back(back, eye, visitor);
            }
            visitor.visit(node.coincident());
            if let Some(front) = node.front() {
                front_to_back(front, eye, visitor);
            }
        }
        PlaneSide::OnPlane => {
            if let Some(front) = node.front() {
                front_to_back(front, eye, visitor);
            }
            if let Some(back) = node.back() {
                front_to_back(back, eye, visitor);
            }
        }
    }
}

fn back_to_front<V: BspVisitor>(node: &BspNode, eye: Point3<f32>, visitor: &mut V) {
    match node.plane().classify_point(eye) {
        PlaneSide::Front => {
            if let Some(back) = node.back() {
                back_to_front(back, eye, visitor);
            }
            visitor.visit(node.coincident());
            if let Some(front) = node.front() {
                back_to_front(front, eye, visitor);
            }
        }
        PlaneSide::Back => {
            if let Some(front) = node.front() {
                back_to_front(front, eye, visitor);
            }
            visitor.visit(node.coincident());
            if let Some(back) = node.back() {
                back_to_front(back, eye, visitor);
            }
        }
        PlaneSide::OnPlane => {
            if let Some(front) = node.front() {
                back_to_front(front, eye, visitor);
            }
            if let Some(back) = node.back() {
                back_to_front(back, eye, visitor);
            }
        }
    }
}

fn collect(node: Option<&BspNode>, result: &mut Vec<Polygon>) {
    if let Some(n) = node {
        result.extend_from_slice(n.coincident());
        collect(n.front(), result);
        collect(n.back(), result);
    }
}
