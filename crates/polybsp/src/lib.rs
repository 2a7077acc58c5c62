//! BSP partitioning of planar 3D polygons for painter's-algorithm rendering.
//!
//! The crate builds a [`BspTree`] from a set of convex planar polygons and
//! exposes the geometric primitives the builder rests on: epsilon-band plane
//! classification, segment/plane intersection, the edge-walk polygon
//! splitter, reconstruction of a polygon from an unordered edge set, and fan
//! triangulation for rendering.
//!
//! # Example
//!
//! ```ignore
//! use polybsp::{BspTree, CollectingVisitor, Polygon};
//! use nalgebra::Point3;
//!
//! let polygons: Vec<Polygon> = /* scene geometry */;
//! let tree = BspTree::from_polygons(polygons);
//!
//! // Painter's algorithm: draw far polygons first.
//! let eye = Point3::new(0.0, 1.7, 8.0);
//! let mut visitor = CollectingVisitor::new();
//! tree.traverse_back_to_front(eye, &mut visitor);
//! let draw_order = visitor.into_polygons();
//! ```

mod bsp;
mod error;
mod plane;
mod polygon;
mod segment;
mod split;
mod triangle;
mod vertex;
mod weld;

pub use bsp::{
    BspNode, BspTree, BspVisitor, CollectingVisitor, FirstPolygon, FnVisitor, PlaneSelector,
};
pub use error::GeometryError;
pub use plane::{PLANE_EPSILON, Plane3D, PlaneSide};
pub use polygon::Polygon;
pub use segment::{Segment, SegmentSplit};
pub use split::{SplitOutcome, split_polygon};
pub use triangle::{Triangle, fan_triangulate};
pub use vertex::{MIN_EDGE_LENGTH, VERTEX_WELD, points_coincide};
pub use weld::polygon_from_edges;
