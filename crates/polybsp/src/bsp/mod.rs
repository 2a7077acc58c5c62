//! Binary Space Partitioning tree over planar polygons.
//!
//! The tree recursively partitions space with planes taken from the input
//! polygons themselves. Each node keeps the polygons coincident with its
//! partition plane; everything in front or behind lives in the respective
//! child subtree. A finished tree supports eye-relative front-to-back and
//! back-to-front traversal, which is what a painter's-algorithm renderer
//! consumes.
//!
//! - [`BspTree`]: owning container, construction and traversal entry points
//! - [`BspNode`]: partition plane, coincident polygons, child subtrees
//! - [`PlaneSelector`]: strategy for choosing the partition polygon
//! - [`BspVisitor`]: traversal callback

mod node;
mod selector;
mod tree;
mod visitor;

pub use node::BspNode;
pub use selector::{FirstPolygon, PlaneSelector};
pub use tree::BspTree;
pub use visitor::{BspVisitor, CollectingVisitor, FnVisitor};
