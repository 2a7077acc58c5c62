//! Vertex tolerances shared across the geometry pipeline.

use nalgebra::Point3;

/// Per-component tolerance under which two vertices count as the same point.
///
/// Split products re-derive vertices from a division, so the crossing point
/// computed for one edge never lands bit-exact on the one computed for its
/// neighbor. Welding during polygon reconstruction depends on this value:
/// tighter and legitimately coincident split points fail to merge, looser
/// and distinct nearby vertices collapse.
pub const VERTEX_WELD: f32 = 0.05;

/// Edges shorter than this are degenerate and must not survive into any
/// polygon.
pub const MIN_EDGE_LENGTH: f32 = 0.01;

/// Tolerance equality for vertices, checked per component.
#[inline]
pub fn points_coincide(a: Point3<f32>, b: Point3<f32>) -> bool {
    (a - b).amax() <= VERTEX_WELD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincide_within_tolerance() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.04, 1.96, 3.0);
        assert!(points_coincide(a, b));
    }

    #[test]
    fn distinct_on_a_single_component() {
        let a = Point3::new(1.0, 2.0, 3.0);
        let b = Point3::new(1.0, 2.0, 3.06);
        assert!(!points_coincide(a, b));
    }

    #[test]
    fn coincide_is_symmetric() {
        let a = Point3::new(-0.5, 0.0, 0.5);
        let b = Point3::new(-0.52, 0.01, 0.48);
        assert_eq!(points_coincide(a, b), points_coincide(b, a));
    }
}
