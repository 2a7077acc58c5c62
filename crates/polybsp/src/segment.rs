//! Line segments and segment/plane intersection.

use nalgebra::Point3;

use crate::plane::{PLANE_EPSILON, Plane3D};
use crate::vertex::MIN_EDGE_LENGTH;

/// An ordered pair of points.
///
/// Direction does not matter for classification, but after a split the two
/// sub-segments are handed back with a definite front/back assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point3<f32>,
    end: Point3<f32>,
}

/// Result of cutting a segment with a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSplit {
    /// Sub-segment on the front side, running from its far endpoint to the
    /// crossing.
    pub front: Segment,
    /// Sub-segment on the back side, running from the crossing to its far
    /// endpoint.
    pub back: Segment,
    /// Where the segment pierces the plane.
    pub crossing: Point3<f32>,
}

impl Segment {
    pub fn new(start: Point3<f32>, end: Point3<f32>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> Point3<f32> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point3<f32> {
        self.end
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }

    /// Intersects the segment with a plane, producing the crossing point and
    /// the front/back sub-segments.
    ///
    /// A crossing exists only when the endpoint signed distances have
    /// strictly opposite sign beyond the [`PLANE_EPSILON`] band. An endpoint
    /// inside the band is never treated as a crossing; that would hand back
    /// a zero-length sub-segment. Sub-segments shorter than
    /// [`MIN_EDGE_LENGTH`] reject the split the same way.
    ///
    /// The crossing parameter is solved linearly from the plane
    /// coefficients, so the caller never re-derives the plane's point form.
    pub fn split_by_plane(&self, plane: &Plane3D) -> Option<SegmentSplit> {
        let dist_start = plane.signed_distance(self.start);
        let dist_end = plane.signed_distance(self.end);

        let crosses = (dist_start > PLANE_EPSILON && dist_end < -PLANE_EPSILON)
            || (dist_end > PLANE_EPSILON && dist_start < -PLANE_EPSILON);
        if !crosses {
            return None;
        }

        let direction = self.end - self.start;
        let t = (plane.offset() - plane.normal().dot(&self.start.coords))
            / plane.normal().dot(&direction);
        let crossing = self.start + direction * t;

        let (front_far, back_far) = if dist_start > PLANE_EPSILON {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };

        let front = Segment::new(front_far, crossing);
        let back = Segment::new(crossing, back_far);
        if front.length() < MIN_EDGE_LENGTH || back.length() < MIN_EDGE_LENGTH {
            return None;
        }

        Some(SegmentSplit { front, back, crossing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use nalgebra::Vector3;

    fn yz_plane() -> Plane3D {
        // x = 0, front toward +x.
        Plane3D::new(Vector3::new(1.0, 0.0, 0.0), 0.0)
    }

    #[test]
    fn genuine_crossing_is_split() {
        let segment = Segment::new(Point3::new(-1.0, 0.5, 0.0), Point3::new(1.0, 0.5, 0.0));
        let split = segment.split_by_plane(&yz_plane()).unwrap();

        assert_approx_eq!(split.crossing.x, 0.0, 1e-6);
        assert_approx_eq!(split.crossing.y, 0.5, 1e-6);

        // Front piece holds the +x endpoint, back piece the -x endpoint.
        assert_approx_eq!(split.front.start().x, 1.0, 1e-6);
        assert_approx_eq!(split.front.end().x, 0.0, 1e-6);
        assert_approx_eq!(split.back.start().x, 0.0, 1e-6);
        assert_approx_eq!(split.back.end().x, -1.0, 1e-6);
    }

    #[test]
    fn crossing_point_is_linear_in_t() {
        let segment = Segment::new(Point3::new(-1.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0));
        let split = segment.split_by_plane(&yz_plane()).unwrap();

        // x = 0 at t = 1/4 along the segment.
        assert_approx_eq!(split.crossing.y, 1.0, 1e-5);
        assert_approx_eq!(split.crossing.z, 0.0, 1e-6);
    }

    #[test]
    fn same_side_is_not_split() {
        let segment = Segment::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 0.0));
        assert!(segment.split_by_plane(&yz_plane()).is_none());
    }

    #[test]
    fn endpoint_in_epsilon_band_is_not_a_crossing() {
        let segment = Segment::new(
            Point3::new(PLANE_EPSILON * 0.5, 0.0, 0.0),
            Point3::new(-1.0, 0.0, 0.0),
        );
        assert!(segment.split_by_plane(&yz_plane()).is_none());
    }

    #[test]
    fn sliver_sub_segment_rejects_the_split() {
        // Start is strictly behind the plane, but so close that the back
        // piece would be shorter than the degenerate-edge floor.
        let segment = Segment::new(Point3::new(-0.005, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        assert!(segment.split_by_plane(&yz_plane()).is_none());
    }

    #[test]
    fn length() {
        let segment = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0));
        assert_approx_eq!(segment.length(), 5.0, 1e-6);
    }
}
