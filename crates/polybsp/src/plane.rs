//! Plane representation and epsilon-band point classification.

use nalgebra::{Point3, Vector3};

use crate::GeometryError;

/// Half-width of the band around a plane within which a point is treated as
/// lying on the plane rather than strictly to one side.
///
/// Vertices produced by earlier splits are recomputed from a division, so
/// classification cannot rely on exact zeros.
pub const PLANE_EPSILON: f32 = 1e-3;

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Positive side of the normal.
    Front,
    /// Negative side of the normal.
    Back,
    /// Within [`PLANE_EPSILON`] of the plane.
    OnPlane,
}

/// A plane in coefficient form: `normal · p = offset`, with a unit normal.
///
/// The coefficient form is what every hot path classifies against; deriving
/// it once per plane and reusing it keeps the classification of many points
/// against the same plane consistent and cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane3D {
    normal: Vector3<f32>,
    offset: f32,
}

impl Plane3D {
    /// Creates a plane from a normal vector and offset. The normal is
    /// normalized, scaling the offset to match.
    ///
    /// # Panics
    /// Panics if the normal has zero length.
    pub fn new(normal: Vector3<f32>, offset: f32) -> Self {
        let norm = normal.norm();
        assert!(norm > f32::EPSILON, "plane normal cannot be zero");
        Self {
            normal: normal / norm,
            offset: offset / norm,
        }
    }

    /// Creates a plane through `point` with the given normal direction.
    ///
    /// # Panics
    /// Panics if the normal has zero length.
    pub fn from_point_and_normal(point: Point3<f32>, normal: Vector3<f32>) -> Self {
        let norm = normal.norm();
        assert!(norm > f32::EPSILON, "plane normal cannot be zero");
        let unit = normal / norm;
        Self {
            normal: unit,
            offset: unit.dot(&point.coords),
        }
    }

    /// Creates a plane from three ordered points using Newell's method.
    ///
    /// Newell's method sums over all three edges instead of taking a single
    /// cross product, which keeps the normal usable for near-degenerate
    /// triples. Orientation follows the winding: counter-clockwise points
    /// seen from the front.
    pub fn from_three_points(
        a: Point3<f32>,
        b: Point3<f32>,
        c: Point3<f32>,
    ) -> Result<Self, GeometryError> {
        let points = [a, b, c];
        let mut n: Vector3<f32> = Vector3::zeros();
        let mut centroid: Vector3<f32> = Vector3::zeros();
        for i in 0..3 {
            let p = points[i];
            let q = points[(i + 1) % 3];
            n.x += (p.y - q.y) * (p.z + q.z);
            n.y += (p.z - q.z) * (p.x + q.x);
            n.z += (p.x - q.x) * (p.y + q.y);
            centroid += p.coords;
        }
        let len = n.norm();
        if len <= f32::EPSILON {
            return Err(GeometryError::DegenerateNormal);
        }
        let normal = n / len;
        let offset = normal.dot(&(centroid / 3.0));
        Ok(Self { normal, offset })
    }

    /// Unit normal of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }

    /// Signed distance from the origin along the normal.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Signed distance from a point to the plane. Positive means the front
    /// side (the side the normal points into).
    #[inline]
    pub fn signed_distance(&self, point: Point3<f32>) -> f32 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Classifies which side of the plane a point lies on, using the
    /// [`PLANE_EPSILON`] band.
    ///
    /// Repeated calls for the same point and plane always agree; the
    /// splitter correlates classifications across a whole polygon walk.
    #[inline]
    pub fn classify_point(&self, point: Point3<f32>) -> PlaneSide {
        self.classify_point_with_epsilon(point, PLANE_EPSILON)
    }

    /// Classifies a point with a caller-chosen epsilon band.
    pub fn classify_point_with_epsilon(&self, point: Point3<f32>, epsilon: f32) -> PlaneSide {
        let dist = self.signed_distance(point);
        if dist > epsilon {
            PlaneSide::Front
        } else if dist < -epsilon {
            PlaneSide::Back
        } else {
            PlaneSide::OnPlane
        }
    }

    /// The same plane with front and back swapped.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }

    /// Closest point on the plane to `point`.
    #[inline]
    pub fn project_point(&self, point: Point3<f32>) -> Point3<f32> {
        point - self.normal * self.signed_distance(point)
    }
}
