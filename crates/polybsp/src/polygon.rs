//! Polygon representation.

use nalgebra::{Point3, Vector3};

use crate::error::GeometryError;
use crate::plane::Plane3D;
use crate::segment::Segment;
use crate::vertex::MIN_EDGE_LENGTH;

/// A convex planar polygon: an ordered, cyclic vertex list.
///
/// Edges are the consecutive vertex pairs, including the wrap-around edge
/// from the last vertex back to the first. Construction culls degenerate
/// edges, so consecutive vertices of a `Polygon` are always at least
/// [`MIN_EDGE_LENGTH`] apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3<f32>>,
}

impl Polygon {
    /// Builds a polygon from an ordered vertex list.
    ///
    /// Vertices closer than [`MIN_EDGE_LENGTH`] to their predecessor are
    /// dropped (including across the wrap-around edge). Fewer than three
    /// surviving vertices is degenerate input and is rejected.
    pub fn new(vertices: Vec<Point3<f32>>) -> Result<Self, GeometryError> {
        let mut culled: Vec<Point3<f32>> = Vec::with_capacity(vertices.len());
        for v in vertices {
            match culled.last() {
                Some(prev) if (v - *prev).norm() < MIN_EDGE_LENGTH => {}
                _ => culled.push(v),
            }
        }
        while culled.len() > 1 && (culled[0] - culled[culled.len() - 1]).norm() < MIN_EDGE_LENGTH {
            culled.pop();
        }

        if culled.len() < 3 {
            return Err(GeometryError::TooFewVertices { got: culled.len() });
        }
        Ok(Self { vertices: culled })
    }

    /// The vertices, in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// Number of vertices (always at least 3).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The cyclic edges, one per vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// The plane this polygon lies on, derived from its first three
    /// vertices. Errs when those vertices are collinear.
    pub fn plane(&self) -> Result<Plane3D, GeometryError> {
        Plane3D::from_three_points(self.vertices[0], self.vertices[1], self.vertices[2])
    }

    /// Center of mass of the vertices.
    pub fn centroid(&self) -> Point3<f32> {
        let sum: Vector3<f32> = self.vertices.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.vertices.len() as f32)
    }

    /// Total edge length.
    pub fn perimeter(&self) -> f32 {
        self.edges().map(|e| e.length()).sum()
    }

    /// Enclosed area.
    ///
    /// Half the norm of the summed vertex cross products; exact for planar
    /// polygons and independent of where the origin sits.
    pub fn area(&self) -> f32 {
        let n = self.vertices.len();
        let mut s = Vector3::zeros();
        for i in 0..n {
            let a = self.vertices[i].coords;
            let b = self.vertices[(i + 1) % n].coords;
            s += a.cross(&b);
        }
        0.5 * s.norm()
    }
}
