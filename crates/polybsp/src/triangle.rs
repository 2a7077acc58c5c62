//! Fan triangulation for rendering.

use nalgebra::{Point3, Vector3};

use crate::polygon::Polygon;

/// A single triangle, as produced by [`fan_triangulate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3<f32>; 3],
}

impl Triangle {
    pub fn new(a: Point3<f32>, b: Point3<f32>, c: Point3<f32>) -> Self {
        Self { vertices: [a, b, c] }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>; 3] {
        &self.vertices
    }

    /// Unnormalized normal via the right-hand rule on the winding.
    pub fn normal(&self) -> Vector3<f32> {
        let [a, b, c] = &self.vertices;
        (b - a).cross(&(c - a))
    }

    pub fn area(&self) -> f32 {
        0.5 * self.normal().norm()
    }
}

/// Decomposes a convex polygon into a triangle fan anchored at vertex 0:
/// triangles (V0, Vi, Vi+1) for i in 1..N-1, exactly N-2 of them.
///
/// Correct for convex input only; the splitter only ever emits convex
/// pieces from convex input, and a non-convex polygon fans into overlapping
/// triangles here.
pub fn fan_triangulate(polygon: &Polygon) -> Vec<Triangle> {
    let vertices = polygon.vertices();
    (1..vertices.len() - 1)
        .map(|i| Triangle::new(vertices[0], vertices[i], vertices[i + 1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn regular_ngon(n: usize, radius: f32) -> Polygon {
        let vertices = (0..n)
            .map(|i| {
                let angle = i as f32 / n as f32 * std::f32::consts::TAU;
                Point3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
            })
            .collect();
        Polygon::new(vertices).unwrap()
    }

    #[test]
    fn triangle_fans_to_itself() {
        let triangle = regular_ngon(3, 1.0);
        let fan = fan_triangulate(&triangle);

        assert_eq!(fan.len(), 1);
        assert_eq!(fan[0].vertices()[0], triangle.vertices()[0]);
    }

    #[test]
    fn fan_count_is_n_minus_2() {
        for n in 3..=9 {
            let fan = fan_triangulate(&regular_ngon(n, 2.0));
            assert_eq!(fan.len(), n - 2);
        }
    }

    #[test]
    fn fan_covers_polygon_area() {
        let hexagon = regular_ngon(6, 1.5);
        let fan_area: f32 = fan_triangulate(&hexagon).iter().map(|t| t.area()).sum();

        assert_approx_eq!(fan_area, hexagon.area(), 1e-4);
    }

    #[test]
    fn fan_triangles_share_the_anchor() {
        let octagon = regular_ngon(8, 1.0);
        let anchor = octagon.vertices()[0];
        for triangle in fan_triangulate(&octagon) {
            assert_eq!(triangle.vertices()[0], anchor);
        }
    }

    #[test]
    fn triangle_area() {
        let t = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        );
        assert_approx_eq!(t.area(), 2.0, 1e-6);
        assert!(t.normal().z > 0.0);
    }
}
