//! The edge-walk polygon splitter.

use log::warn;
use nalgebra::Point3;

use crate::plane::{Plane3D, PlaneSide};
use crate::polygon::Polygon;
use crate::segment::Segment;
use crate::vertex::points_coincide;
use crate::weld::polygon_from_edges;

/// Result of cutting a polygon with a plane.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    /// The polygon straddled the plane and was cut in two.
    Split {
        /// Piece on the positive side of the plane normal.
        front: Polygon,
        /// Piece on the negative side.
        back: Polygon,
    },
    /// The polygon lies wholly on one side of the plane (or on it).
    NotSplit(PlaneSide),
}

/// Cuts a polygon with a plane.
///
/// Walks every edge of the polygon, including the closing edge (vertex count
/// plus one iterations over a cyclic index), routing edges into a front and
/// a back bucket. The bucket in use starts from the first vertex's
/// classification, an on-plane first vertex seeding front, and flips at each
/// genuine crossing. A convex polygon crosses a plane at most twice, so at
/// most two crossing points are recorded; once two exist, remaining edges
/// pass through whole.
///
/// Two recorded crossings close both buckets with the crossing pair (in
/// opposite orders, keeping each boundary a consistent cycle), and each
/// bucket is rebuilt into a polygon. Zero or one crossing means the polygon
/// never genuinely crossed: it is reported whole, on the side where the
/// majority of its off-plane vertices lie (ties go front, matching the
/// seeding rule), or as [`PlaneSide::OnPlane`] when every vertex sits inside
/// the epsilon band.
///
/// A polygon merely touching the plane at one vertex or edge is not split.
pub fn split_polygon(polygon: &Polygon, plane: &Plane3D) -> SplitOutcome {
    let vertices = polygon.vertices();
    let n = vertices.len();

    let mut front_edges: Vec<Segment> = Vec::with_capacity(n + 2);
    let mut back_edges: Vec<Segment> = Vec::with_capacity(n + 2);
    let mut crossings: Vec<Point3<f32>> = Vec::with_capacity(2);

    let mut in_front = plane.classify_point(vertices[0]) != PlaneSide::Back;

    for i in 0..=n {
        let p0 = vertices[i % n];
        let p1 = vertices[(i + 1) % n];
        let edge = Segment::new(p0, p1);

        let crossing = if crossings.len() < 2 {
            edge.split_by_plane(plane)
                .map(|s| s.crossing)
                // The closing iteration revisits the first edge; its
                // crossing is already on record and must not count twice.
                .filter(|x| !crossings.iter().any(|c| points_coincide(*c, *x)))
        } else {
            None
        };

        match crossing {
            Some(x) => {
                let bucket = if in_front { &mut front_edges } else { &mut back_edges };
                bucket.push(Segment::new(p0, x));
                in_front = !in_front;
                let bucket = if in_front { &mut front_edges } else { &mut back_edges };
                bucket.push(Segment::new(x, p1));
                crossings.push(x);
            }
            None => {
                let bucket = if in_front { &mut front_edges } else { &mut back_edges };
                bucket.push(edge);
            }
        }
    }

    if crossings.len() == 2 {
        front_edges.push(Segment::new(crossings[0], crossings[1]));
        back_edges.push(Segment::new(crossings[1], crossings[0]));

        match (polygon_from_edges(&front_edges), polygon_from_edges(&back_edges)) {
            (Ok(front), Ok(back)) => return SplitOutcome::Split { front, back },
            (front, back) => {
                // One piece degenerated to a sliver; route the polygon whole
                // instead of dropping geometry.
                warn!(
                    "discarding degenerate split (front: {:?}, back: {:?})",
                    front.err(),
                    back.err()
                );
            }
        }
    }

    SplitOutcome::NotSplit(dominant_side(polygon, plane))
}

/// Side a non-crossing polygon belongs to: the majority classification of
/// its off-plane vertices, `OnPlane` when there are none.
fn dominant_side(polygon: &Polygon, plane: &Plane3D) -> PlaneSide {
    let mut front = 0usize;
    let mut back = 0usize;
    for v in polygon.vertices() {
        match plane.classify_point(*v) {
            PlaneSide::Front => front += 1,
            PlaneSide::Back => back += 1,
            PlaneSide::OnPlane => {}
        }
    }
    if front == 0 && back == 0 {
        PlaneSide::OnPlane
    } else if back > front {
        PlaneSide::Back
    } else {
        PlaneSide::Front
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use crate::plane::PLANE_EPSILON;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    fn contains_vertex(polygon: &Polygon, p: Point3<f32>) -> bool {
        polygon.vertices().iter().any(|v| points_coincide(*v, p))
    }

    #[test]
    fn square_split_by_x_plane() {
        // Plane x = 0, front toward +x.
        let plane = Plane3D::from_three_points(
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        assert!(plane.normal().x > 0.9);

        let SplitOutcome::Split { front, back } = split_polygon(&square(), &plane) else {
            panic!("square straddles x = 0 and must split");
        };

        assert_eq!(front.vertex_count(), 4);
        assert_eq!(back.vertex_count(), 4);

        assert!(contains_vertex(&front, Point3::new(1.0, -1.0, 0.0)));
        assert!(contains_vertex(&front, Point3::new(1.0, 1.0, 0.0)));
        assert!(contains_vertex(&front, Point3::new(0.0, -1.0, 0.0)));
        assert!(contains_vertex(&front, Point3::new(0.0, 1.0, 0.0)));

        assert!(contains_vertex(&back, Point3::new(-1.0, -1.0, 0.0)));
        assert!(contains_vertex(&back, Point3::new(-1.0, 1.0, 0.0)));
        assert!(contains_vertex(&back, Point3::new(0.0, -1.0, 0.0)));
        assert!(contains_vertex(&back, Point3::new(0.0, 1.0, 0.0)));

        // No piece leaks across the plane.
        for v in front.vertices() {
            assert!(plane.classify_point(*v) != PlaneSide::Back);
        }
        for v in back.vertices() {
            assert!(plane.classify_point(*v) != PlaneSide::Front);
        }
    }

    #[test]
    fn square_split_by_y_plane() {
        // The plane through (0,0,0), (0,0,1), (1,0,1) is y = 0; the square
        // straddles it the same way it straddles x = 0.
        let plane = Plane3D::from_three_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
        )
        .unwrap();

        let SplitOutcome::Split { front, back } = split_polygon(&square(), &plane) else {
            panic!("square straddles y = 0 and must split");
        };

        // Front is the +y side for this winding.
        assert!(contains_vertex(&front, Point3::new(1.0, 1.0, 0.0)));
        assert!(contains_vertex(&front, Point3::new(-1.0, 1.0, 0.0)));
        assert!(contains_vertex(&back, Point3::new(1.0, -1.0, 0.0)));
        assert!(contains_vertex(&back, Point3::new(-1.0, -1.0, 0.0)));
    }

    #[test]
    fn coplanar_square_is_reported_on_plane() {
        let plane = Plane3D::from_three_points(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        )
        .unwrap();

        assert_eq!(
            split_polygon(&square(), &plane),
            SplitOutcome::NotSplit(PlaneSide::OnPlane)
        );
    }

    #[test]
    fn wholly_front_polygon_is_not_split() {
        let plane = Plane3D::from_three_points(
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, -1.0),
            Point3::new(1.0, 1.0, -1.0),
        )
        .unwrap();
        assert!(plane.normal().z > 0.9);

        assert_eq!(
            split_polygon(&square(), &plane),
            SplitOutcome::NotSplit(PlaneSide::Front)
        );
    }

    #[test]
    fn vertex_touch_is_not_a_split() {
        // Triangle touching the plane x = 0 at a single vertex, body on the
        // front side.
        let triangle = Polygon::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        ])
        .unwrap();
        let plane = Plane3D::from_three_points(
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        )
        .unwrap();

        assert_eq!(
            split_polygon(&triangle, &plane),
            SplitOutcome::NotSplit(PlaneSide::Front)
        );
    }

    #[test]
    fn near_plane_vertex_routes_by_majority() {
        // One vertex sits inside the epsilon band, the rest are behind.
        let triangle = Polygon::new(vec![
            Point3::new(PLANE_EPSILON * 0.5, 0.0, 0.0),
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
        ])
        .unwrap();
        let plane = Plane3D::from_three_points(
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        )
        .unwrap();

        assert_eq!(
            split_polygon(&triangle, &plane),
            SplitOutcome::NotSplit(PlaneSide::Back)
        );
    }

    #[test]
    fn split_conserves_perimeter() {
        let plane = Plane3D::from_three_points(
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        let original = square();

        let SplitOutcome::Split { front, back } = split_polygon(&original, &plane) else {
            panic!("expected a split");
        };

        // Both pieces carry the shared cut edge once; subtracting it twice
        // leaves the original perimeter.
        let shared = 2.0; // the cut runs from (0,-1,0) to (0,1,0)
        assert_approx_eq!(
            front.perimeter() + back.perimeter() - 2.0 * shared,
            original.perimeter(),
            1e-3
        );
    }

    #[test]
    fn split_conserves_area() {
        let plane = Plane3D::from_three_points(
            Point3::new(0.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        let original = square();

        let SplitOutcome::Split { front, back } = split_polygon(&original, &plane) else {
            panic!("expected a split");
        };

        assert_approx_eq!(front.area() + back.area(), original.area(), 1e-3);
    }
}
