//! Polygon reconstruction from an unordered edge set.
//!
//! The splitter hands each half of a cut polygon back as loose edges, in no
//! particular order, with every shared vertex value recomputed per edge.
//! Reconstruction welds those values back into single vertices and walks the
//! resulting graph into a cycle.

use nalgebra::Point3;

use crate::error::GeometryError;
use crate::polygon::Polygon;
use crate::segment::Segment;
use crate::vertex::points_coincide;

/// Rebuilds a single closed polygon from an unordered edge multiset.
///
/// Endpoints within the weld tolerance of an already-seen vertex reuse that
/// vertex's index; each edge becomes an index pair. The walk starts at index
/// 0 and repeatedly takes the first unvisited edge (in insertion order)
/// incident to the current vertex, until it returns to index 0. Edges left
/// over outside that cycle are ignored; the splitter's closing edge can
/// duplicate one boundary edge, and the duplicate must not derail the walk.
///
/// Degenerate results (fewer than three welded vertices surviving the
/// polygon's edge culling) are reported as an error.
///
/// # Panics
/// Panics when the walk reaches a vertex with no unvisited incident edge
/// before closing the cycle. The edge set then does not describe a single
/// closed boundary, which means the upstream splitter produced inconsistent
/// output; there is nothing to recover.
pub fn polygon_from_edges(edges: &[Segment]) -> Result<Polygon, GeometryError> {
    if edges.is_empty() {
        return Err(GeometryError::TooFewVertices { got: 0 });
    }

    let mut table: Vec<Point3<f32>> = Vec::new();
    let mut links: Vec<(usize, usize)> = Vec::with_capacity(edges.len());
    for edge in edges {
        let i = intern(&mut table, edge.start());
        let j = intern(&mut table, edge.end());
        // A self-loop cannot advance the walk; both closing edges collapse
        // to one when the two crossing points weld together.
        if i != j {
            links.push((i, j));
        }
    }
    if table.len() < 3 {
        return Err(GeometryError::TooFewVertices { got: table.len() });
    }

    let mut visited = vec![false; links.len()];
    let mut cycle: Vec<Point3<f32>> = Vec::with_capacity(table.len());
    let mut current = 0usize;
    loop {
        cycle.push(table[current]);

        let step = links.iter().enumerate().find_map(|(k, &(i, j))| {
            if visited[k] {
                None
            } else if i == current {
                Some((k, j))
            } else if j == current {
                Some((k, i))
            } else {
                None
            }
        });
        let Some((k, next)) = step else {
            panic!("edge set is not a single closed cycle: dead end at vertex {current}");
        };
        visited[k] = true;
        current = next;
        if current == 0 {
            break;
        }
    }

    Polygon::new(cycle)
}

fn intern(table: &mut Vec<Point3<f32>>, p: Point3<f32>) -> usize {
    match table.iter().position(|q| points_coincide(*q, p)) {
        Some(i) => i,
        None => {
            table.push(p);
            table.len() - 1
        }
    }
}
