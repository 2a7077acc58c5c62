//! Scene generation, rendering helpers and the walk camera for the demo.

use std::hash::{Hash, Hasher};

use macroquad::models::{Mesh, Vertex, draw_mesh};
use macroquad::prelude::*;
use nalgebra::Point3;
use polybsp::{BspVisitor, Polygon, fan_triangulate};

/// A wall in map coordinates: a 2D segment on the ground plane.
pub struct WallSegment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

impl WallSegment {
    pub const fn new(from: (f32, f32), to: (f32, f32)) -> Self {
        Self { from, to }
    }

    /// Extrudes the segment into a vertical quad from `base` up to
    /// `base + height`. The quad is planar by construction.
    pub fn extrude(&self, base: f32, height: f32) -> Polygon {
        let (x0, z0) = self.from;
        let (x1, z1) = self.to;
        Polygon::new(vec![
            Point3::new(x0, base, z0),
            Point3::new(x1, base, z1),
            Point3::new(x1, base + height, z1),
            Point3::new(x0, base + height, z0),
        ])
        .expect("wall segment extrudes to a quad")
    }
}

/// The demo map: a handful of free-standing walls around a floor slab.
pub fn demo_scene() -> Vec<Polygon> {
    const WALL_HEIGHT: f32 = 3.0;
    let walls = [
        WallSegment::new((-8.0, -8.0), (8.0, -8.0)),
        WallSegment::new((8.0, -8.0), (8.0, 8.0)),
        WallSegment::new((8.0, 8.0), (-8.0, 8.0)),
        WallSegment::new((-8.0, 8.0), (-8.0, -8.0)),
        // Interior partitions that force the builder to split geometry.
        WallSegment::new((-8.0, 0.0), (2.0, 0.0)),
        WallSegment::new((0.0, -8.0), (0.0, -2.0)),
        WallSegment::new((3.0, 3.0), (6.0, 6.0)),
    ];

    let mut polygons: Vec<Polygon> = walls
        .iter()
        .map(|w| w.extrude(0.0, WALL_HEIGHT))
        .collect();

    polygons.push(
        Polygon::new(vec![
            Point3::new(-8.0, 0.0, -8.0),
            Point3::new(8.0, 0.0, -8.0),
            Point3::new(8.0, 0.0, 8.0),
            Point3::new(-8.0, 0.0, 8.0),
        ])
        .expect("floor slab is a quad"),
    );

    polygons
}

/// Deterministic color from a polygon's vertex bits, so pieces keep their
/// color across frames and rebuilds.
pub fn polygon_color(polygon: &Polygon) -> Color {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    for v in polygon.vertices() {
        v.x.to_bits().hash(&mut hasher);
        v.y.to_bits().hash(&mut hasher);
        v.z.to_bits().hash(&mut hasher);
    }
    let hash = hasher.finish();

    let r = (((hash >> 16) & 0xFF) as u8).max(40);
    let g = (((hash >> 8) & 0xFF) as u8).max(40);
    let b = ((hash & 0xFF) as u8).max(40);
    Color::from_rgba(r, g, b, 255)
}

/// Draws a filled polygon as a triangle-fan mesh.
pub fn draw_polygon(polygon: &Polygon) {
    let color = polygon_color(polygon);
    let fan = fan_triangulate(polygon);

    let mut mesh_vertices: Vec<Vertex> = Vec::with_capacity(fan.len() * 3);
    let mut indices: Vec<u16> = Vec::with_capacity(fan.len() * 3);
    for triangle in &fan {
        for p in triangle.vertices() {
            indices.push(mesh_vertices.len() as u16);
            mesh_vertices.push(Vertex::new2(vec3(p.x, p.y, p.z), vec2(0.0, 0.0), color));
        }
    }

    draw_mesh(&Mesh {
        vertices: mesh_vertices,
        indices,
        texture: None,
    });
}

/// Draws a polygon's outline.
pub fn draw_polygon_wireframe(polygon: &Polygon) {
    let color = polygon_color(polygon);
    let n = polygon.vertices().len();
    for i in 0..n {
        let a = polygon.vertices()[i];
        let b = polygon.vertices()[(i + 1) % n];
        draw_line_3d(vec3(a.x, a.y, a.z), vec3(b.x, b.y, b.z), color);
    }
}

/// Visitor that draws each visited polygon; with the back-to-front
/// traversal this is the painter's algorithm.
pub struct RenderVisitor {
    pub wireframe: bool,
}

impl BspVisitor for RenderVisitor {
    fn visit(&mut self, polygons: &[Polygon]) {
        for polygon in polygons {
            if self.wireframe {
                draw_polygon_wireframe(polygon);
            } else {
                draw_polygon(polygon);
            }
        }
    }
}

/// First-person walk camera: position on the ground plane plus a yaw.
pub struct WalkCamera {
    pub position: Vec3,
    pub yaw: f32,
    pub move_speed: f32,
    pub turn_speed: f32,
}

impl WalkCamera {
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self {
            position,
            yaw,
            move_speed: 5.0,
            turn_speed: 1.8,
        }
    }

    fn forward(&self) -> Vec3 {
        vec3(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    fn right(&self) -> Vec3 {
        vec3(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Applies one frame of input: W/S walk, A/D turn, comma/period strafe.
    pub fn update(&mut self, frame_time: f32) {
        if is_key_down(KeyCode::W) {
            self.position += self.forward() * self.move_speed * frame_time;
        }
        if is_key_down(KeyCode::S) {
            self.position -= self.forward() * self.move_speed * frame_time;
        }
        if is_key_down(KeyCode::A) {
            self.yaw += self.turn_speed * frame_time;
        }
        if is_key_down(KeyCode::D) {
            self.yaw -= self.turn_speed * frame_time;
        }
        if is_key_down(KeyCode::Comma) {
            self.position -= self.right() * self.move_speed * frame_time;
        }
        if is_key_down(KeyCode::Period) {
            self.position += self.right() * self.move_speed * frame_time;
        }
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position,
            up: vec3(0.0, 1.0, 0.0),
            target: self.position + self.forward(),
            ..Default::default()
        }
    }

    /// The eye point for BSP traversal.
    pub fn eye_point(&self) -> Point3<f32> {
        Point3::new(self.position.x, self.position.y, self.position.z)
    }
}
