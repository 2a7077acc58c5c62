use log::info;
use macroquad::prelude::*;
use polybsp::BspTree;
use polybsp_view::{RenderVisitor, WalkCamera, demo_scene};

#[macroquad::main("polybsp")]
async fn main() {
    env_logger::init();

    let scene = demo_scene();
    let scene_size = scene.len();
    let tree = BspTree::from_polygons(scene);
    info!(
        "built tree from {} polygons: {} stored, depth {}",
        scene_size,
        tree.polygon_count(),
        tree.depth()
    );

    let mut camera = WalkCamera::new(vec3(0.0, 1.7, -5.0), 0.0);
    let mut wireframe = false;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Tab) {
            wireframe = !wireframe;
        }
        camera.update(get_frame_time());

        clear_background(Color::from_rgba(24, 24, 32, 255));
        set_camera(&camera.to_camera3d());

        // Painter's algorithm: far nodes first, near polygons overdraw them.
        let mut visitor = RenderVisitor { wireframe };
        tree.traverse_back_to_front(camera.eye_point(), &mut visitor);

        set_default_camera();
        draw_text(
            "W/S walk  A/D turn  ,/. strafe  Tab wireframe  Esc quit",
            20.0,
            30.0,
            24.0,
            WHITE,
        );
        draw_text(
            &format!("polygons: {}  depth: {}", tree.polygon_count(), tree.depth()),
            20.0,
            56.0,
            24.0,
            GRAY,
        );

        next_frame().await
    }
}
