//! End-to-end gesture tests over the public library API.

use sketchpad::canvas::{CanvasController, PointerEvent, Tool};
use sketchpad::config::Config;
use sketchpad::draw::{color, PrimitiveKind, Scene, Surface};
use sketchpad::geometry::{Bounds, Point};

fn controller_from_default_config() -> CanvasController {
    let config = Config::default();
    CanvasController::with_defaults(
        config.drawing.default_color.to_color(),
        config.drawing.default_thickness,
        config.drawing.ellipse_fill.to_color(),
    )
}

fn gesture(
    controller: &mut CanvasController,
    scene: &mut Scene,
    down: (i32, i32),
    up: (i32, i32),
) {
    controller.handle_pointer_event(scene, PointerEvent::Down(Point::new(down.0, down.1)));
    controller.handle_pointer_event(scene, PointerEvent::Up(Point::new(up.0, up.1)));
}

#[test]
fn one_gesture_per_tool_builds_the_expected_scene() {
    let mut scene = Scene::new();
    let mut controller = controller_from_default_config();

    controller.select_tool(Tool::Dot);
    gesture(&mut controller, &mut scene, (10, 10), (10, 10));

    controller.select_tool(Tool::Line);
    gesture(&mut controller, &mut scene, (0, 0), (30, 40));

    controller.select_tool(Tool::Rect);
    gesture(&mut controller, &mut scene, (50, 50), (20, 35));

    controller.select_tool(Tool::Ellipse);
    gesture(&mut controller, &mut scene, (100, 100), (130, 120));

    assert_eq!(scene.len(), 4);
    assert_eq!(controller.committed().len(), 4);

    // Scene retains commit order: dot, line, rect, ellipse bottom-to-top.
    let kinds: Vec<_> = scene.primitives().iter().map(|p| p.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PrimitiveKind::Oval,
            PrimitiveKind::Line,
            PrimitiveKind::Rect,
            PrimitiveKind::Oval,
        ]
    );

    let dot = &scene.primitives()[0];
    assert_eq!(dot.bounds, Bounds::new(Point::new(9, 9), Point::new(11, 11)));
    assert_eq!(dot.style.fill, Some(color::BLACK));

    let line = &scene.primitives()[1];
    assert_eq!(line.bounds, Bounds::new(Point::new(0, 0), Point::new(30, 40)));

    // Reverse drag is normalized for the rectangle.
    let rect = &scene.primitives()[2];
    assert_eq!(
        rect.bounds,
        Bounds::new(Point::new(20, 35), Point::new(50, 50))
    );

    // Ellipse is centered on its anchor.
    let ellipse = &scene.primitives()[3];
    assert_eq!(
        ellipse.bounds,
        Bounds::new(Point::new(70, 80), Point::new(130, 120))
    );
    assert_eq!(ellipse.style.fill, Some(color::LIGHT_GREEN));
}

#[test]
fn preview_updates_during_a_drag_then_commits_the_release_point() {
    let mut scene = Scene::new();
    let mut controller = controller_from_default_config();
    controller.select_tool(Tool::Line);

    controller.handle_pointer_event(&mut scene, PointerEvent::Down(Point::new(0, 0)));
    for step in 1..=5 {
        let at = Point::new(step * 10, step * 10);
        controller.handle_pointer_event(&mut scene, PointerEvent::Drag(at));
        assert_eq!(
            scene.primitives()[0].bounds,
            Bounds::new(Point::new(0, 0), at),
            "preview should track the pointer"
        );
    }
    controller.handle_pointer_event(&mut scene, PointerEvent::Up(Point::new(75, 20)));

    assert_eq!(
        scene.primitives()[0].bounds,
        Bounds::new(Point::new(0, 0), Point::new(75, 20))
    );
    // Still a single primitive: the preview mutates in place, no placeholder.
    assert_eq!(scene.len(), 1);
}

#[test]
fn clear_empties_scene_and_committed_collection() {
    let mut scene = Scene::new();
    let mut controller = controller_from_default_config();
    controller.select_tool(Tool::Rect);

    for i in 0..7 {
        gesture(&mut controller, &mut scene, (i, i), (i + 5, i + 5));
    }
    // One gesture still in flight when clear arrives.
    controller.handle_pointer_event(&mut scene, PointerEvent::Down(Point::new(90, 90)));
    assert_eq!(scene.len(), 8);

    controller.clear(&mut scene);

    assert!(scene.is_empty());
    assert!(controller.committed().is_empty());
    assert!(!controller.is_drawing());
}

#[test]
fn surface_trait_object_can_drive_any_backend() {
    // The controller only sees `dyn Surface`; make sure the public trait is
    // usable that way.
    let mut scene = Scene::new();
    let surface: &mut dyn Surface = &mut scene;

    let mut controller = controller_from_default_config();
    controller.select_tool(Tool::Ellipse);
    controller.on_pointer_down(surface, Point::new(50, 50));
    controller.on_pointer_drag(surface, Point::new(60, 60));

    assert_eq!(
        scene.primitives()[0].bounds,
        Bounds::new(Point::new(40, 40), Point::new(60, 60))
    );
}
