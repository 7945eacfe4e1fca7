// File: crates/easel-core/tests/interaction.rs
// Purpose: Drive the canvas state machine through full drag and rotate cycles.

use std::f64::consts::PI;

use easel_core::{
    Color, DragMode, DrawingCanvas, InputEvent, InteractionConfig, ModifierKey, Modifiers, NotificationKind, Point,
};

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn down(x: f64, y: f64, modifiers: Modifiers) -> InputEvent {
    InputEvent::PointerDown { position: Point::new(x, y), modifiers }
}

fn mv(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove { position: Point::new(x, y) }
}

fn up(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerUp { position: Point::new(x, y) }
}

fn single_rect_canvas(angle: f64) -> DrawingCanvas {
    let mut canvas = DrawingCanvas::new();
    canvas.add_rect(100.0, 50.0, 200.0, 100.0, angle, Color::RED, "r");
    canvas.drain_notifications();
    canvas.take_redraw_request();
    canvas
}

#[test]
fn default_scene_has_three_rects() {
    let mut canvas = DrawingCanvas::with_default_scene(1.0);
    assert_eq!(canvas.object_count(), 3);
    let labels: Vec<String> = canvas.drain_notifications().into_iter().map(|n| n.label).collect();
    assert_eq!(labels, vec!["Rect #1", "Rect #2", "Rect #3"]);
    assert!(close(canvas.objects()[1].center(), Point::new(280.0, 210.0)));
}

#[test]
fn translate_drag_moves_center_by_pointer_delta() {
    let mut canvas = single_rect_canvas(PI / 6.0);

    assert!(canvas.handle_event(&down(200.0, 100.0, Modifiers::NONE)));
    assert_eq!(canvas.drag_state().map(|d| d.mode), Some(DragMode::Translate));
    assert!(canvas.handle_event(&mv(230.0, 140.0)));
    assert!(canvas.handle_event(&mv(250.0, 150.0)));
    assert!(!canvas.handle_event(&up(250.0, 150.0)));

    let obj = &canvas.objects()[0];
    assert!(close(obj.center(), Point::new(250.0, 150.0)), "center {:?}", obj.center());
    assert!((obj.transform.rotation_angle() - PI / 6.0).abs() < 1e-9);
    assert!(!canvas.is_dragging());
}

#[test]
fn rotate_drag_keeps_center() {
    let mut canvas = single_rect_canvas(PI / 6.0);

    // grab off-centre; rotation still pivots on the object's centre
    assert!(canvas.handle_event(&down(230.0, 110.0, Modifiers::ALT)));
    assert_eq!(canvas.drag_state().map(|d| d.mode), Some(DragMode::Rotate));
    // 50px down = half a turn of pi
    assert!(canvas.handle_event(&mv(290.0, 160.0)));
    canvas.handle_event(&up(290.0, 160.0));

    let obj = &canvas.objects()[0];
    assert!(close(obj.center(), Point::new(200.0, 100.0)));
    assert!((obj.transform.rotation_angle() - (PI / 6.0 + PI / 2.0)).abs() < 1e-9);
}

#[test]
fn custom_rotate_modifier() {
    let mut canvas = single_rect_canvas(0.0)
        .with_config(InteractionConfig { rotate_modifier: ModifierKey::Ctrl, ..InteractionConfig::default() });
    canvas.handle_event(&down(200.0, 100.0, Modifiers::ALT));
    assert_eq!(canvas.drag_state().map(|d| d.mode), Some(DragMode::Translate));
    canvas.handle_event(&InputEvent::PointerLeave);

    let ctrl = Modifiers { ctrl: true, ..Modifiers::NONE };
    canvas.handle_event(&down(200.0, 100.0, ctrl));
    assert_eq!(canvas.drag_state().map(|d| d.mode), Some(DragMode::Rotate));
}

#[test]
fn pointer_down_on_empty_space_does_nothing() {
    let mut canvas = single_rect_canvas(0.0);
    assert!(!canvas.handle_event(&down(10.0, 10.0, Modifiers::NONE)));
    assert!(!canvas.is_dragging());
    assert!(!canvas.handle_event(&mv(20.0, 20.0)));
}

#[test]
fn pointer_down_brings_hit_object_to_front() {
    let mut canvas = DrawingCanvas::new();
    canvas.add_rect(100.0, 100.0, 100.0, 100.0, 0.0, Color::RED, "back");
    canvas.add_rect(100.0, 100.0, 160.0, 160.0, 0.0, Color::BLUE, "front");

    // only "back" covers (70, 70)
    assert!(canvas.handle_event(&down(70.0, 70.0, Modifiers::NONE)));
    assert_eq!(canvas.objects()[1].label, "back");
    assert_eq!(canvas.drag_state().map(|d| d.index), Some(1));

    canvas.handle_event(&mv(80.0, 75.0));
    assert!(close(canvas.objects()[1].center(), Point::new(110.0, 105.0)));
    assert!(close(canvas.objects()[0].center(), Point::new(160.0, 160.0)));
}

#[test]
fn leave_ends_drag() {
    let mut canvas = single_rect_canvas(0.0);
    canvas.handle_event(&down(200.0, 100.0, Modifiers::NONE));
    assert!(canvas.is_dragging());
    assert!(!canvas.handle_event(&InputEvent::PointerLeave));
    assert!(!canvas.is_dragging());
    assert!(!canvas.handle_event(&mv(300.0, 300.0)));
    assert!(close(canvas.objects()[0].center(), Point::new(200.0, 100.0)));
}

#[test]
fn remove_during_drag_is_ignored() {
    let mut canvas = single_rect_canvas(0.0);
    canvas.handle_event(&down(200.0, 100.0, Modifiers::NONE));

    canvas.remove_top_rect();
    assert_eq!(canvas.object_count(), 1);
    assert!(canvas.drain_notifications().is_empty());
    assert!(!canvas.take_redraw_request());

    canvas.handle_event(&up(200.0, 100.0));
    canvas.remove_top_rect();
    assert_eq!(canvas.object_count(), 0);
    let notes = canvas.drain_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].kind, NotificationKind::Removed);
    assert_eq!(notes[0].label, "r");
    assert!(canvas.take_redraw_request());
}

#[test]
fn add_requests_redraw_once() {
    let mut canvas = DrawingCanvas::new();
    assert!(!canvas.take_redraw_request());
    canvas.add_rect(10.0, 10.0, 5.0, 5.0, 0.0, Color::BLUE, "x");
    assert_eq!(canvas.object_count(), 1);
    assert!(canvas.take_redraw_request());
    assert!(!canvas.take_redraw_request());
}

#[test]
fn add_during_drag_keeps_dragged_object() {
    let mut canvas = single_rect_canvas(0.0);
    canvas.handle_event(&down(200.0, 100.0, Modifiers::NONE));

    canvas.add_rect(40.0, 40.0, 500.0, 500.0, 0.0, Color::BLUE, "late");
    assert_eq!(canvas.drag_state().map(|d| d.index), Some(0));

    assert!(canvas.handle_event(&mv(220.0, 130.0)));
    assert!(close(canvas.objects()[0].center(), Point::new(220.0, 130.0)));
    assert!(close(canvas.objects()[1].center(), Point::new(500.0, 500.0)));
}
