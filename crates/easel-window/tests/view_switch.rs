// File: crates/easel-window/tests/view_switch.rs
// Purpose: Canvas drags end when the view changes or the button is released behind the chart view.

use easel_core::{Appearance, InputEvent, Modifiers, Point};
use easel_window::{App, View};

fn canvas_app() -> App {
    App::new(Appearance::Light, "t", View::Canvas, 1.0).unwrap()
}

fn press_on_first_rect(app: &mut App) {
    // only "Rect #1" covers this point in the default scene
    let down = InputEvent::PointerDown { position: Point::new(170.0, 110.0), modifiers: Modifiers::NONE };
    assert!(app.pointer(down));
    assert!(app.canvas.is_dragging());
}

fn center_of(app: &App, label: &str) -> Point {
    app.canvas.objects().iter().find(|o| o.label == label).unwrap().center()
}

#[test]
fn toggling_view_ends_drag() {
    let mut app = canvas_app();
    press_on_first_rect(&mut app);

    app.toggle_view();
    assert_eq!(app.view, View::Chart);
    assert!(!app.canvas.is_dragging());

    // button released while the chart is shown, then back to the canvas
    assert!(!app.pointer(InputEvent::PointerUp { position: Point::new(300.0, 300.0) }));
    app.toggle_view();
    assert!(!app.pointer(InputEvent::PointerMove { position: Point::new(300.0, 300.0) }));

    let c = center_of(&app, "Rect #1");
    assert!((c.x - 210.0).abs() < 1e-9 && (c.y - 140.0).abs() < 1e-9, "moved to {c:?}");

    app.canvas.remove_top_rect();
    assert_eq!(app.canvas.object_count(), 2);
}

#[test]
fn release_reaches_canvas_behind_chart_view() {
    let mut app = canvas_app();
    press_on_first_rect(&mut app);

    app.view = View::Chart;
    assert!(!app.pointer(InputEvent::PointerUp { position: Point::new(170.0, 110.0) }));
    assert!(!app.canvas.is_dragging());
}

#[test]
fn chart_view_ignores_presses_and_moves() {
    let mut app = App::new(Appearance::Dark, "t", View::Chart, 1.0).unwrap();
    let down = InputEvent::PointerDown { position: Point::new(170.0, 110.0), modifiers: Modifiers::NONE };
    assert!(!app.pointer(down));
    assert!(!app.canvas.is_dragging());
    assert!(!app.pointer(InputEvent::PointerMove { position: Point::new(180.0, 120.0) }));
}

#[test]
fn notifications_land_in_title() {
    let mut app = canvas_app();
    assert_eq!(app.title(), "Easel [canvas]");
    assert!(!app.collect_notifications());

    app.add_rect(Point::new(50.0, 50.0));
    assert!(app.collect_notifications());
    assert_eq!(app.title(), "Easel [canvas] - added Rect #4 (4 objects)");

    app.canvas.remove_top_rect();
    app.collect_notifications();
    assert_eq!(app.title(), "Easel [canvas] - removed Rect #4 (3 objects)");
}
