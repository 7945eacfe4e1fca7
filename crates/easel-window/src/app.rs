// File: crates/easel-window/src/app.rs
// Summary: View selection, canvas input routing and status text for the window driver.
// Notes:
// - Only the canvas view takes pointer input, but releases always reach the canvas so a
//   drag never outlives the button that started it.

use std::f64::consts::PI;

use anyhow::Result;
use easel_core::{
    Appearance, CanvasNotification, ChartControl, ChartOptions, ChartSeries, Color, DrawingCanvas, InputEvent,
    Modifiers, NotificationKind, Point, Theme,
};
use easel_render_skia::{render_canvas_rgba8, render_chart_rgba8, RenderOptions, RgbaFrame};
use tracing::{debug, info};

pub const WINDOW_TITLE: &str = "Easel";

const SAMPLE_VALUES: [f64; 10] = [4.0, 9.5, 7.25, 12.0, 10.5, 15.75, 13.0, 18.5, 16.0, 21.25];

const PALETTE: [Color; 4] = [
    Color::RED,
    Color::BLUE,
    Color::from_rgb(0, 160, 60),
    Color::from_argb(200, 230, 140, 0),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Chart,
    Canvas,
}

pub struct App {
    pub view: View,
    pub chart: ChartControl,
    pub canvas: DrawingCanvas,
    pub modifiers: Modifiers,
    pub cursor: Option<Point>,
    next_id: usize,
    status: String,
}

impl App {
    pub fn new(appearance: Appearance, title: impl Into<String>, view: View, dpi_scale: f64) -> Result<Self> {
        let series = ChartSeries::try_new(title, SAMPLE_VALUES.to_vec())?;
        let chart = ChartControl::new(series)
            .with_options(ChartOptions { dpi_scale, ..ChartOptions::with_appearance(appearance) });
        let mut canvas = DrawingCanvas::with_default_scene(dpi_scale).with_theme(Theme::for_appearance(appearance));
        // the default scene's own notifications are not interesting to the user
        canvas.drain_notifications();
        let next_id = canvas.object_count() + 1;
        Ok(Self {
            view,
            chart,
            canvas,
            modifiers: Modifiers::NONE,
            cursor: None,
            next_id,
            status: String::new(),
        })
    }

    pub fn title(&self) -> String {
        let view = match self.view {
            View::Chart => "chart",
            View::Canvas => "canvas",
        };
        if self.status.is_empty() {
            format!("{WINDOW_TITLE} [{view}]")
        } else {
            format!("{WINDOW_TITLE} [{view}] - {}", self.status)
        }
    }

    /// Flip between chart and canvas. Any drag in progress ends here.
    pub fn toggle_view(&mut self) {
        self.canvas.handle_event(&InputEvent::PointerLeave);
        self.view = match self.view {
            View::Chart => View::Canvas,
            View::Canvas => View::Chart,
        };
        debug!(view = ?self.view, "switched view");
    }

    /// Route pointer input to the canvas; returns true when a repaint is needed.
    pub fn pointer(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                let redraw = self.canvas.handle_event(&event);
                redraw && self.view == View::Canvas
            }
            _ if self.view == View::Canvas => self.canvas.handle_event(&event),
            _ => false,
        }
    }

    /// Add a rectangle under the cursor, or at `fallback` when the cursor is outside.
    pub fn add_rect(&mut self, fallback: Point) {
        let at = self.cursor.unwrap_or(fallback);
        let i = self.next_id;
        let color = PALETTE[i % PALETTE.len()];
        let angle = (i as f64 * PI / 7.0) % PI;
        self.canvas.add_rect(120.0, 80.0, at.x, at.y, angle, color, format!("Rect #{i}"));
        self.next_id += 1;
    }

    /// Move queued canvas notifications into the status text. Returns true if any arrived.
    pub fn collect_notifications(&mut self) -> bool {
        let notes = self.canvas.drain_notifications();
        let Some(last) = notes.last() else {
            return false;
        };
        for note in &notes {
            info!(kind = ?note.kind, label = %note.label, "canvas notification");
        }
        self.status = describe(last, self.canvas.object_count());
        true
    }

    pub fn render(&self, width: u32, height: u32) -> Result<RgbaFrame> {
        let opts = RenderOptions { width: width as i32, height: height as i32 };
        match self.view {
            View::Chart => render_chart_rgba8(&self.chart, &opts),
            View::Canvas => render_canvas_rgba8(&self.canvas, &opts),
        }
    }
}

fn describe(note: &CanvasNotification, count: usize) -> String {
    let verb = match note.kind {
        NotificationKind::Added => "added",
        NotificationKind::Removed => "removed",
    };
    format!("{verb} {} ({count} objects)", note.label)
}
