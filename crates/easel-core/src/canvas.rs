// File: crates/easel-core/src/canvas.rs
// Summary: Drawing canvas widget: scene + pointer state machine (idle / translate-drag / rotate-drag).
// Notes:
// - The host feeds every pointer event through `handle_event` and repaints when it
//   returns true; list changes made through `add_rect`/`remove_top_rect` are reported
//   by `take_redraw_request`.
// - The drag references the active object by index. Bring-to-front happens on
//   pointer-down; objects added mid-drag go after it, which leaves the index valid,
//   and removal is refused while dragging.

use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::color::Color;
use crate::geometry::Point;
use crate::scene::{CanvasNotification, GraphicObject, SceneGraph};
use crate::surface::{DrawSurface, FontSpec};
use crate::theme::Theme;
use crate::types::{InteractionConfig, Modifiers};

/// Pointer input delivered by the host event loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { position: Point, modifiers: Modifiers },
    PointerMove { position: Point },
    PointerUp { position: Point },
    PointerLeave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Translate,
    Rotate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub index: usize,
    pub last: Point,
    pub mode: DragMode,
}

pub struct DrawingCanvas {
    scene: SceneGraph,
    drag: Option<DragState>,
    redraw_requested: bool,
    pub config: InteractionConfig,
    pub theme: Theme,
    pub font: FontSpec,
}

impl Default for DrawingCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingCanvas {
    pub fn new() -> Self {
        Self {
            scene: SceneGraph::new(),
            drag: None,
            redraw_requested: false,
            config: InteractionConfig::default(),
            theme: Theme::light(),
            font: FontSpec::normal(),
        }
    }

    /// Canvas pre-populated with three overlapping rectangles; sizes and positions are
    /// multiplied by `dpi_scale`.
    pub fn with_default_scene(dpi_scale: f64) -> Self {
        let mut canvas = Self::new();
        let s = dpi_scale;
        canvas.font = FontSpec::normal().scaled(s as f32);
        canvas.add_rect(100.0 * s, 80.0 * s, 210.0 * s, 140.0 * s, 0.0, Color::RED, "Rect #1");
        canvas.add_rect(130.0 * s, 110.0 * s, 280.0 * s, 210.0 * s, PI / 3.0, Color::BLUE, "Rect #2");
        canvas.add_rect(
            110.0 * s,
            110.0 * s,
            300.0 * s,
            120.0 * s,
            -PI / 4.0,
            Color::from_argb(128, 255, 0, 255),
            "Rect #3",
        );
        canvas
    }

    pub fn with_config(mut self, config: InteractionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn objects(&self) -> &[GraphicObject] {
        self.scene.objects()
    }

    pub fn object_count(&self) -> usize {
        self.scene.len()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_state(&self) -> Option<DragState> {
        self.drag
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_rect(
        &mut self,
        width: f64,
        height: f64,
        center_x: f64,
        center_y: f64,
        angle: f64,
        color: Color,
        label: impl Into<String>,
    ) {
        self.scene.add(width, height, center_x, center_y, angle, color, label);
        self.redraw_requested = true;
    }

    /// Remove the topmost rectangle. Ignored while a drag is in progress.
    pub fn remove_top_rect(&mut self) {
        if self.drag.is_some() {
            debug!("remove ignored during drag");
            return;
        }
        if self.scene.remove_topmost().is_some() {
            self.redraw_requested = true;
        }
    }

    /// Notifications queued by add/remove since the last call.
    pub fn drain_notifications(&mut self) -> Vec<CanvasNotification> {
        self.scene.drain_notifications()
    }

    /// Whether add/remove changed the scene since the last call; clears the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Run one input event through the state machine; returns whether to repaint.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { position, modifiers } => self.pointer_down(position, modifiers),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                if let Some(d) = self.drag.take() {
                    debug!(index = d.index, mode = ?d.mode, "drag finished");
                }
                false
            }
        }
    }

    pub fn paint<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.theme.background);
        self.scene.paint(surface, self.font, self.theme.object_label);
    }

    fn pointer_down(&mut self, position: Point, modifiers: Modifiers) -> bool {
        let Some(hit) = self.scene.hit_test(position) else {
            return false;
        };
        let index = self.scene.bring_to_front(hit);
        let mode = if modifiers.holds(self.config.rotate_modifier) {
            DragMode::Rotate
        } else {
            DragMode::Translate
        };
        debug!(index, ?mode, "drag started");
        self.drag = Some(DragState { index, last: position, mode });
        true
    }

    fn pointer_move(&mut self, position: Point) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let Some(obj) = self.scene.get_mut(drag.index) else {
            self.drag = None;
            return false;
        };

        match drag.mode {
            DragMode::Rotate => {
                let angle = (position.y - drag.last.y) * self.config.radians_per_pixel;
                obj.transform.rotate(angle);
                trace!(angle, "rotate");
            }
            DragMode::Translate => {
                // Screen displacement expressed in the object's rotated frame.
                let Ok(inv) = obj.transform.inverse() else {
                    return false;
                };
                let local = inv.transform_distance(position - drag.last);
                obj.transform.translate(local.x, local.y);
                trace!(dx = local.x, dy = local.y, "translate");
            }
        }

        drag.last = position;
        true
    }
}
