// File: crates/easel-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, widget options).

use crate::theme::{Appearance, Theme};

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Minimum gap above and below the chart title, in device-independent pixels.
pub const TITLE_MIN_MARGIN: f64 = 10.0;
/// Gap between value labels and the plot area's left edge, in device-independent pixels.
pub const LABEL_MARGIN: f64 = 10.0;
/// Fraction of the control's width/height given to each side margin.
pub const MARGIN_FRACTION: f64 = 1.0 / 8.0;

/// Chart control options.
/// Contract: `dpi_scale > 0`.
#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    pub theme: Theme,
    /// Device pixels per device-independent pixel.
    pub dpi_scale: f64,
    /// Title and value labels; off for deterministic pixel snapshots.
    pub draw_labels: bool,
}

impl ChartOptions {
    pub fn with_appearance(appearance: Appearance) -> Self {
        Self { theme: Theme::for_appearance(appearance), ..Self::default() }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), dpi_scale: 1.0, draw_labels: true }
    }
}

/// Modifier keys held during a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { alt: false, ctrl: false, shift: false };
    pub const ALT: Modifiers = Modifiers { alt: true, ctrl: false, shift: false };

    pub fn holds(&self, key: ModifierKey) -> bool {
        match key {
            ModifierKey::Alt => self.alt,
            ModifierKey::Ctrl => self.ctrl,
            ModifierKey::Shift => self.shift,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifierKey {
    Alt,
    Ctrl,
    Shift,
}

/// Drawing canvas interaction options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
    /// Key that turns a drag into a rotation.
    pub rotate_modifier: ModifierKey,
    /// Rotation per pixel of vertical pointer travel.
    pub radians_per_pixel: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self { rotate_modifier: ModifierKey::Alt, radians_per_pixel: std::f64::consts::PI / 100.0 }
    }
}
