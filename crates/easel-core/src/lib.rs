// File: crates/easel-core/src/lib.rs
// Summary: Core library entry point; exports the chart control, drawing canvas and their building blocks.

pub mod affine;
pub mod axis;
pub mod canvas;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod scene;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use affine::Affine;
pub use axis::{nice_range, AxisRange};
pub use canvas::{DragMode, DragState, DrawingCanvas, InputEvent};
pub use chart::{ChartControl, ChartLayout, Gridline};
pub use color::Color;
pub use error::{ChartError, Result};
pub use geometry::{Point, Rect, Size, Vector};
pub use scene::{CanvasNotification, GraphicObject, NotificationKind, SceneGraph};
pub use series::ChartSeries;
pub use surface::{DrawCommand, DrawSurface, FontSpec, Pen, RecordingSurface};
pub use theme::{Appearance, Theme};
pub use types::{ChartOptions, InteractionConfig, ModifierKey, Modifiers};
