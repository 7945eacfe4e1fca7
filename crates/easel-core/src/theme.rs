// File: crates/easel-core/src/theme.rs
// Summary: Light/Dark theming for chart and canvas colors.

use crate::color::Color;

/// Host appearance mode; picks between the two fixed palettes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub title: Color,
    pub axis_label: Color,
    pub line_stroke: Color,
    /// Label color drawn on top of canvas objects.
    pub object_label: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 30, 30, 30),
            grid: Color::GREY,
            title: Color::WHITE,
            axis_label: Color::WHITE,
            line_stroke: Color::CYAN,
            object_label: Color::WHITE,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            grid: Color::GREY,
            title: Color::BLACK,
            axis_label: Color::BLACK,
            line_stroke: Color::BLUE,
            object_label: Color::WHITE,
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
