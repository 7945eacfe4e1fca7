// File: crates/easel-window/src/lib.rs
// Summary: Window driver state, kept apart from the event loop so it can be tested headless.

pub mod app;

pub use app::{App, View};
