// File: crates/easel-window/src/main.rs
// Summary: Windowed driver that shows the chart or the drawing canvas via RGBA blit (CPU) using winit + softbuffer.
// Keys: Tab switches view, N adds a rectangle, Delete/Backspace removes the topmost, Escape quits.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use easel_core::{Appearance, Color, InputEvent, Modifiers, Point};
use easel_render_skia::RgbaFrame;
use easel_window::app::WINDOW_TITLE;
use easel_window::{App, View};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "easel-window")]
#[command(about = "Interactive window for the line chart and the drawing canvas", long_about = None)]
struct Args {
    /// Use the dark palette
    #[arg(long)]
    dark: bool,

    /// Chart title
    #[arg(long, default_value = "Samples")]
    title: String,

    /// Start on the canvas instead of the chart
    #[arg(long)]
    canvas: bool,
}

fn to_modifiers(state: winit::event::ModifiersState) -> Modifiers {
    Modifiers { alt: state.alt(), ctrl: state.ctrl(), shift: state.shift() }
}

/// Softbuffer wants 0RGB pixels.
fn blit(frame: &RgbaFrame, dst: &mut [u32]) {
    for (out, px) in dst.iter_mut().zip(frame.pixels.chunks_exact(4)) {
        *out = Color::from_rgb(px[0], px[1], px[2]).to_argb_u32() & 0x00FF_FFFF;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(winit::dpi::LogicalSize::new(
            easel_core::types::WIDTH as f64,
            easel_core::types::HEIGHT as f64,
        ))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let appearance = if args.dark { Appearance::Dark } else { Appearance::Light };
    let view = if args.canvas { View::Canvas } else { View::Chart };
    let mut app = App::new(appearance, args.title, view, window.scale_factor())?;
    window.set_title(&app.title());
    info!(scale = window.scale_factor(), "window ready");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                let mut redraw = false;
                match event {
                    WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                    WindowEvent::Resized(_) => redraw = true,
                    WindowEvent::ModifiersChanged(state) => app.modifiers = to_modifiers(state),
                    WindowEvent::CursorMoved { position, .. } => {
                        let p = Point::new(position.x, position.y);
                        app.cursor = Some(p);
                        redraw = app.pointer(InputEvent::PointerMove { position: p });
                    }
                    WindowEvent::CursorLeft { .. } => {
                        app.cursor = None;
                        redraw = app.pointer(InputEvent::PointerLeave);
                    }
                    WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                        if let Some(position) = app.cursor {
                            let event = match state {
                                ElementState::Pressed => InputEvent::PointerDown { position, modifiers: app.modifiers },
                                ElementState::Released => InputEvent::PointerUp { position },
                            };
                            redraw = app.pointer(event);
                        }
                    }
                    WindowEvent::KeyboardInput {
                        input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                        ..
                    } => match key {
                        VirtualKeyCode::Escape => *cf = ControlFlow::Exit,
                        VirtualKeyCode::Tab => {
                            app.toggle_view();
                            window.set_title(&app.title());
                            redraw = true;
                        }
                        VirtualKeyCode::N if app.view == View::Canvas => {
                            let size = window.inner_size();
                            app.add_rect(Point::new(size.width as f64 / 2.0, size.height as f64 / 2.0));
                        }
                        VirtualKeyCode::Delete | VirtualKeyCode::Back if app.view == View::Canvas => {
                            app.canvas.remove_top_rect();
                        }
                        _ => {}
                    },
                    _ => {}
                }
                if app.collect_notifications() {
                    window.set_title(&app.title());
                }
                if app.canvas.take_redraw_request() {
                    redraw = true;
                }
                if redraw {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    warn!("resize error: {e}");
                    return;
                }
                let frame = match app.render(size.width, size.height) {
                    Ok(frame) => frame,
                    Err(e) => {
                        warn!("render failed: {e:#}");
                        return;
                    }
                };
                match surface.buffer_mut() {
                    Ok(mut buffer) => {
                        blit(&frame, &mut buffer);
                        if let Err(e) = buffer.present() {
                            warn!("present error: {e}");
                        }
                    }
                    Err(e) => warn!("frame error: {e}"),
                }
            }
            _ => {}
        }
    })
}
