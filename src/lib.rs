//! Turtle-Sketchpad Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState};
pub use core::{Direction, Pen, Segment, Sketch};
pub use shared::{RenderScene, SketchOptions};
