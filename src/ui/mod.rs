//! User interface module.
//!
//! This module contains the eframe window:
//!
//! - app.rs: `EyesApp` (eframe::App), window options and the frame loop
//! - drawing.rs: eye, pupil and resize grip painting
//! - menu.rs: right-click context menu

pub mod app;
pub mod drawing;
pub mod menu;

pub use app::{run, EyesApp};
