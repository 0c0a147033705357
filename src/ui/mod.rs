//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It renders the
//! snapshot under the history cursor and a clickable move list for jumping
//! between positions.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
