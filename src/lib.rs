// The binary in main.rs owns the terminal; everything it drives lives here so
// integration tests and benches can reach it.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod navigation;
pub mod schedule;
pub mod screen;
pub mod ui;
