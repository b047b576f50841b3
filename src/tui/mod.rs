//! Terminal User Interface module
//!
//! Interactive cost dashboard built on ratatui. The input panel drives a
//! live report: cost table, distribution chart and monthly trend.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
