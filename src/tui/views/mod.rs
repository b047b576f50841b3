//! TUI Views module
//!
//! Contains the dashboard panels: inputs, cost table, charts and status bar.

pub mod breakdown;
pub mod charts;
pub mod inputs;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::DashboardLayout;

/// Render the entire dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let layout = DashboardLayout::new(frame.area());

    inputs::render(frame, app, layout.inputs);
    breakdown::render(frame, app, layout.table);
    charts::render_distribution(frame, app, layout.distribution);
    charts::render_trend(frame, app, layout.trend);
    status_bar::render(frame, app, layout.status_bar);
}
