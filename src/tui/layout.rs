//! Layout definitions for the TUI
//!
//! Inputs on the left; cost table above the two charts on the right; status
//! bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    /// Input panel
    pub inputs: Rect,
    /// Cost table
    pub table: Rect,
    /// Distribution bar chart
    pub distribution: Rect,
    /// Monthly trend line chart
    pub trend: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),   // Main area
                Constraint::Length(2), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(42), // Inputs
                Constraint::Min(40),    // Results
            ])
            .split(vertical[0]);

        let results = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(horizontal[1]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(results[1]);

        Self {
            inputs: horizontal[0],
            table: results[0],
            distribution: charts[0],
            trend: charts[1],
            status_bar: vertical[1],
        }
    }
}
