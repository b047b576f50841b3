//! Reports module for the cost calculator
//!
//! Provides the cost report with its display table, distribution series and
//! monthly trend projection.

pub mod cost_report;

pub use cost_report::{
    to_chart_series, to_display_table, to_monthly_trend, ChartSeries, CostReport, DisplayRow,
    TrendPoint, REPORT_TITLE,
};
