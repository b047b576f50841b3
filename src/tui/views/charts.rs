//! Chart views
//!
//! Distribution of the converted costs as horizontal bars and the flat
//! monthly trend as a line.

use ratatui::{
    layout::{Direction, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::display::report::{format_amount, truncate};
use crate::reports::{ChartSeries, TrendPoint};
use crate::tui::app::App;

const BAR_LABEL_WIDTH: usize = 14;

/// Bars for the distribution chart, valued in tenths of a percent
pub fn distribution_bars(series: &ChartSeries) -> Vec<Bar<'static>> {
    series
        .labels
        .iter()
        .zip(series.shares())
        .map(|(label, share)| {
            let label = if label.is_empty() { "(unnamed)" } else { label.as_str() };
            Bar::default()
                .label(Line::from(truncate(label, BAR_LABEL_WIDTH)))
                .value((share.max(0.0) * 10.0).round() as u64)
                .text_value(format!("{:.1}%", share))
        })
        .collect()
}

/// Points and y-axis bounds for the trend chart
pub fn trend_points(trend: &[TrendPoint]) -> (Vec<(f64, f64)>, [f64; 2]) {
    let points: Vec<(f64, f64)> = trend
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.cost))
        .collect();

    let max = points.iter().map(|p| p.1).fold(0.0_f64, f64::max);
    let min = points.iter().map(|p| p.1).fold(0.0_f64, f64::min);
    let upper = if max > 0.0 { max * 1.2 } else { 1.0 };
    let lower = if min < 0.0 { min * 1.2 } else { 0.0 };

    (points, [lower, upper])
}

/// Render the distribution bar chart
pub fn render_distribution(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Cost Distribution ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let series = app.report.chart_series();
    if series.values.iter().all(|v| *v == 0.0) {
        let text = Paragraph::new("No costs to chart")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let bars = distribution_bars(&series);
    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::White));

    frame.render_widget(chart, area);
}

/// Render the monthly trend line chart
pub fn render_trend(frame: &mut Frame, app: &App, area: Rect) {
    let trend = app.report.monthly_trend();
    let (points, bounds) = trend_points(&trend);
    let symbol = app.report.symbol();

    let datasets = vec![Dataset::default()
        .name(format!("{} per month", app.report.currency().code()))
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&points)];

    let x_labels: Vec<Span> = trend
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 3 == 0 || *i == trend.len() - 1)
        .map(|(_, point)| Span::raw(point.month))
        .collect();

    let y_labels = vec![
        Span::raw(format!("{}{}", symbol, format_amount(bounds[0]))),
        Span::raw(format!("{}{}", symbol, format_amount(bounds[1]))),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Monthly Cost Trend ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, (trend.len().max(2) - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds(bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
