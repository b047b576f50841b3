//! Status bar view
//!
//! First line: total, cycle, currency and rate. Second line: the status
//! message, or rate warnings when there is none.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let report = &app.report;

    let summary = Line::from(vec![
        Span::styled(" Total: ", Style::default().fg(Color::White)),
        Span::styled(
            report.total_text(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(report.cycle.to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" │ "),
        Span::styled(
            format!("{} ({})", report.currency(), report.symbol()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("Rate: {:.4}", report.conversion.rate),
            Style::default().fg(Color::White),
        ),
    ]);

    let detail = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        )),
        None => {
            let warnings = app.warnings();
            if warnings.is_empty() {
                Line::from(Span::styled(
                    " Rates OK",
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Line::from(Span::styled(
                    format!(" Warning: {}", warnings.join(" │ ")),
                    Style::default().fg(Color::Red),
                ))
            }
        }
    };

    frame.render_widget(Paragraph::new(vec![summary, detail]), area);
}
