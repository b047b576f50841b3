//! Cost table view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::tui::app::App;

/// Render the cost table with a total row
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let report = &app.report;
    let block = Block::default()
        .title(format!(
            " Costs ({}, {}) ",
            report.cycle,
            report.currency().code()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Service").style(bold),
        Cell::from(Text::from("Cost").right_aligned()).style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let mut rows: Vec<Row> = report
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.service.clone()),
                Cell::from(Text::from(row.cost.clone()).right_aligned()),
            ])
        })
        .collect();

    rows.push(
        Row::new(vec![
            Cell::from("Total"),
            Cell::from(Text::from(report.total_text()).right_aligned()),
        ])
        .style(bold.fg(Color::Cyan)),
    );

    let widths = [Constraint::Min(16), Constraint::Length(20)];
    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}
