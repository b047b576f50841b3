//! Input panel
//!
//! Lists the usage inputs, the choice fields and the custom services.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::report::truncate;
use crate::models::MAX_CUSTOM_SERVICES;
use crate::tui::app::{App, Field, InputMode};

const LABEL_WIDTH: usize = 14;
const VALUE_WIDTH: usize = 22;

/// Render the input panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(5)])
        .split(area);

    render_fields(frame, app, chunks[0]);
    render_help(frame, app, chunks[1]);
}

fn render_fields(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.input_mode == InputMode::Editing {
        Color::Yellow
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(format!(
            " Inputs ({}/{} services) ",
            app.request.custom_services.len(),
            MAX_CUSTOM_SERVICES
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = app
        .fields()
        .into_iter()
        .map(|field| {
            let value_style = if field.is_toggle() {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::Green)
            };
            let value = match field {
                Field::Cycle | Field::Currency => format!("< {} >", app.field_value(field)),
                _ => app.field_value(field),
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                    Style::default().fg(Color::White),
                ),
                Span::styled(truncate(&value, VALUE_WIDTH), value_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.input_mode == InputMode::Editing {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        frame.render_widget(&app.input, rows[0]);

        let hint = if matches!(app.selected_field(), Field::Service(_)) {
            "NAME:FIXED:PER_USER  Enter:Apply  Esc:Cancel"
        } else {
            "Enter:Apply  Esc:Cancel"
        };
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            rows[1],
        );
        return;
    }

    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let text = vec![
        Line::from(vec![
            key("↑↓"),
            Span::raw(" Select  "),
            key("Enter"),
            Span::raw(" Edit  "),
            key("←→"),
            Span::raw(" Toggle"),
        ]),
        Line::from(vec![
            key("a"),
            Span::raw(" Add service  "),
            key("d"),
            Span::raw(" Delete  "),
            key("r"),
            Span::raw(" Rates"),
        ]),
        Line::from(vec![
            key("c"),
            Span::raw(" CSV  "),
            key("p"),
            Span::raw(" PDF  "),
            key("q"),
            Span::raw(" Quit"),
        ]),
    ];
    frame.render_widget(Paragraph::new(text), inner);
}
