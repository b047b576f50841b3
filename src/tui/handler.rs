//! Event handler for the TUI
//!
//! Routes keyboard events to the dashboard actions based on the input mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, InputMode};
use super::event::Event;
use crate::export::ExportFormat;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),

        KeyCode::Enter => app.start_editing(),
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => app.toggle_next(),
        KeyCode::Left | KeyCode::Char('h') => app.toggle_prev(),

        KeyCode::Char('a') => app.add_service(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected_service(),

        KeyCode::Char('r') => app.refresh_rates(),
        KeyCode::Char('c') => app.export(ExportFormat::Csv),
        KeyCode::Char('p') => app.export(ExportFormat::Pdf),

        _ => {}
    }
    Ok(())
}

/// Handle keys while a field is being edited
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.cancel_editing();
            app.clear_status();
        }
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) => app.input.insert(c),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{BillingCycle, ExchangeRateTable};
    use crate::rates::{RateProvider, RateService, StaticRateProvider};
    use crate::tui::app::Field;
    use chrono::Duration;
    use std::path::PathBuf;

    fn app() -> App {
        let provider: Box<dyn RateProvider> =
            Box::new(StaticRateProvider::new(ExchangeRateTable::new()));
        App::new(
            &Settings::default(),
            PathBuf::from("unused"),
            RateService::new(provider, Duration::hours(1)),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::from(code))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 0);
        for _ in 0..20 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_field(), Field::Currency);
    }

    #[test]
    fn test_edit_field_with_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);

        for _ in 0..7 {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "500");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.request.usage.api_calls, 500);
    }

    #[test]
    fn test_q_is_text_while_editing() {
        let mut app = app();
        app.add_service();
        type_str(&mut app, "q");
        assert!(!app.should_quit);
        assert!(app.input.value().ends_with('q'));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_space_toggles_cycle() {
        let mut app = app();
        app.selected = 5;
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.request.cycle, BillingCycle::Yearly);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.request.cycle, BillingCycle::Monthly);
    }

    #[test]
    fn test_add_delete_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.request.custom_services.len(), 1);

        press(&mut app, KeyCode::Char('d'));
        assert!(app.request.custom_services.is_empty());
    }
}
