//! Keyboard input dispatch: global keys first, then the active panel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, DateBound, DateStep, FilterRow, Panel};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Dashboard; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::Filters; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 2. Panel-specific keys.
    match app.active_panel {
        Panel::Dashboard => handle_dashboard_key(app, key),
        Panel::Filters => handle_filter_key(app, key),
        Panel::Help => {}
    }
}

fn handle_dashboard_key(app: &mut AppState, key: KeyEvent) {
    if let KeyCode::Char('r') = key.code {
        app.reset_filters();
    }
}

fn handle_filter_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor_up(),
        KeyCode::Char('h') | KeyCode::Left => step_cursor_date(app, DateStep::Day, false),
        KeyCode::Char('l') | KeyCode::Right => step_cursor_date(app, DateStep::Day, true),
        KeyCode::Char('H') => step_cursor_date(app, DateStep::Month, false),
        KeyCode::Char('L') => step_cursor_date(app, DateStep::Month, true),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_cursor_item(),
        KeyCode::Char('a') => app.select_all_items(),
        KeyCode::Char('d') => app.clear_cursor_group(),
        KeyCode::Char('r') => app.reset_filters(),
        _ => {}
    }
}

fn step_cursor_date(app: &mut AppState, step: DateStep, forward: bool) {
    let bound = match app.cursor_row() {
        Some(FilterRow::Start) => DateBound::Start,
        Some(FilterRow::End) => DateBound::End,
        _ => return,
    };
    app.step_date(bound, step, forward);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_app;
    use chrono::NaiveDate;

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn number_keys_switch_panels() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_panel, Panel::Filters);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_panel, Panel::Help);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_panel, Panel::Dashboard);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_panel, Panel::Help);
    }

    #[test]
    fn q_quits() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = sample_app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.running);
    }

    #[test]
    fn date_keys_only_act_on_date_rows() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.spec.start, NaiveDate::from_ymd_opt(2015, 1, 2).unwrap());

        // Move onto a category row: h/l do nothing there.
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        let before = app.spec.clone();
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.spec, before);
    }

    #[test]
    fn space_toggles_and_r_resets() {
        let mut app = sample_app();
        press(&mut app, KeyCode::Char('2'));
        for _ in 0..2 {
            press(&mut app, KeyCode::Char('j'));
        }
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.spec.categories.len(), 2);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.spec.categories.len(), 3);
    }

    #[test]
    fn filter_keys_are_inert_on_dashboard() {
        let mut app = sample_app();
        let before = app.spec.clone();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.spec, before);
    }
}
