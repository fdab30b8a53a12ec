//! Top-level UI layout: one bordered panel plus a status bar.

pub mod dashboard_panel;
pub mod filter_panel;
pub mod help_panel;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};

use crate::app::{AppState, Panel};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    draw_panel(f, chunks[0], app);
    status_bar::render(f, chunks[1], app);
}

fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(theme::panel_title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Dashboard => dashboard_panel::render(f, inner, app),
        Panel::Filters => filter_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::test_helpers::sample_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Render the app into an in-memory terminal and return the screen text.
    pub(crate) fn render_to_string(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn title_tracks_active_panel() {
        let mut app = sample_app();
        assert!(render_to_string(&app, 120, 40).contains("Dashboard [1]"));
        app.active_panel = Panel::Filters;
        assert!(render_to_string(&app, 120, 40).contains("Filters [2]"));
        app.active_panel = Panel::Help;
        assert!(render_to_string(&app, 120, 40).contains("Help [3]"));
    }

    #[test]
    fn panel_border_is_accented() {
        let app = sample_app();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].fg, theme::ACCENT);
        assert_eq!(buffer[(0, 5)].fg, theme::ACCENT);
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = sample_app();
        for panel in [Panel::Dashboard, Panel::Filters, Panel::Help] {
            app.active_panel = panel;
            render_to_string(&app, 20, 6);
        }
    }
}
