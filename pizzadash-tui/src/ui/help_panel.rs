//! Panel 3: keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-3", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "q / Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1: Dashboard");
    key(&mut lines, "r", "Reset filters to the full dataset");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2: Filters");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "h / l", "Move the date under the cursor by one day");
    key(&mut lines, "H / L", "Move the date under the cursor by one month");
    key(&mut lines, "Space / Enter", "Toggle category or size");
    key(&mut lines, "a", "Select every category and size");
    key(&mut lines, "d", "Clear the group under the cursor");
    key(&mut lines, "r", "Reset filters");
    lines.push(Line::from(""));

    section(&mut lines, "Dataset");
    let options = app.options();
    key(
        &mut lines,
        "Rows",
        &pizzadash_core::format::count(app.session.dataset().len() as u64),
    );
    key(
        &mut lines,
        "Dates",
        &format!("{} to {}", options.min_date, options.max_date),
    );
    let missing = app.session.dataset().missing_time_count();
    if missing > 0 {
        key(
            &mut lines,
            "Missing times",
            &format!("{missing} rows (excluded from the hourly chart)"),
        );
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
