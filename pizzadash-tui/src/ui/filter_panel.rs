//! Panel 2: date steppers and category/size checklists.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use pizzadash_core::format;

use crate::app::{AppState, FilterRow};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_controls(f, chunks[0], app);
    render_summary(f, chunks[1], app);
}

fn render_controls(f: &mut Frame, area: Rect, app: &AppState) {
    let options = app.options();
    let cursor = app.cursor_row();

    // (line, is_cursor) so the cursor row can be kept in view.
    let mut rows: Vec<(Line, bool)> = Vec::new();
    let heading = |title: &str| {
        let line = Line::from(Span::styled(title.to_string(), theme::accent_bold()));
        (line, false)
    };

    rows.push(heading("Date range"));
    rows.push(date_line(
        "Start",
        app.spec.start,
        cursor == Some(FilterRow::Start),
        app.spec.is_inverted(),
    ));
    rows.push(date_line(
        "End",
        app.spec.end,
        cursor == Some(FilterRow::End),
        app.spec.is_inverted(),
    ));
    rows.push((
        Line::from(Span::styled(
            format!("  bounds {} .. {}", options.min_date, options.max_date),
            theme::muted(),
        )),
        false,
    ));
    rows.push((Line::from(""), false));

    rows.push(heading("Categories"));
    for (i, name) in options.categories.iter().enumerate() {
        rows.push(check_line(
            name,
            app.spec.categories.contains(name),
            cursor == Some(FilterRow::Category(i)),
        ));
    }
    rows.push((Line::from(""), false));

    rows.push(heading("Sizes"));
    for (i, name) in options.sizes.iter().enumerate() {
        rows.push(check_line(
            name,
            app.spec.sizes.contains(name),
            cursor == Some(FilterRow::Size(i)),
        ));
    }

    let height = area.height as usize;
    let cursor_line = rows.iter().position(|(_, is_cursor)| *is_cursor).unwrap_or(0);
    let offset = (cursor_line + 1).saturating_sub(height);
    let lines: Vec<Line> = rows.into_iter().skip(offset).map(|(line, _)| line).collect();

    f.render_widget(Paragraph::new(lines), area);
}

fn date_line(
    label: &str,
    date: chrono::NaiveDate,
    selected: bool,
    inverted: bool,
) -> (Line<'static>, bool) {
    let value_style = if inverted { theme::warning() } else { theme::text() };
    let marker = if selected { "> " } else { "  " };
    let line = Line::from(vec![
        Span::styled(format!("{marker}{label:<6}"), row_style(selected)),
        Span::styled(format!("< {date} >"), value_style),
    ]);
    (line, selected)
}

fn check_line(name: &str, checked: bool, selected: bool) -> (Line<'static>, bool) {
    let marker = if selected { "> " } else { "  " };
    let check = if checked { "[x]" } else { "[ ]" };
    let check_style = if checked { theme::positive() } else { theme::muted() };
    let line = Line::from(vec![
        Span::styled(marker.to_string(), row_style(selected)),
        Span::styled(format!("{check} "), check_style),
        Span::styled(name.to_string(), row_style(selected)),
    ]);
    (line, selected)
}

fn row_style(selected: bool) -> Style {
    if selected {
        theme::cursor()
    } else {
        theme::text()
    }
}

fn render_summary(f: &mut Frame, area: Rect, app: &AppState) {
    let kpis = &app.report.kpis;
    let line = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), theme::muted()),
            Span::styled(value, theme::text()),
        ])
    };
    let lines = vec![
        line("Rows", format::count(app.report.record_count as u64)),
        line("Revenue", format::money_whole(kpis.total_revenue)),
        line("Orders", format::count(kpis.total_orders as u64)),
        line("Pizzas sold", format::count(kpis.total_pizzas_sold)),
        line("Avg order", format::money(kpis.avg_order_value)),
    ];
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(theme::muted())
        .title(Span::styled(" Selection ", theme::muted()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use crate::app::Panel;
    use crate::test_helpers::sample_app;
    use crate::ui::tests::render_to_string;

    #[test]
    fn shows_checklists_and_dates() {
        let mut app = sample_app();
        app.active_panel = Panel::Filters;
        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("< 2015-01-01 >"));
        assert!(screen.contains("< 2015-03-01 >"));
        assert!(screen.contains("[x] Classic"));
        assert!(screen.contains("[x] Veggie"));
        assert!(screen.contains("Sizes"));
    }

    #[test]
    fn unchecked_item_after_toggle() {
        let mut app = sample_app();
        app.active_panel = Panel::Filters;
        app.filter_cursor = 2;
        app.toggle_cursor_item();
        let screen = render_to_string(&app, 100, 30);
        assert!(screen.contains("[ ] Classic"));
    }

    #[test]
    fn cursor_row_stays_visible_in_short_area() {
        let mut app = sample_app();
        app.active_panel = Panel::Filters;
        app.filter_cursor = app.filter_rows().len() - 1;
        // Last size row in the sample is "S".
        let screen = render_to_string(&app, 100, 8);
        assert!(screen.contains("> [x] S"));
    }
}
