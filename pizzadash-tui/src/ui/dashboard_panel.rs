//! Panel 1: KPI row and the six sales charts.
//!
//! Layout:
//! ```text
//! [ revenue ][ orders ][ pizzas ][ avg order ]
//! [ category share      ][ monthly trend     ]
//! [ sales by hour       ][ sales by weekday  ]
//! [ top pizzas (horizontal bars)             ]
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use pizzadash_core::format;
use pizzadash_core::{AggregateRow, DashboardReport};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let report = &app.report;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Min(6),
        ])
        .split(area);

    render_kpis(f, rows[0], report);

    if report.is_empty() {
        render_empty(f, rows[1]);
        return;
    }

    let middle = halves(rows[1]);
    render_category_share(f, middle[0], report);
    render_monthly(f, middle[1], report);

    let lower = halves(rows[2]);
    render_hourly(f, lower[0], report);
    render_weekday(f, lower[1], report);

    render_top_pizzas(f, rows[3], report);
}

fn halves(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn titled(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(Span::styled(format!(" {title} "), theme::accent()))
}

// ── KPIs ─────────────────────────────────────────────────────────────

fn render_kpis(f: &mut Frame, area: Rect, report: &DashboardReport) {
    let kpis = &report.kpis;
    let cards = [
        ("Total Revenue", format::money_whole(kpis.total_revenue)),
        ("Total Orders", format::count(kpis.total_orders as u64)),
        ("Pizzas Sold", format::count(kpis.total_pizzas_sold)),
        ("Avg Order Value", format::money(kpis.avg_order_value)),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, value), chunk) in cards.into_iter().zip(chunks.iter()) {
        let para = Paragraph::new(Line::from(Span::styled(value, theme::accent_bold())))
            .block(titled(label));
        f.render_widget(para, *chunk);
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No sales match the current filters.",
            theme::warning(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Open Filters (press 2) to widen the selection, or press r to reset.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

// ── Category share ───────────────────────────────────────────────────

fn render_category_share(f: &mut Frame, area: Rect, report: &DashboardReport) {
    let block = titled("Revenue by Category");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let revenue = report.kpis.total_revenue;
    let name_width = report
        .by_category
        .iter()
        .map(|r| r.key.chars().count())
        .max()
        .unwrap_or(0);
    // name, space, bar, space, "100.0%"
    let bar_width = (inner.width as usize).saturating_sub(name_width + 9);

    let lines: Vec<Line> = report
        .by_category
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let share = share_of(row.total, revenue);
            Line::from(vec![
                Span::styled(format!("{:<name_width$} ", row.key), theme::text()),
                Span::styled(
                    share_bar(share, bar_width),
                    Style::default().fg(theme::series(i)),
                ),
                Span::styled(format!(" {:>5.1}%", share * 100.0), theme::muted()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

/// Fraction of `total` in `part`, 0.0 when the total is zero.
pub fn share_of(part: Decimal, total: Decimal) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    (part / total).to_f64().unwrap_or(0.0).clamp(0.0, 1.0)
}

/// A solid bar `width * fraction` cells long.
pub fn share_bar(fraction: f64, width: usize) -> String {
    let cells = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    "█".repeat(cells.min(width))
}

// ── Monthly trend ────────────────────────────────────────────────────

fn render_monthly(f: &mut Frame, area: Rect, report: &DashboardReport) {
    let data: Vec<(f64, f64)> = report
        .by_month
        .iter()
        .enumerate()
        .map(|(i, row)| (i as f64, to_f64(row.total)))
        .collect();

    let y_max = data.iter().map(|(_, y)| *y).fold(0.0, f64::max) * 1.1;
    let x_max = data.len().saturating_sub(1) as f64;

    let first = report.by_month.first().map(|r| r.key.clone()).unwrap_or_default();
    let last = report.by_month.last().map(|r| r.key.clone()).unwrap_or_default();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::ACCENT))
        .graph_type(GraphType::Line)
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(titled("Monthly Revenue"))
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first, theme::muted()),
                    Span::styled(last, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, y_max.max(1.0)])
                .labels(vec![
                    Span::styled("0", theme::muted()),
                    Span::styled(compact(y_max as u64), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

// ── Bar charts ───────────────────────────────────────────────────────

fn render_hourly(f: &mut Frame, area: Rect, report: &DashboardReport) {
    let bars: Vec<Bar> = report
        .by_hour
        .iter()
        .map(|row| vertical_bar(format!("{:02}", row.key), row))
        .collect();
    let chart = BarChart::default()
        .block(titled("Sales by Hour"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(3)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT));
    f.render_widget(chart, area);
}

fn render_weekday(f: &mut Frame, area: Rect, report: &DashboardReport) {
    let bars: Vec<Bar> = report
        .by_weekday
        .iter()
        .map(|row| vertical_bar(row.key.chars().take(3).collect(), row))
        .collect();
    let chart = BarChart::default()
        .block(titled("Sales by Weekday"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::POSITIVE));
    f.render_widget(chart, area);
}

fn render_top_pizzas(f: &mut Frame, area: Rect, report: &DashboardReport) {
    // Borders take two columns; the chart needs a gap column and one for bars.
    let label_width = (area.width as usize).saturating_sub(4);
    let bars: Vec<Bar> = report
        .top_pizzas
        .iter()
        .map(|row| {
            Bar::default()
                .value(whole(row.total))
                .label(Line::from(fit_label(&row.key, label_width)))
                .text_value(format::money_whole(row.total))
        })
        .collect();
    let title = format!("Top {} Pizzas by Revenue", report.top_pizzas.len());
    let chart = BarChart::default()
        .block(titled(&title))
        .direction(Direction::Horizontal)
        .data(BarGroup::default().bars(&bars))
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(theme::WARNING))
        .value_style(theme::text());
    f.render_widget(chart, area);
}

fn vertical_bar<K>(label: String, row: &AggregateRow<K>) -> Bar<'static> {
    let value = whole(row.total);
    Bar::default()
        .value(value)
        .label(Line::from(label))
        .text_value(compact(value))
}

/// Cut `label` to at most `max` characters, marking the cut with `…`.
pub fn fit_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        return label.to_string();
    }
    match max {
        0 => String::new(),
        1 => "…".to_string(),
        _ => {
            let mut cut: String = label.chars().take(max - 1).collect();
            cut.push('…');
            cut
        }
    }
}

fn whole(value: Decimal) -> u64 {
    value.round().to_u64().unwrap_or(0)
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Short bar label: `950`, `12k`, `1.2M`.
pub fn compact(value: u64) -> String {
    match value {
        v if v >= 1_000_000 => format!("{:.1}M", v as f64 / 1_000_000.0),
        v if v >= 10_000 => format!("{}k", v / 1_000),
        v if v >= 1_000 => format!("{:.1}k", v as f64 / 1_000.0),
        v => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FilterRow;
    use chrono::{NaiveDate, NaiveTime};
    use pizzadash_core::{Dataset, OrderId, ReportOptions, SalesRecord, Session};
    use crate::test_helpers::sample_app;
    use crate::ui::tests::render_to_string;
    use rust_decimal_macros::dec;

    #[test]
    fn share_handles_zero_total() {
        assert_eq!(share_of(dec!(10), Decimal::ZERO), 0.0);
        assert!((share_of(dec!(25), dec!(100)) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn share_bar_widths() {
        assert_eq!(share_bar(0.0, 10), "");
        assert_eq!(share_bar(0.5, 10).chars().count(), 5);
        assert_eq!(share_bar(1.0, 10).chars().count(), 10);
        assert_eq!(share_bar(2.0, 10).chars().count(), 10);
    }

    #[test]
    fn compact_labels() {
        assert_eq!(compact(950), "950");
        assert_eq!(compact(1_234), "1.2k");
        assert_eq!(compact(68_512), "68k");
        assert_eq!(compact(817_860), "817k");
        assert_eq!(compact(1_250_000), "1.2M");
    }

    #[test]
    fn fit_label_truncates_with_ellipsis() {
        assert_eq!(fit_label("The Hawaiian Pizza", 40), "The Hawaiian Pizza");
        assert_eq!(fit_label("The Hawaiian Pizza", 8), "The Haw…");
        assert_eq!(fit_label("The Hawaiian Pizza", 1), "…");
        assert_eq!(fit_label("The Hawaiian Pizza", 0), "");
    }

    #[test]
    fn long_pizza_names_fit_narrow_terminals() {
        let record = |id: u64, name: &str| SalesRecord {
            order_id: OrderId(id),
            order_date: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap(),
            order_time: NaiveTime::from_hms_opt(12, 0, 0),
            pizza_name: name.into(),
            pizza_category: "Supreme".into(),
            pizza_size: "L".into(),
            quantity: 1,
            total_price: dec!(20.75),
        };
        let dataset = Dataset::new(vec![
            record(1, "The Spinach Pesto Chicken Sausage Pizza"),
            record(2, "The Italian Supreme With Extra Toppings Pizza"),
        ]);
        let session = Session::from_dataset(dataset, ReportOptions::default(), "test").unwrap();
        let app = AppState::new(session);
        for width in [20, 24, 32, 40, 60] {
            render_to_string(&app, width, 40);
        }
        let screen = render_to_string(&app, 40, 40);
        assert!(screen.contains("Top 2 Pizzas"));
    }

    #[test]
    fn renders_kpis_and_chart_titles() {
        let app = sample_app();
        let screen = render_to_string(&app, 140, 50);
        assert!(screen.contains("Total Revenue"));
        assert!(screen.contains("$48"));
        assert!(screen.contains("Avg Order Value"));
        assert!(screen.contains("$16.17"));
        assert!(screen.contains("Revenue by Category"));
        assert!(screen.contains("Monthly Revenue"));
        assert!(screen.contains("Sales by Hour"));
        assert!(screen.contains("Sales by Weekday"));
        assert!(screen.contains("Top 3 Pizzas by Revenue"));
    }

    #[test]
    fn empty_selection_shows_message() {
        let mut app = sample_app();
        app.filter_cursor = app
            .filter_rows()
            .iter()
            .position(|r| matches!(r, FilterRow::Category(_)))
            .unwrap();
        app.clear_cursor_group();
        let screen = render_to_string(&app, 140, 50);
        assert!(screen.contains("No sales match the current filters."));
        assert!(screen.contains("$0.00"));
        assert!(!screen.contains("Sales by Hour"));
    }
}
