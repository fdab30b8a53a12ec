//! Application state, owned by the main thread.
//!
//! The session (loaded dataset) is owned here. Every filter change builds a
//! fresh `FilterSpec` and recomputes the report from scratch.

use chrono::{Duration, Months, NaiveDate};

use pizzadash_core::{DashboardReport, FilterOptions, FilterSpec, Session};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Dashboard,
    Filters,
    Help,
}

impl Panel {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            Panel::Dashboard => 0,
            Panel::Filters => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Dashboard),
            1 => Some(Panel::Filters),
            2 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Filters => "Filters",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % Self::COUNT).unwrap_or(Panel::Dashboard)
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + Self::COUNT - 1) % Self::COUNT)
            .unwrap_or(Panel::Dashboard)
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One selectable row in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRow {
    Start,
    End,
    Category(usize),
    Size(usize),
}

/// Which end of the date range a step applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

/// How far one date step moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStep {
    Day,
    Month,
}

/// Top-level application state.
pub struct AppState {
    pub active_panel: Panel,
    pub running: bool,

    pub session: Session,
    /// The filter currently applied.
    pub spec: FilterSpec,
    /// Report for `spec`, recomputed on every change.
    pub report: DashboardReport,

    /// Cursor into `filter_rows()`.
    pub filter_cursor: usize,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        let spec = session.default_spec();
        let report = session.refresh(&spec);
        let mut app = Self {
            active_panel: Panel::Dashboard,
            running: true,
            session,
            spec,
            report,
            filter_cursor: 0,
            status_message: None,
        };
        app.update_status();
        app
    }

    pub fn options(&self) -> &FilterOptions {
        self.session.filter_options()
    }

    /// All rows of the filter panel, in display order.
    pub fn filter_rows(&self) -> Vec<FilterRow> {
        let options = self.options();
        let mut rows = vec![FilterRow::Start, FilterRow::End];
        rows.extend((0..options.categories.len()).map(FilterRow::Category));
        rows.extend((0..options.sizes.len()).map(FilterRow::Size));
        rows
    }

    pub fn cursor_row(&self) -> Option<FilterRow> {
        self.filter_rows().get(self.filter_cursor).copied()
    }

    pub fn move_cursor_down(&mut self) {
        if self.filter_cursor + 1 < self.filter_rows().len() {
            self.filter_cursor += 1;
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.filter_cursor = self.filter_cursor.saturating_sub(1);
    }

    /// Move one end of the date range forward or back, clamped to the dataset.
    pub fn step_date(&mut self, bound: DateBound, step: DateStep, forward: bool) {
        let current = match bound {
            DateBound::Start => self.spec.start,
            DateBound::End => self.spec.end,
        };
        let moved = shift_date(current, step, forward).unwrap_or(current);
        let clamped = self.options().clamp_date(moved);
        let mut spec = self.spec.clone();
        match bound {
            DateBound::Start => spec.start = clamped,
            DateBound::End => spec.end = clamped,
        }
        self.apply(spec);
    }

    /// Toggle membership of the category or size under the cursor.
    pub fn toggle_cursor_item(&mut self) {
        let mut spec = self.spec.clone();
        match self.cursor_row() {
            Some(FilterRow::Category(i)) => {
                if let Some(name) = self.options().categories.get(i) {
                    toggle(&mut spec.categories, name);
                }
            }
            Some(FilterRow::Size(i)) => {
                if let Some(name) = self.options().sizes.get(i) {
                    toggle(&mut spec.sizes, name);
                }
            }
            _ => return,
        }
        self.apply(spec);
    }

    /// Select every category and size, keeping the date range.
    pub fn select_all_items(&mut self) {
        let all = FilterSpec::select_all(self.options());
        let spec = FilterSpec {
            start: self.spec.start,
            end: self.spec.end,
            categories: all.categories,
            sizes: all.sizes,
        };
        self.apply(spec);
    }

    /// Clear the group (categories or sizes) under the cursor.
    pub fn clear_cursor_group(&mut self) {
        let mut spec = self.spec.clone();
        match self.cursor_row() {
            Some(FilterRow::Category(_)) => spec.categories.clear(),
            Some(FilterRow::Size(_)) => spec.sizes.clear(),
            _ => return,
        }
        self.apply(spec);
    }

    /// Back to the initial selection.
    pub fn reset_filters(&mut self) {
        let spec = self.session.default_spec();
        self.apply(spec);
    }

    /// Replace the filter and recompute the report.
    pub fn apply(&mut self, spec: FilterSpec) {
        self.report = self.session.refresh(&spec);
        tracing::debug!(
            start = %spec.start,
            end = %spec.end,
            categories = spec.categories.len(),
            sizes = spec.sizes.len(),
            rows = self.report.record_count,
            "filters applied"
        );
        self.spec = spec;
        self.update_status();
    }

    fn update_status(&mut self) {
        if self.spec.is_inverted() {
            self.set_warning("Start date is after end date: no rows match");
        } else if self.spec.categories.is_empty() {
            self.set_warning("No categories selected");
        } else if self.spec.sizes.is_empty() {
            self.set_warning("No sizes selected");
        } else {
            let msg = format!(
                "{} of {} rows ({} to {})",
                self.report.record_count,
                self.session.dataset().len(),
                self.spec.start,
                self.spec.end
            );
            self.set_status(msg);
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

fn toggle(set: &mut std::collections::BTreeSet<String>, name: &str) {
    if !set.remove(name) {
        set.insert(name.to_string());
    }
}

fn shift_date(date: NaiveDate, step: DateStep, forward: bool) -> Option<NaiveDate> {
    match (step, forward) {
        (DateStep::Day, true) => date.checked_add_signed(Duration::days(1)),
        (DateStep::Day, false) => date.checked_sub_signed(Duration::days(1)),
        (DateStep::Month, true) => date.checked_add_months(Months::new(1)),
        (DateStep::Month, false) => date.checked_sub_months(Months::new(1)),
    }
}
