//! Session: loads the dataset once and recomputes reports on demand.
//!
//! The loaded [`Dataset`] and the derived [`FilterOptions`] are kept for the
//! lifetime of the session. Each call to [`Session::refresh`] runs the filter,
//! metrics and aggregation engines from scratch.

use std::path::Path;

use crate::data::{self, DataError};
use crate::domain::Dataset;
use crate::filter::{self, FilterOptions, FilterSpec};
use crate::report::{DashboardReport, ReportOptions};

#[derive(Debug)]
pub struct Session {
    dataset: Dataset,
    options: FilterOptions,
    report_options: ReportOptions,
}

impl Session {
    /// Load the CSV at `path` and start a session over it.
    pub fn open(path: &Path, report_options: ReportOptions) -> Result<Self, DataError> {
        let dataset = data::load(path)?;
        Self::from_dataset(dataset, report_options, &path.display().to_string())
    }

    /// Start a session over an already loaded dataset.
    pub fn from_dataset(
        dataset: Dataset,
        report_options: ReportOptions,
        source_name: &str,
    ) -> Result<Self, DataError> {
        let options = FilterOptions::from_dataset(&dataset).ok_or_else(|| DataError::Unavailable {
            source_name: source_name.to_string(),
            reason: "no data rows".into(),
        })?;
        Ok(Self {
            dataset,
            options,
            report_options,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Filter choices derived from the full dataset.
    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn report_options(&self) -> &ReportOptions {
        &self.report_options
    }

    /// The initial selection: everything.
    pub fn default_spec(&self) -> FilterSpec {
        FilterSpec::select_all(&self.options)
    }

    /// Recompute the full report for a filter state.
    pub fn refresh(&self, spec: &FilterSpec) -> DashboardReport {
        let view = filter::apply(&self.dataset, spec);
        tracing::debug!(
            start = %spec.start,
            end = %spec.end,
            categories = spec.categories.len(),
            sizes = spec.sizes.len(),
            rows = view.len(),
            "refreshing dashboard"
        );
        DashboardReport::compute(&view, &self.report_options)
    }
}
