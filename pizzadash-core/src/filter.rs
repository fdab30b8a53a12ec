//! Filter engine: turns a [`FilterSpec`] into a [`FilteredView`] of the dataset.
//!
//! Filtering is a pure function of the dataset and the spec. An inverted date
//! range or an empty category/size set yields an empty view, never an error.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Dataset, SalesRecord};

/// User-chosen inclusion constraints. Rebuilt on every interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// First included date (inclusive).
    pub start: NaiveDate,
    /// Last included date (inclusive).
    pub end: NaiveDate,
    pub categories: BTreeSet<String>,
    pub sizes: BTreeSet<String>,
}

impl FilterSpec {
    /// Everything selected: full date range, every category and size.
    pub fn select_all(options: &FilterOptions) -> Self {
        Self {
            start: options.min_date,
            end: options.max_date,
            categories: options.categories.iter().cloned().collect(),
            sizes: options.sizes.iter().cloned().collect(),
        }
    }

    /// True when the date range is inverted.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Whether a single record passes every constraint.
    pub fn matches(&self, record: &SalesRecord) -> bool {
        record.order_date >= self.start
            && record.order_date <= self.end
            && self.categories.contains(&record.pizza_category)
            && self.sizes.contains(&record.pizza_size)
    }
}

/// Values offered by the filter controls, derived from the full dataset.
///
/// These never shrink with the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct categories, sorted.
    pub categories: Vec<String>,
    /// Distinct sizes, sorted.
    pub sizes: Vec<String>,
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl FilterOptions {
    /// Derive the options from a dataset. `None` if the dataset is empty.
    pub fn from_dataset(dataset: &Dataset) -> Option<Self> {
        let (min_date, max_date) = dataset.date_bounds()?;
        let categories: BTreeSet<&str> = dataset
            .records()
            .iter()
            .map(|r| r.pizza_category.as_str())
            .collect();
        let sizes: BTreeSet<&str> = dataset
            .records()
            .iter()
            .map(|r| r.pizza_size.as_str())
            .collect();
        Some(Self {
            categories: categories.into_iter().map(String::from).collect(),
            sizes: sizes.into_iter().map(String::from).collect(),
            min_date,
            max_date,
        })
    }

    /// Clamp a date into the dataset's range.
    pub fn clamp_date(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min_date, self.max_date)
    }
}

/// The subset of a dataset matching a filter. Borrowed, never mutated.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a SalesRecord>,
}

impl<'a> FilteredView<'a> {
    /// A view over every record, unfiltered.
    pub fn all(dataset: &'a Dataset) -> Self {
        Self {
            records: dataset.records().iter().collect(),
        }
    }

    pub fn records(&self) -> &[&'a SalesRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a SalesRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> FromIterator<&'a SalesRecord> for FilteredView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a SalesRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Apply a filter to the dataset.
pub fn apply<'a>(dataset: &'a Dataset, spec: &FilterSpec) -> FilteredView<'a> {
    if spec.is_inverted() || spec.categories.is_empty() || spec.sizes.is_empty() {
        return FilteredView::default();
    }
    dataset.records().iter().filter(|r| spec.matches(r)).collect()
}
