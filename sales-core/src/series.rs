//! Pivot flat sales rows into a categorical 3D series.
//!
//! Cities and years become category axes in first-seen order (not sorted),
//! and every kept record becomes one point addressing those axes by index.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::record::{SalesFilter, SalesRecord};

/// One bar: indices into `ChartSeries::cities` / `ChartSeries::years`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub city_index: usize,
    pub year_index: usize,
    pub amount: f64,
}

/// Category axes plus one point per kept record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub cities: Vec<String>,
    pub years: Vec<i32>,
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn city(&self, index: usize) -> Option<&str> {
        self.cities.get(index).map(String::as_str)
    }

    pub fn year(&self, index: usize) -> Option<i32> {
        self.years.get(index).copied()
    }
}

/// Inclusive bounds of all amounts, used for color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

/// First-occurrence index assignment backed by a hash map.
struct AxisBuilder<K> {
    order: Vec<K>,
    positions: HashMap<K, usize>,
}

impl<K: Clone + Eq + Hash> AxisBuilder<K> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn index_of(&mut self, key: &K) -> usize {
        if let Some(&index) = self.positions.get(key) {
            return index;
        }
        let index = self.order.len();
        self.order.push(key.clone());
        self.positions.insert(key.clone(), index);
        index
    }
}

/// Filter `records` and pivot the survivors into a [`ChartSeries`].
///
/// An empty result is a well-formed empty series.
pub fn transform(records: &[SalesRecord], filter: &SalesFilter) -> ChartSeries {
    let mut cities = AxisBuilder::new();
    let mut years = AxisBuilder::new();

    let points = records
        .iter()
        .filter(|r| filter.matches(r))
        .map(|r| SeriesPoint {
            city_index: cities.index_of(&r.city_name),
            year_index: years.index_of(&r.year),
            amount: r.amount,
        })
        .collect::<Vec<_>>();

    log::debug!(
        "[Sales] series: {} of {} records kept, {} cities, {} years",
        points.len(),
        records.len(),
        cities.order.len(),
        years.order.len()
    );

    ChartSeries {
        cities: cities.order,
        years: years.order,
        points,
    }
}

/// Min/max over all point amounts. `None` means there is no data to map.
pub fn value_range(points: &[SeriesPoint]) -> Option<ValueRange> {
    let first = points.first()?.amount;
    Some(points.iter().skip(1).fold(
        ValueRange {
            min: first,
            max: first,
        },
        |range, p| ValueRange {
            min: range.min.min(p.amount),
            max: range.max.max(p.amount),
        },
    ))
}
