//! Sales rows as returned by the `sales_history` query, and the criteria used
//! to narrow them.

use serde::{Deserialize, Serialize};

/// A single sales row. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesRecord {
    pub id: i64,
    pub year: i32,
    pub city_name: String,
    pub amount: f64,
}

/// Optional city/year criteria, applied conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SalesFilter {
    pub city_name: Option<String>,
    pub year: Option<i32>,
}

impl SalesFilter {
    /// Build a filter from loosely-typed inputs. An empty city name means
    /// "any city"; anything else is compared exactly.
    pub fn new(city_name: Option<&str>, year: Option<i32>) -> Self {
        Self {
            city_name: city_name.filter(|c| !c.is_empty()).map(str::to_string),
            year,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city_name.is_none() && self.year.is_none()
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        let city_ok = self
            .city_name
            .as_deref()
            .map_or(true, |city| record.city_name == city);
        let year_ok = self.year.map_or(true, |year| record.year == year);
        city_ok && year_ok
    }
}
