//! GraphQL documents and typed variables for the `sales_history` schema.
//!
//! Two operations are used:
//! - `SalesHistory`: rows for the 3D chart, filtered by an `_and` of
//!   `city_name._eq` / `year._eq`, ordered by `id desc`
//! - `CitySearch`: distinct city names, optionally narrowed by a
//!   case-insensitive `city_name._ilike "%term%"` match
//!
//! The variable structs serialize to exactly the JSON shapes the server
//! expects and deserialize back, so a backend can evaluate them.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::record::SalesFilter;

pub const SALES_HISTORY_QUERY: &str = include_str!("../graphql/sales_history.graphql");
pub const CITY_SEARCH_QUERY: &str = include_str!("../graphql/city_search.graphql");

/// Columns of `sales_history` usable in `order_by` and `distinct_on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesColumn {
    Id,
    Year,
    CityName,
    Amount,
}

impl SalesColumn {
    pub fn sql_name(self) -> &'static str {
        match self {
            SalesColumn::Id => "id",
            SalesColumn::Year => "year",
            SalesColumn::CityName => "city_name",
            SalesColumn::Amount => "amount",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// One `order_by` entry, e.g. `{ "id": "desc" }`.
pub type OrderBy = BTreeMap<SalesColumn, OrderDirection>;

/// Scalar comparison operators supported on a column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison<T> {
    #[serde(rename = "_eq", default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<T>,
    #[serde(rename = "_ilike", default, skip_serializing_if = "Option::is_none")]
    pub ilike: Option<String>,
}

/// Boolean expression over `sales_history` rows. An empty expression
/// serializes to `{}` and matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesBoolExp {
    #[serde(rename = "_and", default, skip_serializing_if = "Vec::is_empty")]
    pub and: Vec<SalesBoolExp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<Comparison<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Comparison<i32>>,
}

impl SalesBoolExp {
    /// `{ _and: [{ city_name: { _eq } }, { year: { _eq } }] }`, or `{}` when
    /// the filter is empty.
    pub fn from_filter(filter: &SalesFilter) -> Self {
        let mut conditions = Vec::new();
        if let Some(city) = &filter.city_name {
            conditions.push(SalesBoolExp {
                city_name: Some(Comparison {
                    eq: Some(city.clone()),
                    ilike: None,
                }),
                ..Default::default()
            });
        }
        if let Some(year) = filter.year {
            conditions.push(SalesBoolExp {
                year: Some(Comparison {
                    eq: Some(year),
                    ilike: None,
                }),
                ..Default::default()
            });
        }
        SalesBoolExp {
            and: conditions,
            ..Default::default()
        }
    }

    /// `{ city_name: { _ilike: "%term%" } }`, or `{}` for an empty term.
    pub fn city_contains(term: &str) -> Self {
        if term.is_empty() {
            return Self::default();
        }
        SalesBoolExp {
            city_name: Some(Comparison {
                eq: None,
                ilike: Some(format!("%{term}%")),
            }),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.and.is_empty() && self.city_name.is_none() && self.year.is_none()
    }
}

/// Variables for [`SALES_HISTORY_QUERY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesQueryVariables {
    #[serde(rename = "where", default)]
    pub where_: SalesBoolExp,
    #[serde(rename = "orderBy", default)]
    pub order_by: Vec<OrderBy>,
    #[serde(default)]
    pub distinct_on: Vec<SalesColumn>,
}

impl SalesQueryVariables {
    pub fn for_filter(filter: &SalesFilter) -> Self {
        Self {
            where_: SalesBoolExp::from_filter(filter),
            order_by: vec![BTreeMap::from([(SalesColumn::Id, OrderDirection::Desc)])],
            distinct_on: Vec::new(),
        }
    }
}

/// Variables for [`CITY_SEARCH_QUERY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitySearchVariables {
    #[serde(rename = "where", default)]
    pub where_: SalesBoolExp,
    #[serde(default)]
    pub distinct_on: Vec<SalesColumn>,
}

impl CitySearchVariables {
    pub fn for_term(term: &str) -> Self {
        Self {
            where_: SalesBoolExp::city_contains(term),
            distinct_on: vec![SalesColumn::CityName],
        }
    }
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` payload of both operations.
#[derive(Debug, Deserialize)]
pub struct SalesHistoryData<R> {
    pub sales_history: Vec<R>,
}

/// Row shape returned by `CitySearch`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CityRow {
    pub city_name: String,
}

/// Decode the `data.sales_history` rows of a raw response.
pub fn decode_rows<R: DeserializeOwned>(response: serde_json::Value) -> Result<Vec<R>, QueryError> {
    let parsed: GraphQlResponse<SalesHistoryData<R>> = serde_json::from_value(response)?;
    if !parsed.errors.is_empty() {
        return Err(QueryError::Server(
            parsed.errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    parsed
        .data
        .map(|data| data.sales_history)
        .ok_or(QueryError::MissingData)
}

/// Extract the operation name (`query Name(...)`) from a document.
pub fn operation_name(document: &str) -> Option<&str> {
    let rest = document.trim_start().strip_prefix("query")?;
    let name = rest
        .trim_start()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()?;
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sales_variables_without_filter_match_everything() {
        let vars = SalesQueryVariables::for_filter(&SalesFilter::default());
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({"where": {}, "orderBy": [{"id": "desc"}], "distinct_on": []})
        );
    }

    #[test]
    fn sales_variables_conjoin_city_and_year() {
        let vars = SalesQueryVariables::for_filter(&SalesFilter::new(Some("Boston"), Some(2021)));
        assert_eq!(
            serde_json::to_value(&vars.where_).unwrap(),
            json!({"_and": [{"city_name": {"_eq": "Boston"}}, {"year": {"_eq": 2021}}]})
        );
    }

    #[test]
    fn city_search_uses_ilike_and_distinct() {
        let vars = CitySearchVariables::for_term("bos");
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({"where": {"city_name": {"_ilike": "%bos%"}}, "distinct_on": ["city_name"]})
        );

        let unfiltered = CitySearchVariables::for_term("");
        assert!(unfiltered.where_.is_empty());
    }

    #[test]
    fn variables_parse_back_from_json() {
        let raw = json!({"where": {"_and": [{"year": {"_eq": 2020}}]}, "orderBy": [{"amount": "asc"}]});
        let vars: SalesQueryVariables = serde_json::from_value(raw).unwrap();
        assert_eq!(vars.where_.and[0].year.as_ref().unwrap().eq, Some(2020));
        assert_eq!(vars.order_by[0][&SalesColumn::Amount], OrderDirection::Asc);
        assert!(vars.distinct_on.is_empty());
    }

    #[test]
    fn decode_rows_reports_server_errors() {
        let response = json!({"errors": [{"message": "field not found"}]});
        let err = decode_rows::<CityRow>(response).unwrap_err();
        assert!(matches!(err, QueryError::Server(ref m) if m == &vec!["field not found".to_string()]));
    }

    #[test]
    fn decode_rows_reads_sales_records() {
        let response = json!({"data": {"sales_history": [
            {"id": 3, "year": 2021, "city_name": "NYC", "amount": 3.0}
        ]}});
        let rows = decode_rows::<crate::record::SalesRecord>(response).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].city_name, "NYC");
    }

    #[test]
    fn decode_rows_requires_data() {
        let err = decode_rows::<CityRow>(json!({})).unwrap_err();
        assert!(matches!(err, QueryError::MissingData));
    }

    #[test]
    fn operation_names_of_embedded_documents() {
        assert_eq!(operation_name(SALES_HISTORY_QUERY), Some("SalesHistory"));
        assert_eq!(operation_name(CITY_SEARCH_QUERY), Some("CitySearch"));
        assert_eq!(operation_name("{ sales_history { id } }"), None);
    }
}
