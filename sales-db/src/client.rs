//! [`QueryClient`] over the in-memory store.
//!
//! Dispatches on the document's operation name and answers with the same
//! envelope a GraphQL server would: rows under `data.sales_history`, or an
//! `errors` array for unknown operations and malformed variables.

use async_trait::async_trait;
use sales_core::client::QueryClient;
use sales_core::query::{operation_name, CityRow, CitySearchVariables, SalesQueryVariables};
use serde_json::{json, Value};

use crate::Database;

fn error_response(message: String) -> Value {
    log::warn!("[Sales] client: {message}");
    json!({ "errors": [{ "message": message }] })
}

#[async_trait(?Send)]
impl QueryClient for Database {
    async fn query(&self, document: &str, variables: Value) -> anyhow::Result<Value> {
        match operation_name(document) {
            Some("SalesHistory") => {
                let vars: SalesQueryVariables = match serde_json::from_value(variables) {
                    Ok(vars) => vars,
                    Err(e) => return Ok(error_response(format!("invalid variables: {e}"))),
                };
                let rows = self.query_sales(&vars)?;
                Ok(json!({ "data": { "sales_history": rows } }))
            }
            Some("CitySearch") => {
                let vars: CitySearchVariables = match serde_json::from_value(variables) {
                    Ok(vars) => vars,
                    Err(e) => return Ok(error_response(format!("invalid variables: {e}"))),
                };
                let rows: Vec<CityRow> = self
                    .search_cities(&vars)?
                    .into_iter()
                    .map(|city_name| CityRow { city_name })
                    .collect();
                Ok(json!({ "data": { "sales_history": rows } }))
            }
            other => Ok(error_response(format!("unknown operation {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::client::{fetch_cities, fetch_sales};
    use sales_core::record::SalesFilter;
    use sales_core::series::{transform, value_range, ValueRange};

    fn sample_db() -> Database {
        Database::from_csv(
            "id,year,city_name,amount\n1,2020,Boston,5\n2,2021,Boston,9\n3,2021,NYC,3\n",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn sales_round_trip_through_client() {
        let db = sample_db();
        let records = fetch_sales(&db, &SalesFilter::default()).await.unwrap();
        // newest id first from the server, so axes follow that order
        let series = transform(&records, &SalesFilter::default());
        assert_eq!(series.cities, vec!["NYC", "Boston"]);
        assert_eq!(series.years, vec![2021, 2020]);
        assert_eq!(
            value_range(&series.points),
            Some(ValueRange { min: 3.0, max: 9.0 })
        );
    }

    #[tokio::test]
    async fn city_search_through_client() {
        let db = sample_db();
        assert_eq!(fetch_cities(&db, "ny").await.unwrap(), vec!["NYC"]);
        assert_eq!(fetch_cities(&db, "").await.unwrap(), vec!["Boston", "NYC"]);
    }

    #[tokio::test]
    async fn unknown_operation_is_a_graphql_error() {
        let db = sample_db();
        let response = db.query("query Nope { x }", json!({})).await.unwrap();
        assert!(response["errors"][0]["message"]
            .as_str()
            .unwrap()
            .contains("Nope"));
    }

    #[tokio::test]
    async fn malformed_variables_are_a_graphql_error() {
        let db = sample_db();
        let response = db
            .query(
                sales_core::query::SALES_HISTORY_QUERY,
                json!({ "distinct_on": ["no_such_column"] }),
            )
            .await
            .unwrap();
        assert!(response.get("data").is_none());
        assert!(response["errors"].is_array());
    }
}
