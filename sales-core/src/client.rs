//! The query client seam and typed fetch helpers built on top of it.
//!
//! Transport is not implemented here: whatever executes GraphQL documents
//! (an HTTP client, or the in-memory store in `sales-db`) implements
//! [`QueryClient`]. Everything runs on a single thread, so the trait is
//! `?Send`.

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::query::{
    decode_rows, CityRow, CitySearchVariables, SalesQueryVariables, CITY_SEARCH_QUERY,
    SALES_HISTORY_QUERY,
};
use crate::record::{SalesFilter, SalesRecord};

/// Executes a GraphQL document with JSON variables and returns the raw
/// response envelope (`{ "data": ..., "errors": [...] }`).
#[async_trait(?Send)]
pub trait QueryClient {
    async fn query(&self, document: &str, variables: Value) -> anyhow::Result<Value>;
}

#[async_trait(?Send)]
impl<C: QueryClient + ?Sized> QueryClient for Rc<C> {
    async fn query(&self, document: &str, variables: Value) -> anyhow::Result<Value> {
        (**self).query(document, variables).await
    }
}

/// Fetch sales rows matching `filter`, newest id first.
pub async fn fetch_sales<C>(client: &C, filter: &SalesFilter) -> anyhow::Result<Vec<SalesRecord>>
where
    C: QueryClient + ?Sized,
{
    let variables = serde_json::to_value(SalesQueryVariables::for_filter(filter))?;
    let response = client.query(SALES_HISTORY_QUERY, variables).await?;
    let rows: Vec<SalesRecord> = decode_rows(response)?;
    log::info!("[Sales] client: fetch_sales returned {} records", rows.len());
    Ok(rows)
}

/// Fetch distinct city names containing `term` (case-insensitive). An empty
/// term lists every city.
pub async fn fetch_cities<C>(client: &C, term: &str) -> anyhow::Result<Vec<String>>
where
    C: QueryClient + ?Sized,
{
    let variables = serde_json::to_value(CitySearchVariables::for_term(term))?;
    let response = client.query(CITY_SEARCH_QUERY, variables).await?;
    let rows: Vec<CityRow> = decode_rows(response)?;
    log::info!(
        "[Sales] client: fetch_cities({term:?}) returned {} cities",
        rows.len()
    );
    Ok(rows.into_iter().map(|row| row.city_name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;

    /// Records every call and replies with a canned response.
    struct RecordingClient {
        calls: RefCell<Vec<(String, Value)>>,
        reply: Value,
    }

    impl RecordingClient {
        fn replying(reply: Value) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    #[async_trait(?Send)]
    impl QueryClient for RecordingClient {
        async fn query(&self, document: &str, variables: Value) -> anyhow::Result<Value> {
            self.calls
                .borrow_mut()
                .push((document.to_string(), variables));
            Ok(self.reply.clone())
        }
    }

    struct FailingClient;

    #[async_trait(?Send)]
    impl QueryClient for FailingClient {
        async fn query(&self, _document: &str, _variables: Value) -> anyhow::Result<Value> {
            anyhow::bail!("connection refused")
        }
    }

    #[tokio::test]
    async fn fetch_sales_sends_filter_variables() {
        let client = RecordingClient::replying(json!({
            "data": {"sales_history": [
                {"id": 2, "year": 2021, "city_name": "Boston", "amount": 9.0}
            ]}
        }));
        let rows = fetch_sales(&client, &SalesFilter::new(Some("Boston"), Some(2021)))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 9.0);

        let calls = client.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SALES_HISTORY_QUERY);
        assert_eq!(calls[0].1["where"]["_and"][0]["city_name"]["_eq"], "Boston");
        assert_eq!(calls[0].1["orderBy"], json!([{"id": "desc"}]));
    }

    #[tokio::test]
    async fn fetch_cities_maps_rows_to_names() {
        let client = RecordingClient::replying(json!({
            "data": {"sales_history": [{"city_name": "Boston"}, {"city_name": "Bossier City"}]}
        }));
        let cities = fetch_cities(&client, "bos").await.unwrap();
        assert_eq!(cities, vec!["Boston", "Bossier City"]);
        let calls = client.calls.borrow();
        assert_eq!(calls[0].0, CITY_SEARCH_QUERY);
        assert_eq!(calls[0].1["where"]["city_name"]["_ilike"], "%bos%");
        assert_eq!(calls[0].1["distinct_on"], json!(["city_name"]));
    }

    #[tokio::test]
    async fn transport_failures_propagate() {
        let err = fetch_cities(&FailingClient, "").await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn shared_client_through_rc() {
        let client: Rc<dyn QueryClient> = Rc::new(RecordingClient::replying(json!({
            "data": {"sales_history": []}
        })));
        let cities = fetch_cities(&client, "").await.unwrap();
        assert!(cities.is_empty());
    }
}
