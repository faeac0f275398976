//! `series` and `option` commands.

use log::{info, warn};
use sales_core::client::{fetch_sales, QueryClient};
use sales_core::option::build_chart_option;
use sales_core::record::SalesFilter;
use sales_core::series::{transform, value_range, ChartSeries, ValueRange};
use serde::Serialize;

use crate::load_database;

/// Pivoted series plus its range (`null` when there is no data).
#[derive(Debug, Serialize)]
pub struct SeriesReport {
    pub series: ChartSeries,
    pub range: Option<ValueRange>,
}

/// Fetch rows for `filter` and pivot them.
pub async fn build_report<C>(client: &C, filter: &SalesFilter) -> anyhow::Result<SeriesReport>
where
    C: QueryClient + ?Sized,
{
    let records = fetch_sales(client, filter).await?;
    let series = transform(&records, filter);
    let range = value_range(&series.points);
    Ok(SeriesReport { series, range })
}

pub async fn print_series(data: &str, city: Option<&str>, year: Option<i32>) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let filter = SalesFilter::new(city, year);
    let report = build_report(&db, &filter).await?;
    info!(
        "Series has {} cities, {} years, {} points",
        report.series.cities.len(),
        report.series.years.len(),
        report.series.points.len()
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub async fn print_option(data: &str, city: Option<&str>, year: Option<i32>) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let filter = SalesFilter::new(city, year);
    let report = build_report(&db, &filter).await?;
    match report.range {
        Some(range) => {
            let option = build_chart_option(&report.series, range);
            println!("{}", serde_json::to_string_pretty(&option)?);
        }
        None => {
            warn!("No sales data matches {filter:?}; nothing to chart");
            println!("null");
        }
    }
    Ok(())
}
