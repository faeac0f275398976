//! `cities` command.

use log::info;
use sales_core::client::fetch_cities;

use crate::load_database;

pub async fn print_cities(data: &str, term: &str) -> anyhow::Result<()> {
    let db = load_database(data)?;
    let cities = fetch_cities(&db, term).await?;
    info!("{} cities match {:?}", cities.len(), term);
    for city in cities {
        println!("{city}");
    }
    Ok(())
}
