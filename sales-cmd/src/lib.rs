//! Command implementations for the sales CLI.
//!
//! Every command loads a sales CSV into the in-memory store and goes
//! through the same query client helpers the web app uses.

use clap::Subcommand;

pub mod chart;
pub mod cities;

const DEFAULT_DATA: &str = "fixtures/sales_history.csv";

#[derive(Subcommand)]
pub enum Command {
    /// Print the pivoted chart series and value range as JSON
    Series {
        /// Path to the sales CSV (id,year,city_name,amount)
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: String,

        /// Only include this city
        #[arg(short, long)]
        city: Option<String>,

        /// Only include this year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Print the full 3D bar chart option as JSON
    Option {
        /// Path to the sales CSV (id,year,city_name,amount)
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: String,

        /// Only include this city
        #[arg(short, long)]
        city: Option<String>,

        /// Only include this year
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List distinct cities matching a search term
    Cities {
        /// Path to the sales CSV (id,year,city_name,amount)
        #[arg(short, long, default_value = DEFAULT_DATA)]
        data: String,

        /// Case-insensitive substring to match; lists every city when omitted
        #[arg(short, long, default_value = "")]
        term: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Series { data, city, year } => {
            chart::print_series(&data, city.as_deref(), year).await
        }
        Command::Option { data, city, year } => {
            chart::print_option(&data, city.as_deref(), year).await
        }
        Command::Cities { data, term } => cities::print_cities(&data, &term).await,
    }
}

/// Read a sales CSV from disk into a fresh in-memory store.
pub fn load_database(path: &str) -> anyhow::Result<sales_db::Database> {
    use anyhow::Context;

    let csv_data =
        std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    sales_db::Database::from_csv(&csv_data)
        .with_context(|| format!("failed to load sales data from {path}"))
}
