//! In-memory SQLite store for sales history.
//!
//! This crate stands in for the GraphQL server during development and in
//! the CLI: it loads fixture CSV data into SQLite and implements
//! [`sales_core::client::QueryClient`] by evaluating the `SalesHistory` and
//! `CitySearch` operations' variables (`where`, `orderBy`, `distinct_on`).
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data loaded via `include_str!` at compile time in consuming crates
//!
//! # Usage
//!
//! ```rust
//! use sales_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_sales("id,year,city_name,amount\n1,2021,Boston,9\n").unwrap();
//! let cities = db.city_names().unwrap();
//! assert_eq!(cities, vec!["Boston".to_string()]);
//! ```

mod client;
mod loader;
mod queries;
pub mod schema;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding `sales_history` rows.
///
/// Cheaply cloneable (via `Rc`); clones share the same connection.
#[derive(Clone, Debug)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::register_functions(&conn)?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load `csv_data` into it.
    pub fn from_csv(csv_data: &str) -> anyhow::Result<Self> {
        let db = Self::new()?;
        db.load_sales(csv_data)?;
        Ok(db)
    }
}
