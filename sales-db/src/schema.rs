//! SQL schema for the in-memory sales store.

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

/// SQL name of the Unicode-aware lowercase function.
pub const FOLD_CASE_FN: &str = "fold_case";

/// Register scalar functions the queries rely on.
///
/// SQLite's built-in `LOWER` and `LIKE` only fold ASCII, so `_ilike` lowers
/// both sides with `fold_case` (Rust's `str::to_lowercase`) first.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        FOLD_CASE_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: String = ctx.get(0)?;
            Ok(text.to_lowercase())
        },
    )
}

/// Returns the full SQL schema as a single batch string.
///
/// `sales_history` mirrors the GraphQL type of the same name: one row per
/// (city, year) sale amount, keyed by `id`.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS sales_history (
        id INTEGER PRIMARY KEY,
        year INTEGER NOT NULL,
        city_name TEXT NOT NULL,
        amount REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_sales_city ON sales_history(city_name);
    CREATE INDEX IF NOT EXISTS idx_sales_year ON sales_history(year);
    "#
}
