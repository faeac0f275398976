//! CSV loading for the in-memory store.
//!
//! Expected format (with headers): `id,year,city_name,amount`
//!
//! ```text
//! id,year,city_name,amount
//! 1,2020,Boston,5
//! 2,2021,Boston,9
//! ```

use crate::Database;
use rusqlite::params;

impl Database {
    /// Load sales rows from a CSV string, returning how many were stored.
    ///
    /// Rows with a missing city or non-numeric id/year/amount are skipped.
    /// A repeated id replaces the earlier row.
    pub fn load_sales(&self, csv_data: &str) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut count = 0usize;
        let mut skipped = 0usize;
        for result in rdr.records() {
            let r = result?;
            let id = r.get(0).and_then(|v| v.parse::<i64>().ok());
            let year = r.get(1).and_then(|v| v.parse::<i32>().ok());
            let city = r.get(2).filter(|v| !v.is_empty());
            let amount = r.get(3).and_then(|v| v.parse::<f64>().ok());

            let (Some(id), Some(year), Some(city), Some(amount)) = (id, year, city, amount) else {
                skipped += 1;
                continue;
            };

            conn.execute(
                "INSERT OR REPLACE INTO sales_history (id, year, city_name, amount)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id, year, city, amount],
            )?;
            count += 1;
        }
        log::info!(
            "[Sales] loader: Loaded {} sales rows ({} skipped)",
            count,
            skipped
        );
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn loads_rows_and_skips_bad_ones() {
        let db = Database::new().unwrap();
        let csv = "\
id,year,city_name,amount
1,2020,Boston,5
2,2021,Boston,not-a-number
3,twenty,NYC,3
4,2021,,3
5,2021, NYC ,3.5
";
        let loaded = db.load_sales(csv).unwrap();
        assert_eq!(loaded, 2);
        assert_eq!(db.city_names().unwrap(), vec!["Boston", "NYC"]);
    }

    #[test]
    fn repeated_id_replaces_row() {
        let db = Database::new().unwrap();
        db.load_sales("id,year,city_name,amount\n1,2020,Boston,5\n1,2020,Boston,8\n")
            .unwrap();
        let rows = db.all_sales().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 8.0);
    }
}
