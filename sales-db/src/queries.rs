//! Typed queries over `sales_history`.
//!
//! The GraphQL filter/ordering variables are translated into a parameterized
//! SQL statement. Column names only ever come from [`SalesColumn`], so no
//! user text reaches the SQL string.
//!
//! SQLite has no `DISTINCT ON`, so it is emulated: the distinct columns lead
//! the `ORDER BY` (as PostgreSQL requires) and the first row of each key is
//! kept.

use std::collections::HashSet;

use rusqlite::types::Value as SqlValue;
use sales_core::query::{
    CitySearchVariables, OrderBy, OrderDirection, SalesBoolExp, SalesColumn, SalesQueryVariables,
};
use sales_core::record::SalesRecord;

use crate::schema::FOLD_CASE_FN;
use crate::Database;

impl Database {
    /// Every row, in id order.
    pub fn all_sales(&self) -> anyhow::Result<Vec<SalesRecord>> {
        self.select_sales(&SalesBoolExp::default(), &[], &[])
    }

    /// Distinct city names, sorted.
    pub fn city_names(&self) -> anyhow::Result<Vec<String>> {
        self.search_cities(&CitySearchVariables::for_term(""))
    }

    /// Evaluate the `SalesHistory` operation's variables.
    pub fn query_sales(&self, vars: &SalesQueryVariables) -> anyhow::Result<Vec<SalesRecord>> {
        self.select_sales(&vars.where_, &vars.order_by, &vars.distinct_on)
    }

    /// Evaluate the `CitySearch` operation's variables.
    pub fn search_cities(&self, vars: &CitySearchVariables) -> anyhow::Result<Vec<String>> {
        let rows = self.select_sales(&vars.where_, &[], &vars.distinct_on)?;
        Ok(rows.into_iter().map(|r| r.city_name).collect())
    }

    /// Select rows matching `where_`, ordered by `order_by`, keeping only the
    /// first row per `distinct_on` key.
    pub fn select_sales(
        &self,
        where_: &SalesBoolExp,
        order_by: &[OrderBy],
        distinct_on: &[SalesColumn],
    ) -> anyhow::Result<Vec<SalesRecord>> {
        let mut clauses = Vec::new();
        let mut params = Vec::new();
        push_conditions(where_, &mut clauses, &mut params);

        let mut sql = String::from("SELECT id, year, city_name, amount FROM sales_history");
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY ");
        sql.push_str(&order_clause(order_by, distinct_on));

        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), |row| {
                Ok(SalesRecord {
                    id: row.get(0)?,
                    year: row.get(1)?,
                    city_name: row.get(2)?,
                    amount: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let rows = if distinct_on.is_empty() {
            rows
        } else {
            let mut seen = HashSet::new();
            rows.into_iter()
                .filter(|r| seen.insert(distinct_key(r, distinct_on)))
                .collect()
        };

        log::info!(
            "[Sales] query: select_sales returned {} records",
            rows.len()
        );
        Ok(rows)
    }
}

/// Flatten a boolean expression into conjunctive SQL clauses.
fn push_conditions(exp: &SalesBoolExp, clauses: &mut Vec<String>, params: &mut Vec<SqlValue>) {
    for nested in &exp.and {
        push_conditions(nested, clauses, params);
    }
    if let Some(city) = &exp.city_name {
        if let Some(eq) = &city.eq {
            clauses.push("city_name = ?".to_string());
            params.push(SqlValue::Text(eq.clone()));
        }
        if let Some(pattern) = &city.ilike {
            clauses.push(format!("{FOLD_CASE_FN}(city_name) LIKE {FOLD_CASE_FN}(?)"));
            params.push(SqlValue::Text(pattern.clone()));
        }
    }
    if let Some(year) = &exp.year {
        if let Some(eq) = year.eq {
            clauses.push("year = ?".to_string());
            params.push(SqlValue::Integer(i64::from(eq)));
        }
        if let Some(pattern) = &year.ilike {
            clauses.push("CAST(year AS TEXT) LIKE ?".to_string());
            params.push(SqlValue::Text(pattern.clone()));
        }
    }
}

fn order_clause(order_by: &[OrderBy], distinct_on: &[SalesColumn]) -> String {
    let requested: Vec<(SalesColumn, OrderDirection)> = order_by
        .iter()
        .flat_map(|entry| entry.iter().map(|(col, dir)| (*col, *dir)))
        .collect();

    let mut terms: Vec<(SalesColumn, OrderDirection)> = distinct_on
        .iter()
        .map(|col| {
            let dir = requested
                .iter()
                .find(|(c, _)| c == col)
                .map_or(OrderDirection::Asc, |(_, d)| *d);
            (*col, dir)
        })
        .collect();
    for term in requested {
        if !terms.iter().any(|(c, _)| *c == term.0) {
            terms.push(term);
        }
    }
    if !terms.iter().any(|(c, _)| *c == SalesColumn::Id) {
        terms.push((SalesColumn::Id, OrderDirection::Asc));
    }

    terms
        .iter()
        .map(|(col, dir)| {
            let dir = match dir {
                OrderDirection::Asc => "ASC",
                OrderDirection::Desc => "DESC",
            };
            format!("{} {}", col.sql_name(), dir)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn distinct_key(record: &SalesRecord, columns: &[SalesColumn]) -> Vec<String> {
    columns
        .iter()
        .map(|col| match col {
            SalesColumn::Id => record.id.to_string(),
            SalesColumn::Year => record.year.to_string(),
            SalesColumn::CityName => record.city_name.clone(),
            SalesColumn::Amount => record.amount.to_string(),
        })
        .collect()
}
