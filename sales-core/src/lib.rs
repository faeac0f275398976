//! Core types and pure logic for the sales dashboard.
//!
//! This crate provides:
//! - `record`: the `SalesRecord` row shape and the `SalesFilter` criteria
//! - `query`: GraphQL documents and typed variables for the two operations
//! - `client`: the `QueryClient` trait and typed fetch helpers
//! - `series`: the pivot from flat records into a 3D `ChartSeries`
//! - `option`: the declarative 3D bar chart option and tooltip text
//! - `search`: debounced city search session and dropdown state
//! - `dummy`: the passthrough used by the wiring example component
//!
//! Nothing here touches the DOM, so everything is testable natively.

pub mod client;
pub mod config;
pub mod dummy;
pub mod error;
pub mod option;
pub mod query;
pub mod record;
pub mod search;
pub mod series;
