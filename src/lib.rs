//! # Healthdash
//!
//! Healthcare Dashboard - a Rust web application for exploring patient
//! billing and admission data.
//!
//! ## Features
//!
//! - **Tolerant loading**: malformed billing amounts become missing values
//! - **Pure transforms**: every chart is a function of the table and the controls
//! - **Interactive page**: gender, billing, chart-type and condition controls
//! - **JSON API**: Plotly-ready figures for every chart
//!
//! ## Modules
//!
//! - [`records`]: Record table and CSV loader
//! - [`transforms`]: Filter-and-aggregate functions behind each chart
//! - [`chart`]: Serializable Plotly figures
//! - [`dashboard`]: Controls, chart registry and dataset summary
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//! - [`stylesheet`]: SCSS compilation at startup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use healthdash::config::DashboardConfig;
//! use healthdash::dashboard::{ChartId, ControlValues, Dashboard};
//! use healthdash::records::TableLoader;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load once; the table is immutable from here on
//!     let table = TableLoader::new().load(Path::new("assets/healthcare.csv"))?;
//!     let dashboard = Dashboard::new(table, &DashboardConfig::default());
//!
//!     println!("{} records", dashboard.summary().total_records);
//!
//!     // Render a chart for a set of control values
//!     let controls = ControlValues::default().gender("Female").threshold(20_000.0);
//!     let figure = dashboard.render(ChartId::BillingDistribution, &controls);
//!     println!("{}", serde_json::to_string(&figure)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod records;
pub mod stylesheet;
pub mod transforms;

// Re-export top-level types for convenience
pub use dashboard::{ChartId, ControlValues, Dashboard, DatasetSummary};
pub use records::{Record, RecordTable, TableLoader, YearMonth};
