//! Healthcare Record Table
//!
//! This module provides the data layer of the dashboard:
//!
//! - **types**: Core data structures (Record, RecordTable, YearMonth)
//! - **loader**: CSV loading with numeric/date coercion
//! - **error**: Error types
//!
//! # Lifecycle
//!
//! ```text
//! startup:  CSV file → TableLoader → RecordTable (immutable)
//! runtime:  Arc<RecordTable> → transforms → charts
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use healthdash::records::{CategoryField, TableLoader};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = TableLoader::new().load(Path::new("assets/healthcare.csv"))?;
//!
//!     let women = table.select(CategoryField::Gender, Some("Female"));
//!     println!("{} of {} records", women.len(), table.len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use loader::{parse_age, parse_billing, parse_date, TableLoader};
pub use types::{CategoryField, Record, RecordTable, YearMonth};
