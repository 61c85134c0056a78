//! Agent-facing query surface
//!
//! Snapshot text in, result out. Every call parses its own board, so answers
//! always reflect the snapshot passed with the query:
//! Query -> GridParser -> RuleExtractor -> Navigator -> QueryResponse

pub mod executor;
pub mod request;

pub use executor::QueryExecutor;
pub use request::{Query, QueryResponse};
