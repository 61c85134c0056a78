pub mod config;
pub mod error;
pub mod types;

pub use config::{AnalyzerConfig, PropertyNames, SnapshotFormat};
pub use error::{InsightError, Result};
pub use types::{Direction, Path, Position};
