//! Rule inference and rule-driven lookups

pub mod extractor;
pub mod positions;
pub mod rule;

pub use extractor::RuleExtractor;
pub use positions::positions_with_property;
pub use rule::{Rule, RuleSet};
