//! Board positions of entities holding a property

use crate::board::Board;
use crate::core::types::Position;
use crate::rules::rule::RuleSet;

/// Positions of the entity kind holding `property`
///
/// Only the first matching rule decides the kind. If `keke is you` was found
/// before `baba is you`, only keke positions are returned. Word tiles named
/// after the kind are not counted.
pub fn positions_with_property(rules: &RuleSet, board: &Board, property: &str) -> Vec<Position> {
    let Some(subject) = rules.first_subject_with(property) else {
        return Vec::new();
    };

    if rules.subjects_with(property).nth(1).is_some() {
        tracing::debug!(
            "Several kinds are '{}'; reporting only '{}'",
            property,
            subject
        );
    }

    board.object_positions(subject)
}
