//! Which board entities the controlled entity can reach

use std::collections::HashMap;

use serde::Serialize;

use crate::board::{Board, EntityTag};
use crate::core::config::AnalyzerConfig;
use crate::core::types::Position;
use crate::navigation::pathfinding::Navigator;

/// An entity reachable from some controlled-entity position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachableEntity {
    #[serde(flatten)]
    pub position: Position,
    pub entity: EntityTag,
}

/// Every tracked entity or word tile that some approach direction reaches
///
/// Each occupied position is searched at most once (up to four approaches),
/// so cost stays within cells x 4 searches. Fine for boards up to about
/// 40x40.
pub fn reachable_entities(
    board: &Board,
    navigator: &Navigator,
    config: &AnalyzerConfig,
) -> Vec<ReachableEntity> {
    let mut cache: HashMap<Position, bool> = HashMap::new();

    let reachable: Vec<ReachableEntity> = board
        .occupants()
        .filter(|(_, tag)| tag.word_tile || config.is_relevant(&tag.name))
        .filter(|(pos, _)| {
            *cache
                .entry(*pos)
                .or_insert_with(|| navigator.is_reachable(*pos))
        })
        .map(|(position, tag)| ReachableEntity {
            position,
            entity: tag.clone(),
        })
        .collect();

    tracing::debug!(
        "{} reachable entities across {} searched cells",
        reachable.len(),
        cache.len()
    );
    reachable
}

/// Whether any occurrence of `entity` on the board is reachable
pub fn is_entity_reachable(board: &Board, navigator: &Navigator, entity: &EntityTag) -> bool {
    board
        .occupants()
        .filter(|(_, tag)| *tag == entity)
        .any(|(pos, _)| navigator.is_reachable(pos))
}

/// Group entities by row, rows ascending, empty rows omitted
pub fn group_by_row(entities: &[ReachableEntity]) -> Vec<Vec<ReachableEntity>> {
    let mut rows: Vec<Vec<ReachableEntity>> = Vec::new();
    for entity in entities {
        let current_y = rows.last().and_then(|row| row.first()).map(|e| e.position.y);
        if current_y != Some(entity.position.y) {
            rows.push(Vec::new());
        }
        if let Some(row) = rows.last_mut() {
            row.push(entity.clone());
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GridParser;
    use crate::rules::RuleExtractor;

    fn analyze(text: &str) -> (Board, Navigator, AnalyzerConfig) {
        let config = AnalyzerConfig::default();
        let board = GridParser::new(&config.format).parse(text).unwrap();
        let rules = RuleExtractor::new(&config).extract(&board);
        let navigator = Navigator::new(&board, &rules, &config);
        (board, navigator, config)
    }

    const WALLED: &str = "\
y/x | 1 | 2 | 3 | 4 | 5 |
---
  1 | text_baba | text_is | text_you |  |  |
  2 | baba |  | wall | flag |  |
  3 |  |  | wall |  |  |
  4 | text_wall | text_is | text_stop | wall | wall |
";

    #[test]
    fn test_reachable_entities() {
        let (board, navigator, config) = analyze(WALLED);
        let reachable = reachable_entities(&board, &navigator, &config);
        let names: Vec<_> = reachable
            .iter()
            .map(|r| (r.position.x, r.position.y, r.entity.name.as_str(), r.entity.word_tile))
            .collect();

        // Rule text along the top can be pushed from below
        assert!(names.contains(&(1, 1, "baba", true)));
        assert!(names.contains(&(2, 1, "is", true)));
        // Below "you" is a wall, and its other sides are text or off-board
        assert!(!names.contains(&(3, 1, "you", true)));
        // Bottom rule text can be pushed from above
        assert!(names.contains(&(1, 4, "wall", true)));
        // baba itself: any neighbor cell it can stand next to
        assert!(names.contains(&(1, 2, "baba", false)));
        // Walls are stop, so they are never reachable
        assert!(!names.iter().any(|(_, _, n, w)| *n == "wall" && !*w));
        // The flag is cut off by the wall column
        assert!(!names.contains(&(4, 2, "flag", false)));
    }

    #[test]
    fn test_untracked_kinds_ignored() {
        let text = "\
y/x | 1 | 2 | 3 |
---
  1 | text_baba | text_is | text_you |
  2 | baba | keke |  |
";
        let (board, navigator, config) = analyze(text);
        let reachable = reachable_entities(&board, &navigator, &config);
        assert!(!reachable.iter().any(|r| r.entity.name == "keke"));
    }

    #[test]
    fn test_is_entity_reachable() {
        let (board, navigator, _) = analyze(WALLED);
        assert!(!is_entity_reachable(&board, &navigator, &EntityTag::object("flag")));
        assert!(is_entity_reachable(&board, &navigator, &EntityTag::word("is")));
        assert!(!is_entity_reachable(&board, &navigator, &EntityTag::word("you")));
        assert!(!is_entity_reachable(&board, &navigator, &EntityTag::object("keke")));
    }

    #[test]
    fn test_group_by_row() {
        let entity = |x, y| ReachableEntity {
            position: Position::new(x, y),
            entity: EntityTag::object("rock"),
        };
        let grouped = group_by_row(&[entity(1, 1), entity(3, 1), entity(2, 4)]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].len(), 2);
        assert_eq!(grouped[1][0].position.y, 4);
    }

    #[test]
    fn test_serialized_shape() {
        let entity = ReachableEntity {
            position: Position::new(2, 3),
            entity: EntityTag::word("flag"),
        };
        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json["x"], 2);
        assert_eq!(json["y"], 3);
        assert_eq!(json["entity"]["name"], "flag");
        assert_eq!(json["entity"]["word_tile"], true);
    }
}
