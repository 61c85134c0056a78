//! Query execution - parses a snapshot and answers one query against it

use crate::board::{EntityTag, GridParser};
use crate::core::config::AnalyzerConfig;
use crate::core::error::Result;
use crate::core::types::Position;
use crate::insights::GameInsights;
use crate::navigation::{
    group_by_row, is_entity_reachable, reachable_entities, validate_options, MoveOptions,
    Navigator,
};
use crate::query::request::{Query, QueryResponse};
use crate::rules::{positions_with_property, RuleExtractor};

/// Answers queries against snapshot text
pub struct QueryExecutor {
    config: AnalyzerConfig,
}

impl QueryExecutor {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Parse `snapshot` and answer `query` from it
    ///
    /// Parse failures are the only errors. Unreachable targets produce
    /// empty or negative answers, not errors.
    pub fn execute(&self, snapshot: &str, query: &Query) -> Result<QueryResponse> {
        let board = GridParser::new(&self.config.format).parse(snapshot)?;
        tracing::debug!(
            "Executing {:?} on {}x{} board",
            query,
            board.width(),
            board.height()
        );

        let rules = RuleExtractor::new(&self.config).extract(&board);

        let response = match query {
            Query::Rules => QueryResponse::Rules { rules },
            Query::Positions { property } => QueryResponse::Positions {
                positions: positions_with_property(&rules, &board, property),
                property: property.clone(),
            },
            Query::Reachable => {
                let navigator = Navigator::new(&board, &rules, &self.config);
                let entities = reachable_entities(&board, &navigator, &self.config);
                QueryResponse::Reachable {
                    entities: group_by_row(&entities),
                }
            }
            Query::IsReachable { entity, word_tile } => {
                let navigator = Navigator::new(&board, &rules, &self.config);
                let tag = if *word_tile {
                    EntityTag::word(entity.as_str())
                } else {
                    EntityTag::object(entity.as_str())
                };
                QueryResponse::IsReachable {
                    reachable: is_entity_reachable(&board, &navigator, &tag),
                    entity: entity.clone(),
                    word_tile: *word_tile,
                }
            }
            Query::ShortestPath { x, y, last_move } => {
                let navigator = Navigator::new(&board, &rules, &self.config);
                QueryResponse::ShortestPath {
                    path: navigator.shortest_path(Position::new(*x, *y), *last_move),
                }
            }
            Query::Validate { options } => {
                let navigator = Navigator::new(&board, &rules, &self.config);
                let batch = MoveOptions {
                    options: options.clone(),
                };
                QueryResponse::Validate(validate_options(&navigator, &batch))
            }
            Query::Insights => {
                QueryResponse::Insights(GameInsights::analyze(&board, &self.config))
            }
        };

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::InsightError;
    use crate::core::types::Direction;
    use crate::navigation::{Plan, Waypoint};

    const SNAPSHOT: &str = "\
y/x | 1 | 2 | 3 | 4 | 5 |
---
  1 | text_baba | text_is | text_you |  |  |
  2 | baba |  |  |  | flag |
  3 |  |  |  |  |  |
  4 | text_flag | text_is | text_win |  |  |
";

    fn executor() -> QueryExecutor {
        QueryExecutor::new(AnalyzerConfig::default())
    }

    #[test]
    fn test_rules_query() {
        let response = executor().execute(SNAPSHOT, &Query::Rules).unwrap();
        match response {
            QueryResponse::Rules { rules } => {
                assert!(rules.contains("baba", "you"));
                assert!(rules.contains("flag", "win"));
                assert_eq!(rules.len(), 2);
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_positions_query() {
        let query = Query::Positions {
            property: "win".to_string(),
        };
        match executor().execute(SNAPSHOT, &query).unwrap() {
            QueryResponse::Positions { positions, .. } => {
                assert_eq!(positions, vec![Position::new(5, 2)]);
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_shortest_path_query() {
        let query = Query::ShortestPath {
            x: 5,
            y: 2,
            last_move: Direction::Right,
        };
        match executor().execute(SNAPSHOT, &query).unwrap() {
            QueryResponse::ShortestPath { path } => {
                assert_eq!(path, vec![Direction::Right; 4]);
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_is_reachable_query() {
        let query = Query::IsReachable {
            entity: "flag".to_string(),
            word_tile: false,
        };
        match executor().execute(SNAPSHOT, &query).unwrap() {
            QueryResponse::IsReachable { reachable, .. } => assert!(reachable),
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_validate_query() {
        let query = Query::Validate {
            options: vec![
                Plan {
                    moves: vec![Waypoint::new(5, 2, Direction::Right)],
                    goal: "win".to_string(),
                },
                Plan {
                    moves: vec![Waypoint::new(9, 9, Direction::Up)],
                    goal: "off the board".to_string(),
                },
            ],
        };
        match executor().execute(SNAPSHOT, &query).unwrap() {
            QueryResponse::Validate(validated) => {
                assert!(validated.options[0].is_valid);
                assert!(!validated.options[1].is_valid);
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_insights_query() {
        match executor().execute(SNAPSHOT, &Query::Insights).unwrap() {
            QueryResponse::Insights(insights) => assert!(insights.path_to_win.is_some()),
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_surfaces() {
        let result = executor().execute("only one line", &Query::Rules);
        assert!(matches!(result, Err(InsightError::MissingHeader)));
    }
}
