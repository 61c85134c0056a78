//! Query and response types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, Path, Position};
use crate::insights::GameInsights;
use crate::navigation::{Plan, ReachableEntity, ValidatedMoveOptions};
use crate::rules::RuleSet;

/// A question about one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum Query {
    /// Active rules
    Rules,
    /// Positions of the kind holding a property
    Positions { property: String },
    /// Every reachable tracked entity and word tile, grouped by row
    Reachable,
    /// Whether any occurrence of an entity can be reached
    IsReachable {
        entity: String,
        #[serde(default)]
        word_tile: bool,
    },
    /// Moves that end by entering (x, y) with `last_move`
    ShortestPath {
        x: usize,
        y: usize,
        last_move: Direction,
    },
    /// Flag each proposed plan as valid or not
    Validate { options: Vec<Plan> },
    /// Combined analysis
    Insights,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryResponse {
    Rules {
        rules: RuleSet,
    },
    Positions {
        property: String,
        positions: Vec<Position>,
    },
    Reachable {
        entities: Vec<Vec<ReachableEntity>>,
    },
    IsReachable {
        entity: String,
        word_tile: bool,
        reachable: bool,
    },
    ShortestPath {
        path: Path,
    },
    Validate(ValidatedMoveOptions),
    Insights(GameInsights),
}

impl fmt::Display for QueryResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryResponse::Rules { rules } => {
                if rules.is_empty() {
                    return write!(f, "No active rules");
                }
                let lines: Vec<String> = rules.iter().map(ToString::to_string).collect();
                write!(f, "{}", lines.join("\n"))
            }
            QueryResponse::Positions {
                property,
                positions,
            } => {
                let shown: Vec<String> = positions.iter().map(ToString::to_string).collect();
                write!(f, "{}: [{}]", property, shown.join(", "))
            }
            QueryResponse::Reachable { entities } => {
                let lines: Vec<String> = entities
                    .iter()
                    .map(|row| {
                        row.iter()
                            .map(|r| format!("{} {}", r.position, r.entity.name))
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            QueryResponse::IsReachable {
                entity,
                word_tile,
                reachable,
            } => {
                let kind = if *word_tile { "text " } else { "" };
                let verdict = if *reachable { "reachable" } else { "not reachable" };
                write!(f, "{}{} is {}", kind, entity, verdict)
            }
            QueryResponse::ShortestPath { path } => {
                if path.is_empty() {
                    return write!(f, "No path");
                }
                let moves: Vec<&str> = path.iter().map(|d| d.as_str()).collect();
                write!(f, "{}", moves.join(","))
            }
            QueryResponse::Validate(options) => write!(f, "{}", options),
            QueryResponse::Insights(insights) => write!(f, "{}", insights),
        }
    }
}
