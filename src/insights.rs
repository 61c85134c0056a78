//! One-shot board analysis for the agent layer
//!
//! Bundles the active rules, what the controlled entity can reach, where it
//! is, where the win cells are, and the cheapest route onto one of them.

use std::fmt;

use serde::Serialize;

use crate::board::Board;
use crate::core::config::AnalyzerConfig;
use crate::core::types::{Direction, Path, Position};
use crate::navigation::{group_by_row, reachable_entities, Navigator, Plan, ReachableEntity, Waypoint};
use crate::rules::{positions_with_property, RuleExtractor, RuleSet};

/// Goal label attached to the generated win route
pub const WIN_GOAL: &str = "Move to Goal";

/// Shortest route onto a win cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinRoute {
    pub plan: Plan,
    pub path: Path,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameInsights {
    pub active_rules: RuleSet,
    pub reachable_entities: Vec<Vec<ReachableEntity>>,
    pub you_positions: Vec<Position>,
    pub win_positions: Vec<Position>,
    pub path_to_win: Option<WinRoute>,
}

impl GameInsights {
    pub fn analyze(board: &Board, config: &AnalyzerConfig) -> Self {
        let rules = RuleExtractor::new(config).extract(board);
        let navigator = Navigator::new(board, &rules, config);

        let win_positions = positions_with_property(&rules, board, &config.properties.win);
        let path_to_win = shortest_win_route(&navigator, &win_positions);
        let reachable = reachable_entities(board, &navigator, config);

        tracing::debug!(
            "Insights: {} rules, {} win cells, win route {}",
            rules.len(),
            win_positions.len(),
            if path_to_win.is_some() { "found" } else { "missing" }
        );

        Self {
            you_positions: navigator.origins(),
            reachable_entities: group_by_row(&reachable),
            active_rules: rules,
            win_positions,
            path_to_win,
        }
    }
}

/// Shortest non-empty path over every win cell and approach side
///
/// Ties go to the earlier win cell, then to up, down, left, right.
fn shortest_win_route(navigator: &Navigator, win_positions: &[Position]) -> Option<WinRoute> {
    let mut best: Option<(Position, Direction, Path)> = None;

    for &target in win_positions {
        for approach in Direction::ALL {
            let path = navigator.shortest_path(target, approach);
            if path.is_empty() {
                continue;
            }
            if best.as_ref().map_or(true, |(_, _, b)| path.len() < b.len()) {
                best = Some((target, approach, path));
            }
        }
    }

    best.map(|(target, approach, path)| WinRoute {
        plan: Plan {
            moves: vec![Waypoint::new(target.x, target.y, approach)],
            goal: WIN_GOAL.to_string(),
        },
        path,
    })
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for GameInsights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<String> = self
            .active_rules
            .iter()
            .map(|r| r.to_string().to_uppercase())
            .collect();
        writeln!(f, "Active rules: [{}]", rules.join(", "))?;
        writeln!(f)?;

        writeln!(f, "Reachable entities:")?;
        for row in &self.reachable_entities {
            let cells: Vec<String> = row
                .iter()
                .map(|r| {
                    let kind = if r.entity.word_tile { "text " } else { "" };
                    format!("{} {}{}", r.position, kind, r.entity.name)
                })
                .collect();
            writeln!(f, "  {}", cells.join(", "))?;
        }
        writeln!(f)?;

        writeln!(f, "YOU positions: [{}]", join(&self.you_positions))?;
        writeln!(f, "Win positions: [{}]", join(&self.win_positions))?;

        match &self.path_to_win {
            Some(route) => {
                writeln!(f, "A path to a win position exists. Executing it wins the level:")?;
                for waypoint in &route.plan.moves {
                    writeln!(f, "{}", waypoint)?;
                }
                write!(f, "Moves: {}", join(&route.path))
            }
            None => write!(
                f,
                "No path to a win position exists. The rules have to change to win the level."
            ),
        }
    }
}
