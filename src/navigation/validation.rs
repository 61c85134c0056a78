//! Validation of proposed move plans
//!
//! Every waypoint is checked against the same snapshot. Earlier waypoints
//! are not simulated, so a plan that only works after pushing something
//! along the way is judged by the board as it is now.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, Position};
use crate::navigation::pathfinding::Navigator;

/// A target cell and the move that must enter it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: usize,
    pub y: usize,
    pub last_move: Direction,
}

impl Waypoint {
    pub fn new(x: usize, y: usize, last_move: Direction) -> Self {
        Self { x, y, last_move }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position (x,y): {}\nLast move to get to position: {}",
            self.position(),
            self.last_move
        )
    }
}

/// A proposed plan: waypoints toward a stated goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub moves: Vec<Waypoint>,
    pub goal: String,
}

/// A batch of proposed plans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOptions {
    pub options: Vec<Plan>,
}

/// A plan annotated with whether every waypoint is reachable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedPlan {
    pub moves: Vec<Waypoint>,
    pub goal: String,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedMoveOptions {
    pub options: Vec<ValidatedPlan>,
}

/// Validate one plan. A plan without waypoints is valid.
pub fn validate_plan(navigator: &Navigator, plan: &Plan) -> ValidatedPlan {
    let is_valid = plan.moves.iter().all(|waypoint| {
        !navigator
            .shortest_path(waypoint.position(), waypoint.last_move)
            .is_empty()
    });

    tracing::debug!(
        "Plan '{}' with {} waypoints is {}",
        plan.goal,
        plan.moves.len(),
        if is_valid { "valid" } else { "invalid" }
    );

    ValidatedPlan {
        moves: plan.moves.clone(),
        goal: plan.goal.clone(),
        is_valid,
    }
}

/// Validate every plan in a batch, preserving order
pub fn validate_options(navigator: &Navigator, options: &MoveOptions) -> ValidatedMoveOptions {
    ValidatedMoveOptions {
        options: options
            .options
            .iter()
            .map(|plan| validate_plan(navigator, plan))
            .collect(),
    }
}

impl fmt::Display for ValidatedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Moves:")?;
        for waypoint in &self.moves {
            writeln!(f, "{}\n", waypoint)?;
        }
        writeln!(f, "Goal of moves: {}", self.goal)?;
        if self.is_valid {
            write!(
                f,
                "The moves are valid: every waypoint can be reached from the current board."
            )
        } else {
            write!(
                f,
                "The moves are not valid: at least one waypoint cannot be reached. \
                 Do not pursue this plan."
            )
        }
    }
}

impl fmt::Display for ValidatedMoveOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Move options:")?;
        for (i, option) in self.options.iter().enumerate() {
            writeln!(f, "- Option {}:", i + 1)?;
            for line in option.to_string().lines() {
                writeln!(f, "    {}", line)?;
            }
        }
        Ok(())
    }
}
