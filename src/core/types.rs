//! Core type definitions used throughout the codebase
//!
//! Two coordinate systems exist. [`Position`] is 1-based with (1, 1) at the
//! top-left and is the only form that crosses the public boundary. [`Coord`]
//! is the 0-based form used by the grid and the search internals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::InsightError;

/// Board position as seen by callers (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Convert to a 0-based coordinate. Returns None for a zero component.
    pub(crate) fn to_coord(self) -> Option<Coord> {
        Some(Coord::new(self.x.checked_sub(1)?, self.y.checked_sub(1)?))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Grid coordinate used internally (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub(crate) struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn to_position(self) -> Position {
        Position::new(self.x + 1, self.y + 1)
    }

    /// Manhattan distance
    pub fn distance(&self, other: &Self) -> u32 {
        (self.x.abs_diff(other.x) + self.y.abs_diff(other.y)) as u32
    }

    /// Coordinate one step in `direction`, if it stays inside a
    /// `width` x `height` board
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < width && y < height).then_some(Coord::new(x, y))
    }

    /// The four orthogonal neighbors that lie inside the board
    pub fn neighbors(self, width: usize, height: usize) -> impl Iterator<Item = Coord> {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(direction, width, height))
    }
}

/// A single move on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order approaches are tried
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Column and row offset of one move. Up decreases y.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Direction of a single orthogonal step between two adjacent coordinates
    pub(crate) fn between(from: Coord, to: Coord) -> Option<Self> {
        Direction::ALL
            .into_iter()
            .find(|&direction| from.step(direction, usize::MAX, usize::MAX) == Some(to))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(InsightError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = InsightError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Ordered move sequence. Empty means no route exists.
pub type Path = Vec<Direction>;
