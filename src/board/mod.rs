//! Parsed board snapshots
//!
//! A [`Board`] is built once from snapshot text and never mutated. Every
//! query parses its own board, so nothing here outlives a single call.

pub mod entity;
pub(crate) mod grid;
pub mod parser;
pub mod snapshot;

pub use entity::{Cell, EntityTag};
pub use parser::GridParser;
pub use snapshot::render_snapshot;

use crate::core::types::{Coord, Position};
use grid::Grid;

/// Rectangular matrix of cell stacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid<Cell>,
}

impl Board {
    /// Build a board from rows of cells. Rows shorter than the widest row
    /// are padded with empty cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self::with_width(width, rows)
    }

    pub(crate) fn with_width(width: usize, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            cells: Grid::from_rows(width, rows),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width
    }

    pub fn height(&self) -> usize {
        self.cells.height
    }

    /// Cell at a 1-based position
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos.to_coord()?)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cell(pos).is_some()
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.rows()
    }

    /// Columns from left to right, each top to bottom
    pub fn columns(&self) -> impl Iterator<Item = Vec<&Cell>> {
        (0..self.width()).map(move |x| self.cells.column(x).collect())
    }

    /// Every tag on the board with its position, row-major and in stack order
    pub fn occupants(&self) -> impl Iterator<Item = (Position, &EntityTag)> {
        self.cells
            .iter()
            .flat_map(|(coord, cell)| cell.tags().iter().map(move |tag| (coord.to_position(), tag)))
    }

    /// Positions holding an ordinary object of `kind`, row-major
    pub fn object_positions(&self, kind: &str) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|(_, cell)| cell.has_object(kind))
            .map(|(coord, _)| coord.to_position())
            .collect()
    }

    pub(crate) fn grid(&self) -> &Grid<Cell> {
        &self.cells
    }

    pub(crate) fn cell_at(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord)
    }
}
