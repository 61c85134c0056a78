//! Generic row-major grid storage

use crate::core::types::Coord;

/// Generic 2D grid addressed by 0-based coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Grid<T: Clone + Default> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    /// Build from rows, padding short rows with defaults and dropping
    /// anything past `width`
    pub fn from_rows(width: usize, rows: Vec<Vec<T>>) -> Self {
        let height = rows.len();
        let mut data = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, T::default());
            data.extend(row);
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn get(&self, coord: Coord) -> Option<&T> {
        if coord.x < self.width && coord.y < self.height {
            self.data.get(coord.y * self.width + coord.x)
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, coord: Coord, value: T) {
        if coord.x < self.width && coord.y < self.height {
            self.data[coord.y * self.width + coord.x] = value;
        }
    }

    pub fn row(&self, y: usize) -> &[T] {
        if y < self.height {
            &self.data[y * self.width..(y + 1) * self.width]
        } else {
            &[]
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.height).map(move |y| self.row(y))
    }

    pub fn column(&self, x: usize) -> impl Iterator<Item = &T> {
        let width = self.width;
        self.data
            .iter()
            .skip(x)
            .step_by(width.max(1))
            .take(if x < width { self.height } else { 0 })
    }

    /// Every cell with its coordinate, row by row
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, value)| (Coord::new(i % width, i / width), value))
    }

    /// Same shape, each cell mapped through `f`
    pub fn map<U: Clone + Default>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}
