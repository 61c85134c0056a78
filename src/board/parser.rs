//! Snapshot text to [`Board`]
//!
//! The snapshot is a fixed-width table: a header line labelling the columns,
//! a separator rule, then one line per board row:
//!
//! ```text
//! y/x |   1 |   2 |   3 |
//! -----------------------
//!   1 | text_baba | text_is | text_you |
//! ```
//!
//! Parsing is best-effort. Rows with fewer cells than the header declares
//! are padded with empty cells, and a row with more cells widens the board,
//! so no row ever fails the parse.

use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::multi::many0;
use nom::sequence::preceded;
use nom::{IResult, Parser};

use crate::board::{Board, Cell, EntityTag};
use crate::core::config::SnapshotFormat;
use crate::core::error::{InsightError, Result};

/// Parses snapshot tables according to a [`SnapshotFormat`]
pub struct GridParser<'a> {
    format: &'a SnapshotFormat,
}

impl<'a> GridParser<'a> {
    pub fn new(format: &'a SnapshotFormat) -> Self {
        Self { format }
    }

    pub fn parse(&self, text: &str) -> Result<Board> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(InsightError::MissingHeader)?;
        for _ in 1..self.format.preamble_lines {
            lines.next().ok_or(InsightError::MissingHeader)?;
        }

        let header_width = self.column_count(header)?;
        let mut rows = Vec::new();

        for (index, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = index + self.format.preamble_lines + 1;
            rows.push(self.parse_row(line, line_number, header_width));
        }

        let width = rows.iter().map(Vec::len).fold(header_width, usize::max);
        tracing::debug!("Parsed {}x{} board", width, rows.len());
        Ok(Board::with_width(width, rows))
    }

    fn column_count(&self, header: &str) -> Result<usize> {
        let (_, labels) = split_line(header, self.format.cell_separator);
        let width = labels.iter().filter(|l| !l.trim().is_empty()).count();
        if width == 0 {
            return Err(InsightError::EmptyHeader);
        }
        Ok(width)
    }

    /// Cells of one row, without the row label. The separator closing the
    /// last cell does not open another one.
    fn parse_row(&self, line: &str, line_number: usize, header_width: usize) -> Vec<Cell> {
        let separator = self.format.cell_separator;
        let body = line.trim_end();
        let body = body.strip_suffix(separator).unwrap_or(body);
        let (_, segments) = split_line(body, separator);

        if segments.len() < header_width {
            tracing::warn!(
                "Row at line {} has {} of {} cells; padding with empty cells",
                line_number,
                segments.len(),
                header_width
            );
        } else if segments.len() > header_width {
            tracing::warn!(
                "Row at line {} has {} of {} cells; widening the board",
                line_number,
                segments.len(),
                header_width
            );
        }

        segments
            .into_iter()
            .map(|raw| self.parse_cell(raw))
            .collect()
    }

    fn parse_cell(&self, raw: &str) -> Cell {
        raw.trim()
            .split(self.format.stack_separator)
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| EntityTag::from_raw(id, &self.format.word_marker))
            .collect()
    }
}

/// Split a table line into its leading label and the segments after each
/// separator. A trailing separator yields a final empty segment.
fn split_line(line: &str, separator: char) -> (&str, Vec<&str>) {
    let result: IResult<&str, (&str, Vec<&str>)> = (
        take_till(move |c: char| c == separator),
        many0(preceded(
            char(separator),
            take_till(move |c: char| c == separator),
        )),
    )
        .parse(line);

    match result {
        Ok((_, parsed)) => parsed,
        Err(_) => (line, Vec::new()),
    }
}
