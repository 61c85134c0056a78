//! Render a [`Board`] back into the snapshot table format

use std::fmt::Write;

use crate::board::Board;
use crate::core::config::SnapshotFormat;

/// Render `board` as the fixed-width table the parser reads
///
/// Cells longer than `format.cell_width` are truncated.
pub fn render_snapshot(board: &Board, format: &SnapshotFormat) -> String {
    let sep = format.cell_separator;
    let width = format.cell_width;

    let mut header = format!("y/x {}", sep);
    for x in 1..=board.width() {
        let _ = write!(header, " {:>3} {}", x, sep);
    }

    let mut output = String::with_capacity(header.len() * (board.height() + 2));
    output.push_str(&header);
    output.push('\n');
    // The rule stops one short of the header's closing separator
    output.push_str(&"-".repeat(header.chars().count().saturating_sub(1)));
    output.push('\n');

    for (y, row) in board.rows().enumerate() {
        let _ = write!(output, "{:>3} {}", y + 1, sep);
        for cell in row {
            let raw: String = cell
                .to_raw(format.stack_separator, &format.word_marker)
                .chars()
                .take(width)
                .collect();
            let _ = write!(output, " {:<width$} {}", raw, sep, width = width);
        }
        output.push('\n');
    }

    output
}
