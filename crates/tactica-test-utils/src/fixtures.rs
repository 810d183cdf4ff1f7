//! ASCII cell-mask fixtures.
//!
//! Rows are listed top to bottom as `y` increases: the first line is
//! `y = 0`. `#` marks a set cell, any other character a clear one. Leading
//! and trailing blank lines are ignored and every line is trimmed, so
//! fixtures can be written as indented raw strings.

use tactica_core::GridPos;
use tactica_overlay::CellMask;

fn rows(ascii: &str) -> Vec<&str> {
    let lines: Vec<&str> = ascii.lines().map(str::trim).collect();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].to_vec()
}

/// Set cells of an ASCII picture.
pub fn cells_from_ascii(ascii: &str) -> Vec<GridPos> {
    rows(ascii)
        .iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.chars()
                .enumerate()
                .filter(|&(_, c)| c == '#')
                .map(move |(x, _)| GridPos::new(x as i32, y as i32))
        })
        .collect()
}

/// A mask sized to the picture's widest row and its row count.
pub fn mask_from_ascii(ascii: &str) -> CellMask {
    let rows = rows(ascii);
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    CellMask::from_cells(width as u32, rows.len() as u32, cells_from_ascii(ascii))
}

/// Render a mask back to the same picture format, `.` for clear cells.
pub fn mask_to_ascii(mask: &CellMask) -> String {
    let mut out = String::new();
    for y in 0..mask.height() as i32 {
        for x in 0..mask.width() as i32 {
            out.push(if mask.get(GridPos::new(x, y)) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// A 3x3 block with its centre missing.
pub const DONUT: &str = "
    ###
    #.#
    ###
";

/// Two blocks touching only at a corner.
pub const DIAGONAL_PAIR: &str = "
    ##..
    ##..
    ..##
    ..##
";

/// A plus sign of arm length one.
pub const PLUS: &str = "
    .#.
    ###
    .#.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let mask = mask_from_ascii(PLUS);
        assert_eq!((mask.width(), mask.height()), (3, 3));
        assert_eq!(mask.count(), 5);
        assert_eq!(mask_to_ascii(&mask), ".#.\n###\n.#.\n");
    }

    #[test]
    fn first_row_is_y_zero() {
        let cells = cells_from_ascii("#.\n.#");
        assert_eq!(cells, vec![GridPos::new(0, 0), GridPos::new(1, 1)]);
    }

    #[test]
    fn blank_picture_is_empty() {
        let mask = mask_from_ascii("\n\n");
        assert_eq!(mask.count(), 0);
        assert_eq!(mask.height(), 0);
    }
}
