use itertools::Itertools;

use crate::grid::{CellState, Grid};

pub const ALIVE_GLYPH: char = '■';
pub const DEAD_GLYPH: char = '□';

/// One printable frame: `height` lines of `width` glyphs, no trailing newline.
pub fn render(grid: &Grid) -> String {
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| glyph(grid.cell_at(x, y)))
                .collect::<String>()
        })
        .join("\n")
}

fn glyph(cell: CellState) -> char {
    match cell {
        CellState::Alive => ALIVE_GLYPH,
        CellState::Dead => DEAD_GLYPH,
    }
}
