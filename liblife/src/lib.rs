use grid::{CellState, Grid};
use itertools::Itertools;

pub mod grid;
pub mod render;

/// Driver-side owner of the current generation. Ticking replaces the grid
/// with its successor; previous generations are simply dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    pub grid: Grid,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn tick(&mut self) {
        self.grid = next_generation(&self.grid);
    }
}

/// Computes the next generation from a consistent snapshot of the previous
/// one. Reads only `previous`, so neighbor visit order never matters.
pub fn next_generation(previous: &Grid) -> Grid {
    let interior = previous
        .interior_indices()
        .map(|index| next_cell_state(previous, index))
        .collect_vec();

    // Interior iteration yields exactly width * height cells in row-major
    // order, so rebuilding through from_cells cannot fail.
    Grid::from_cells(&interior, previous.width(), previous.height()).unwrap()
}

fn next_cell_state(previous: &Grid, index: usize) -> CellState {
    let stride = previous.stride();

    // Moore neighborhood by flat offsets. The margin frame keeps every
    // offset in-bounds and contributes Dead at the edges.
    let alive_neighbors = [
        index - stride - 1,
        index - stride,
        index - stride + 1,
        index - 1,
        index + 1,
        index + stride - 1,
        index + stride,
        index + stride + 1,
    ]
    .into_iter()
    .filter(|&neighbor| previous.cell(neighbor).is_alive())
    .count();

    match previous.cell(index) {
        CellState::Dead if alive_neighbors == 3 => CellState::Alive,
        CellState::Alive if alive_neighbors <= 1 || alive_neighbors >= 4 => CellState::Dead,
        unchanged => unchanged,
    }
}
