use itertools::Itertools;
use rand::Rng;
use thiserror::Error;

/// Width of the permanently dead frame around the playable area.
/// It lets neighbor lookups use flat-index offsets without bounds checks.
pub const MARGIN: usize = 1;

/// Cells drawn from a uniform [0,1) distribution above this value start alive,
/// so the default alive probability is 0.4.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("got {actual} cells for a {width}x{height} grid, expected {expected}")]
    CellCountMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// One generation of the game. Never mutated after construction; stepping
/// builds a fresh grid instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    stride: usize,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new_empty(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        let stride = width + MARGIN * 2;
        let cells = vec![CellState::Dead; stride * (height + MARGIN * 2)];

        Ok(Self {
            width,
            height,
            stride,
            cells,
        })
    }

    pub fn from_cells(
        interior: &[CellState],
        width: usize,
        height: usize,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new_empty(width, height)?;

        if interior.len() != width * height {
            return Err(GridError::CellCountMismatch {
                width,
                height,
                expected: width * height,
                actual: interior.len(),
            });
        }

        let indices = grid.interior_indices().collect_vec();
        for (interior_index, cell) in indices.into_iter().zip(interior) {
            grid.cells[interior_index] = *cell;
        }

        Ok(grid)
    }

    pub fn from_bitstring(text: &str, width: usize, height: usize) -> Result<Self, GridError> {
        let interior = text
            .bytes()
            .map(|byte| {
                if byte == b'1' {
                    CellState::Alive
                } else {
                    CellState::Dead
                }
            })
            .collect_vec();

        Self::from_cells(&interior, width, height)
    }

    pub fn random<R>(
        rng: &mut R,
        width: usize,
        height: usize,
        threshold: f64,
    ) -> Result<Self, GridError>
    where
        R: Rng,
    {
        let interior = (0..width * height)
            .map(|_| {
                if rng.random::<f64>() > threshold {
                    CellState::Alive
                } else {
                    CellState::Dead
                }
            })
            .collect_vec();

        Self::from_cells(&interior, width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn cell(&self, index: usize) -> CellState {
        self.cells[index]
    }

    /// Flat index of the interior cell at logical coordinates.
    pub fn interior_index(&self, x: usize, y: usize) -> usize {
        self.stride * (y + MARGIN) + (x + MARGIN)
    }

    pub fn cell_at(&self, x: usize, y: usize) -> CellState {
        self.cells[self.interior_index(x, y)]
    }

    /// Flat indices of every interior cell in row-major order.
    pub fn interior_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.height)
            .cartesian_product(0..self.width)
            .map(|(y, x)| self.interior_index(x, y))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    #[test]
    fn new_empty_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new_empty(0, 5),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            Grid::new_empty(5, 0),
            Err(GridError::InvalidDimensions {
                width: 5,
                height: 0
            })
        );
    }

    #[test]
    fn new_empty_is_all_dead_with_margin() {
        let grid = Grid::new_empty(4, 3).unwrap();

        assert_eq!(grid.stride(), 6);
        assert_eq!(grid.interior_indices().count(), 12);
        assert!((0..grid.stride() * 5).all(|index| grid.cell(index) == CellState::Dead));
    }

    #[test]
    fn interior_index_follows_stride_layout() {
        let grid = Grid::new_empty(4, 3).unwrap();

        assert_eq!(grid.interior_index(0, 0), grid.stride() + 1);
        assert_eq!(grid.interior_index(3, 2), grid.stride() * 3 + 4);
    }

    #[test]
    fn interior_indices_are_row_major() {
        let grid = Grid::new_empty(2, 2).unwrap();
        let indices = grid.interior_indices().collect_vec();

        assert_eq!(
            indices,
            vec![
                grid.interior_index(0, 0),
                grid.interior_index(1, 0),
                grid.interior_index(0, 1),
                grid.interior_index(1, 1),
            ]
        );
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        let interior = vec![CellState::Dead; 5];

        assert_eq!(
            Grid::from_cells(&interior, 2, 3),
            Err(GridError::CellCountMismatch {
                width: 2,
                height: 3,
                expected: 6,
                actual: 5,
            })
        );
    }

    #[test]
    fn from_bitstring_parses_each_character() {
        let grid = Grid::from_bitstring("010101", 3, 2).unwrap();

        assert_eq!(grid.cell_at(0, 0), CellState::Dead);
        assert_eq!(grid.cell_at(1, 0), CellState::Alive);
        assert_eq!(grid.cell_at(2, 0), CellState::Dead);
        assert_eq!(grid.cell_at(0, 1), CellState::Alive);
        assert_eq!(grid.cell_at(1, 1), CellState::Dead);
        assert_eq!(grid.cell_at(2, 1), CellState::Alive);
    }

    #[test]
    fn from_bitstring_rejects_wrong_length() {
        assert_eq!(
            Grid::from_bitstring("0101", 3, 2),
            Err(GridError::CellCountMismatch {
                width: 3,
                height: 2,
                expected: 6,
                actual: 4,
            })
        );
    }

    #[test]
    fn random_threshold_extremes() {
        let mut rng = SmallRng::seed_from_u64(7);

        let all_dead = Grid::random(&mut rng, 8, 8, 2.0).unwrap();
        assert!(all_dead.interior_indices().all(|index| !all_dead.cell(index).is_alive()));

        let all_alive = Grid::random(&mut rng, 8, 8, -1.0).unwrap();
        assert!(all_alive.interior_indices().all(|index| all_alive.cell(index).is_alive()));
    }

    #[test]
    fn random_is_deterministic_under_a_seed() {
        let mut first_rng = SmallRng::seed_from_u64(42);
        let mut second_rng = SmallRng::seed_from_u64(42);

        let first = Grid::random(&mut first_rng, 10, 10, DEFAULT_THRESHOLD).unwrap();
        let second = Grid::random(&mut second_rng, 10, 10, DEFAULT_THRESHOLD).unwrap();

        assert_eq!(first, second);
    }
}
