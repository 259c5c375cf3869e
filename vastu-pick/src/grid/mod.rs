//! Immutable warehouse cell grid.
//!
//! Cells are stored row-major in a flat vector. The grid never changes shape
//! or content after construction; every planning structure borrows it.
//!
//! ## Construction
//!
//! - [`Grid::from_codes`]: Validated decode of a description matrix
//! - [`Grid::from_ascii`]: Compact text form for fixtures (`.` floor, `#` obstacle, `S` shelf)
//! - [`Grid::filled`]: Uniform grid

use crate::core::{CellKind, GridCoord};
use crate::error::{Result, ValidationError};

/// Cell counts by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// Navigable cells.
    pub navigable: usize,
    /// Obstacle cells.
    pub obstacle: usize,
    /// Shelf cells.
    pub shelf: usize,
}

impl CellCounts {
    /// Total cells.
    pub fn total(&self) -> usize {
        self.navigable + self.obstacle + self.shelf
    }
}

/// Rectangular `rows × cols` matrix of [`CellKind`].
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Grid where every cell has the same kind.
    pub fn filled(rows: usize, cols: usize, kind: CellKind) -> Self {
        Self {
            rows,
            cols,
            cells: vec![kind; rows * cols],
        }
    }

    /// Decode a row-major matrix of description codes.
    ///
    /// Fails if the matrix shape differs from the declared dimensions or a
    /// code is not 0, 1 or 2.
    pub fn from_codes(rows: usize, cols: usize, matrix: &[Vec<i64>]) -> Result<Self> {
        if matrix.len() != rows {
            return Err(ValidationError::RowCountMismatch {
                declared: rows,
                actual: matrix.len(),
            }
            .into());
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (r, row) in matrix.iter().enumerate() {
            if row.len() != cols {
                return Err(ValidationError::RowLengthMismatch {
                    row: r,
                    declared: cols,
                    actual: row.len(),
                }
                .into());
            }
            for (c, &code) in row.iter().enumerate() {
                let kind = CellKind::from_code(code).ok_or(ValidationError::UnknownCellCode {
                    coord: GridCoord::new(r as i32, c as i32),
                    code,
                })?;
                cells.push(kind);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from text rows: `.` navigable, `#` obstacle, `S` shelf.
    ///
    /// All rows must have the same width. Unknown characters are rejected.
    pub fn from_ascii(lines: &[&str]) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.chars().count()).unwrap_or(0);

        let matrix: Vec<Vec<i64>> = lines
            .iter()
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        '.' => 0,
                        '#' => 1,
                        'S' => 2,
                        _ => -1,
                    })
                    .collect()
            })
            .collect();

        Self::from_codes(rows, cols, &matrix)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if a coordinate lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// Flat index of an in-bounds coordinate.
    #[inline]
    pub fn index(&self, coord: GridCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row as usize * self.cols + coord.col as usize)
    }

    /// Coordinate of a flat index.
    #[inline]
    pub fn coord_of(&self, index: usize) -> GridCoord {
        GridCoord::new((index / self.cols) as i32, (index % self.cols) as i32)
    }

    /// Cell kind, or `None` outside the grid.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<CellKind> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Cell kind at an in-bounds coordinate.
    ///
    /// # Panics
    /// Panics if `coord` lies outside the grid.
    #[inline]
    pub fn cell_kind(&self, coord: GridCoord) -> CellKind {
        match self.get(coord) {
            Some(kind) => kind,
            None => panic!(
                "cell {} outside {}x{} grid",
                coord, self.rows, self.cols
            ),
        }
    }

    /// Bounds-checked lookup reported as a validation error.
    pub fn checked_kind(&self, coord: GridCoord) -> Result<CellKind> {
        self.get(coord).ok_or_else(|| {
            ValidationError::OutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            }
            .into()
        })
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellKind)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &kind)| (self.coord_of(idx), kind))
    }

    /// Count cells by kind.
    pub fn count_by_kind(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &kind in &self.cells {
            match kind {
                CellKind::Navigable => counts.navigable += 1,
                CellKind::Obstacle => counts.obstacle += 1,
                CellKind::Shelf => counts.shelf += 1,
            }
        }
        counts
    }

    /// Row-major matrix of description codes.
    pub fn to_codes(&self) -> Vec<Vec<i64>> {
        (0..self.rows)
            .map(|r| {
                self.cells[r * self.cols..(r + 1) * self.cols]
                    .iter()
                    .map(|k| k.code() as i64)
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickError;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::filled(4, 6, CellKind::Navigable);
        assert_eq!(grid.dimensions(), (4, 6));
        assert_eq!(grid.cell_count(), 24);
        assert_eq!(grid.count_by_kind().navigable, 24);
    }

    #[test]
    fn test_from_ascii() {
        let grid = Grid::from_ascii(&["..#", ".S."]).unwrap();
        assert_eq!(grid.cell_kind(GridCoord::new(0, 2)), CellKind::Obstacle);
        assert_eq!(grid.cell_kind(GridCoord::new(1, 1)), CellKind::Shelf);

        let counts = grid.count_by_kind();
        assert_eq!(counts.navigable, 4);
        assert_eq!(counts.obstacle, 1);
        assert_eq!(counts.shelf, 1);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_from_ascii_rejects_unknown_characters() {
        for bad in ["\u{0}", "\u{1}", "\u{2}", "x", "2"] {
            let row = format!(".{bad}.");
            let err = Grid::from_ascii(&[row.as_str()]).unwrap_err();
            assert!(matches!(
                err,
                PickError::Validation(ValidationError::UnknownCellCode { code: -1, .. })
            ));
        }
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Grid::from_codes(3, 2, &[vec![0, 0], vec![0, 0]]).unwrap_err();
        assert!(matches!(
            err,
            PickError::Validation(ValidationError::RowCountMismatch {
                declared: 3,
                actual: 2
            })
        ));

        let err = Grid::from_codes(2, 2, &[vec![0, 0], vec![0]]).unwrap_err();
        assert!(matches!(
            err,
            PickError::Validation(ValidationError::RowLengthMismatch { row: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_cell_code() {
        let err = Grid::from_codes(1, 3, &[vec![0, 7, 0]]).unwrap_err();
        match err {
            PickError::Validation(ValidationError::UnknownCellCode { coord, code }) => {
                assert_eq!(coord, GridCoord::new(0, 1));
                assert_eq!(code, 7);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_bounds() {
        let grid = Grid::filled(2, 3, CellKind::Navigable);
        assert!(grid.contains(GridCoord::new(1, 2)));
        assert!(!grid.contains(GridCoord::new(2, 0)));
        assert!(!grid.contains(GridCoord::new(0, -1)));
        assert_eq!(grid.get(GridCoord::new(5, 5)), None);
        assert!(grid.checked_kind(GridCoord::new(-1, 0)).is_err());
    }

    #[test]
    #[should_panic]
    fn test_cell_kind_out_of_range_panics() {
        let grid = Grid::filled(2, 2, CellKind::Navigable);
        grid.cell_kind(GridCoord::new(2, 0));
    }

    #[test]
    fn test_codes_roundtrip() {
        let codes = vec![vec![0, 1, 2], vec![2, 1, 0]];
        let grid = Grid::from_codes(2, 3, &codes).unwrap();
        assert_eq!(grid.to_codes(), codes);
    }

    #[test]
    fn test_iter_is_row_major() {
        let grid = Grid::filled(2, 2, CellKind::Navigable);
        let coords: Vec<GridCoord> = grid.iter().map(|(c, _)| c).collect();
        assert_eq!(
            coords,
            vec![
                GridCoord::new(0, 0),
                GridCoord::new(0, 1),
                GridCoord::new(1, 0),
                GridCoord::new(1, 1),
            ]
        );
    }
}
