use crate::color::CellColor;
use crate::error::GridError;

/// Position of a bead: `column` runs left to right, `row` top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub column: usize,
    pub row: usize,
}

impl CellPos {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Square grid of bead colors; the system of record for the drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    size: usize,
    // Row-major: index = row * size + column
    cells: Vec<CellColor>,
}

impl GridModel {
    /// Creates a `size` x `size` grid with every bead empty.
    ///
    /// # Panics
    /// If `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self {
        let count = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("a {size}x{size} grid has more cells than fit in memory"));
        Self {
            size,
            cells: vec![CellColor::Empty; count],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.column < self.size && pos.row < self.size
    }

    pub fn get(&self, pos: CellPos) -> Result<CellColor, GridError> {
        let index = self.index_of(pos)?;
        Ok(self.cells[index])
    }

    pub fn set(&mut self, pos: CellPos, color: CellColor) -> Result<(), GridError> {
        let index = self.index_of(pos)?;
        self.cells[index] = color;
        Ok(())
    }

    /// Iterates over every bead in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellPos, CellColor)> + '_ {
        self.cells.iter().enumerate().map(move |(index, color)| {
            (CellPos::new(index % self.size, index / self.size), *color)
        })
    }

    /// Number of beads that are not empty
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|color| !color.is_empty()).count()
    }

    fn index_of(&self, pos: CellPos) -> Result<usize, GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                column: pos.column,
                row: pos.row,
                size: self.size,
            });
        }
        Ok(pos.row * self.size + pos.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = GridModel::new(25);
        assert_eq!(grid.size(), 25);
        assert_eq!(grid.cells().count(), 625);
        assert!(grid.cells().all(|(_, color)| color == CellColor::Empty));
        assert_eq!(grid.painted_count(), 0);
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = GridModel::new(4);
        let red = CellColor::Painted(Rgb::new(255, 0, 0));
        grid.set(CellPos::new(3, 1), red).unwrap();

        assert_eq!(grid.get(CellPos::new(3, 1)), Ok(red));
        assert_eq!(grid.get(CellPos::new(1, 3)), Ok(CellColor::Empty));
        assert_eq!(grid.painted_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = GridModel::new(4);
        let expected = GridError::OutOfBounds {
            column: 4,
            row: 0,
            size: 4,
        };

        assert_eq!(grid.get(CellPos::new(4, 0)), Err(expected.clone()));
        assert_eq!(grid.set(CellPos::new(4, 0), CellColor::Empty), Err(expected));
        assert!(grid.get(CellPos::new(0, 17)).is_err());
        assert!(!grid.contains(CellPos::new(0, 4)));
    }

    #[test]
    #[should_panic(expected = "more cells than fit in memory")]
    fn test_overflowing_size_panics() {
        GridModel::new(usize::MAX);
    }

    #[test]
    fn test_cells_are_row_major() {
        let grid = GridModel::new(3);
        let positions: Vec<CellPos> = grid.cells().map(|(pos, _)| pos).take(4).collect();
        assert_eq!(
            positions,
            vec![
                CellPos::new(0, 0),
                CellPos::new(1, 0),
                CellPos::new(2, 0),
                CellPos::new(0, 1),
            ]
        );
    }
}
