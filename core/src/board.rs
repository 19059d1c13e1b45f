use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::cell::{Cell, ColorTag};
use crate::shapes::Shape;
use crate::types::*;

/// The N×N occupancy grid for one session. Owned by the session and mutated
/// only through `place` and `commit_clear`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(size: Ix) -> Self {
        let size = size.max(1) as usize;
        Self {
            cells: Array2::default((size, size)),
        }
    }

    pub fn size(&self) -> Ix {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn cell_at(&self, coords: Ix2) -> Cell {
        self.cells[coords.convert()]
    }

    pub fn filled_count(&self) -> Ax {
        self.cells.iter().filter(|cell| cell.is_filled()).count() as Ax
    }

    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Whether every cell of `shape`, anchored at `origin`, lands in bounds
    /// on an empty cell. Pure; bails on the first violation.
    pub fn can_place(&self, shape: &Shape, origin: Ix2) -> bool {
        let n = self.cells.dim().0;
        let (row, col) = (origin.0 as usize, origin.1 as usize);
        shape.offsets().all(|(dr, dc)| {
            let r = row + dr as usize;
            let c = col + dc as usize;
            r < n && c < n && self.cells[[r, c]].is_empty()
        })
    }

    /// Writes every cell of `shape` at `origin`. Callers must gate on
    /// `can_place` first; the session layer relies on that to keep failed
    /// moves free of partial writes.
    pub fn place(&mut self, shape: &Shape, origin: Ix2, color: ColorTag) {
        debug_assert!(self.can_place(shape, origin));
        let (row, col) = (origin.0 as usize, origin.1 as usize);
        for (dr, dc) in shape.offsets() {
            self.cells[[row + dr as usize, col + dc as usize]] = Cell::Filled(color);
        }
    }

    /// Rows in which every cell is occupied.
    pub fn full_rows(&self) -> Vec<Ix> {
        let n = self.size();
        (0..n)
            .filter(|&row| (0..n).all(|col| self.cell_at((row, col)).is_filled()))
            .collect()
    }

    /// Columns in which every cell is occupied.
    pub fn full_cols(&self) -> Vec<Ix> {
        let n = self.size();
        (0..n)
            .filter(|&col| (0..n).all(|row| self.cell_at((row, col)).is_filled()))
            .collect()
    }

    /// First half of the split-phase clear: the union of all full-row and
    /// full-column cells, each listed once. A host wanting a highlight
    /// animation renders this set, then calls `commit_clear` with it.
    pub fn mark_for_clear(&self) -> CellSet {
        let n = self.size();
        let mut marked = CellSet::new();
        for row in self.full_rows() {
            for col in 0..n {
                marked.insert((row, col));
            }
        }
        for col in self.full_cols() {
            for row in 0..n {
                marked.insert((row, col));
            }
        }
        marked
    }

    /// Second half of the split-phase clear: empties every marked cell.
    pub fn commit_clear(&mut self, marked: &CellSet) {
        for &coords in marked {
            self.cells[coords.convert()] = Cell::Empty;
        }
    }

    /// Whether `shape` fits anywhere on the current board. Exhaustive origin
    /// scan, early exit on the first fit.
    pub fn has_room_for(&self, shape: &Shape) -> bool {
        let n = self.size();
        let (rows, cols) = shape.size();
        if rows > n || cols > n {
            return false;
        }
        for row in 0..=(n - rows) {
            for col in 0..=(n - cols) {
                if self.can_place(shape, (row, col)) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    const TAG: ColorTag = ColorTag(0);

    fn shape(kind: ShapeKind) -> Shape {
        Shape::new(kind)
    }

    fn fill(board: &mut Board, cells: &[Ix2]) {
        let single = shape(ShapeKind::Single);
        for &coords in cells {
            board.place(&single, coords, TAG);
        }
    }

    #[test]
    fn can_place_respects_bounds_and_occupancy() {
        let mut board = Board::new(8);
        let square = shape(ShapeKind::Square2x2);

        assert!(board.can_place(&square, (0, 0)));
        assert!(board.can_place(&square, (6, 6)));
        assert!(!board.can_place(&square, (7, 7)));
        assert!(!board.can_place(&square, (6, 7)));

        fill(&mut board, &[(1, 1)]);
        assert!(!board.can_place(&square, (0, 0)));
        assert!(board.can_place(&square, (2, 2)));
    }

    #[test]
    fn place_fills_exactly_the_shape_cells() {
        let mut board = Board::new(8);
        let ell = shape(ShapeKind::LargeL);

        board.place(&ell, (2, 3), TAG);

        assert_eq!(board.filled_count(), ell.cell_count());
        for coords in [(2, 3), (3, 3), (4, 3), (4, 4)] {
            assert!(board.cell_at(coords).is_filled());
        }
        assert!(board.cell_at((2, 4)).is_empty());
        assert!(board.cell_at((3, 4)).is_empty());
    }

    #[test]
    fn full_lines_are_detected() {
        let mut board = Board::new(5);
        fill(&mut board, &(0..5).map(|col| (2, col)).collect::<Vec<_>>());
        fill(
            &mut board,
            &(0..5).filter(|&row| row != 2).map(|row| (row, 4)).collect::<Vec<_>>(),
        );

        assert_eq!(board.full_rows(), vec![2]);
        assert_eq!(board.full_cols(), vec![4]);
    }

    #[test]
    fn mark_for_clear_deduplicates_intersections() {
        let mut board = Board::new(5);
        fill(&mut board, &(0..5).map(|col| (0, col)).collect::<Vec<_>>());
        fill(
            &mut board,
            &(1..5).map(|row| (row, 0)).collect::<Vec<_>>(),
        );

        let marked = board.mark_for_clear();
        // row 0 and column 0 share (0, 0)
        assert_eq!(marked.len(), 9);
        assert!(marked.contains(&(0, 0)));
    }

    #[test]
    fn commit_clear_empties_marked_cells_only() {
        let mut board = Board::new(5);
        fill(&mut board, &(0..5).map(|col| (1, col)).collect::<Vec<_>>());
        fill(&mut board, &[(3, 3)]);

        let marked = board.mark_for_clear();
        board.commit_clear(&marked);

        assert_eq!(board.full_rows(), Vec::<Ix>::new());
        assert_eq!(board.filled_count(), 1);
        assert!(board.cell_at((3, 3)).is_filled());
    }

    #[test]
    fn has_room_for_scans_all_origins() {
        let mut board = Board::new(4);
        let everything: Vec<Ix2> = (0..4)
            .flat_map(|row| (0..4).map(move |col| (row, col)))
            .filter(|&coords| coords != (3, 3))
            .collect();
        fill(&mut board, &everything);

        assert!(board.has_room_for(&shape(ShapeKind::Single)));
        assert!(!board.has_room_for(&shape(ShapeKind::HPair)));
        assert!(!board.has_room_for(&shape(ShapeKind::Square2x2)));
    }

    #[test]
    fn oversized_shapes_never_fit() {
        let board = Board::new(3);
        assert!(!board.has_room_for(&shape(ShapeKind::VLine4)));
        assert!(!board.has_room_for(&shape(ShapeKind::HLine4)));
        assert!(board.has_room_for(&shape(ShapeKind::Tee)));
    }
}
