//! Shape - the falling tetromino.
//!
//! A shape owns a square bounding box of cells (side 2-4 depending on kind)
//! with exactly 4 cells tagged as part of the piece. The box matrix is indexed
//! `[x][y]` and backed by a fixed 4x4 array, so no rotation or shift ever
//! allocates. The shape also owns an anchor: the absolute field coordinate of
//! the box's top-left corner.
//!
//! Every mutation ends with the same re-projection step, which stamps
//! `anchor + local offset` onto each piece cell. That is the single invariant
//! keeping local orientation and absolute field position consistent.
//!
//! None of the operations check bounds or collisions. Producing an off-field
//! or overlapping shape is legal here; rejecting such placements is the
//! decision layer's job.

use arrayvec::ArrayVec;

use blockbattle_types::{CellType, PieceKind};

use crate::cell::Cell;

/// Largest bounding-box side (the I piece).
pub const MAX_BOX_SIZE: usize = 4;

/// Bounding-box side length and canonical block offsets, one row per kind.
/// Offsets are local `(col, row)` pairs in the unrotated orientation.
const SHAPE_TABLE: [(PieceKind, usize, [(usize, usize); 4]); 7] = [
    (PieceKind::I, 4, [(0, 1), (1, 1), (2, 1), (3, 1)]),
    (PieceKind::J, 3, [(0, 0), (0, 1), (1, 1), (2, 1)]),
    (PieceKind::L, 3, [(2, 0), (0, 1), (1, 1), (2, 1)]),
    (PieceKind::O, 2, [(0, 0), (1, 0), (0, 1), (1, 1)]),
    (PieceKind::S, 3, [(1, 0), (2, 0), (0, 1), (1, 1)]),
    (PieceKind::T, 3, [(1, 0), (0, 1), (1, 1), (2, 1)]),
    (PieceKind::Z, 3, [(0, 0), (1, 0), (1, 1), (2, 1)]),
];

/// Box size and canonical block offsets for a piece kind.
pub fn shape_spec(kind: PieceKind) -> (usize, [(usize, usize); 4]) {
    let (_, size, offsets) = SHAPE_TABLE
        .iter()
        .find(|(k, _, _)| *k == kind)
        .copied()
        .expect("every piece kind has a table row");
    (size, offsets)
}

/// The falling piece: bounding box matrix plus absolute anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: PieceKind,
    size: usize,
    /// Bounding box, indexed `[x][y]`. Slots beyond `size` stay untouched.
    matrix: [[Cell; MAX_BOX_SIZE]; MAX_BOX_SIZE],
    /// Absolute field coordinate of the box's top-left corner.
    location: (i32, i32),
}

impl Shape {
    /// Build a shape of the given kind anchored at `location`.
    ///
    /// The 4 cells at the kind's canonical offsets are tagged as piece cells
    /// and projected to absolute coordinates. No legality check is performed
    /// against any field.
    pub fn new(kind: PieceKind, location: (i32, i32)) -> Self {
        let (size, offsets) = shape_spec(kind);

        let mut matrix = [[Cell::new(0, 0, CellType::Empty); MAX_BOX_SIZE]; MAX_BOX_SIZE];
        for y in 0..size {
            for x in 0..size {
                matrix[x][y] = Cell::new(x as i32, y as i32, CellType::Empty);
            }
        }
        for (col, row) in offsets {
            matrix[col][row].set_shape();
        }

        let mut shape = Self {
            kind,
            size,
            matrix,
            location,
        };
        shape.project_blocks();
        shape
    }

    /// Rotate the box 90 degrees counter-clockwise, in place.
    pub fn turn_left(&mut self) {
        let temp = self.transposed();
        for y in 0..self.size {
            for x in 0..self.size {
                self.matrix[x][y] = temp[x][self.size - y - 1];
            }
        }
        self.project_blocks();
    }

    /// Rotate the box 90 degrees clockwise, in place.
    pub fn turn_right(&mut self) {
        let temp = self.transposed();
        for x in 0..self.size {
            self.matrix[x] = temp[self.size - x - 1];
        }
        self.project_blocks();
    }

    /// Shift the anchor one row down.
    pub fn one_down(&mut self) {
        self.location.1 += 1;
        self.project_blocks();
    }

    /// Shift the anchor one column left.
    pub fn one_left(&mut self) {
        self.location.0 -= 1;
        self.project_blocks();
    }

    /// Shift the anchor one column right.
    pub fn one_right(&mut self) {
        self.location.0 += 1;
        self.project_blocks();
    }

    /// Transposed copy of the box matrix (row/col indices swapped).
    fn transposed(&self) -> [[Cell; MAX_BOX_SIZE]; MAX_BOX_SIZE] {
        let mut temp = self.matrix;
        for y in 0..self.size {
            for x in 0..self.size {
                temp[y][x] = self.matrix[x][y];
            }
        }
        temp
    }

    /// Re-establish the position invariant: every piece cell's absolute
    /// position is `anchor + local offset`. Called at the end of every
    /// mutating operation.
    fn project_blocks(&mut self) {
        for y in 0..self.size {
            for x in 0..self.size {
                if self.matrix[x][y].is_shape() {
                    self.matrix[x][y]
                        .set_position(self.location.0 + x as i32, self.location.1 + y as i32);
                }
            }
        }
    }

    /// The 4 piece cells at their current absolute positions.
    pub fn blocks(&self) -> ArrayVec<Cell, 4> {
        let mut blocks = ArrayVec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                if self.matrix[x][y].is_shape() {
                    blocks.push(self.matrix[x][y]);
                }
            }
        }
        blocks
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Bounding-box side length (2, 3 or 4).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Absolute anchor of the box's top-left corner.
    pub fn location(&self) -> (i32, i32) {
        self.location
    }

    /// Move the anchor to an absolute position.
    pub fn set_location(&mut self, x: i32, y: i32) {
        self.location = (x, y);
        self.project_blocks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(shape: &Shape) -> Vec<(i32, i32)> {
        let mut p: Vec<_> = shape.blocks().iter().map(|c| c.position()).collect();
        p.sort();
        p
    }

    #[test]
    fn test_table_box_sizes() {
        assert_eq!(shape_spec(PieceKind::I).0, 4);
        assert_eq!(shape_spec(PieceKind::O).0, 2);
        for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
            assert_eq!(shape_spec(kind).0, 3);
        }
    }

    #[test]
    fn test_o_piece_initial_blocks() {
        let shape = Shape::new(PieceKind::O, (4, 0));
        assert_eq!(positions(&shape), vec![(4, 0), (4, 1), (5, 0), (5, 1)]);
    }

    #[test]
    fn test_t_piece_initial_blocks() {
        let shape = Shape::new(PieceKind::T, (0, 0));
        assert_eq!(positions(&shape), vec![(0, 1), (1, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_shift_right_moves_all_blocks() {
        let mut shape = Shape::new(PieceKind::O, (4, 0));
        shape.one_right();
        assert_eq!(positions(&shape), vec![(5, 0), (5, 1), (6, 0), (6, 1)]);
    }

    #[test]
    fn test_set_location_reprojects() {
        let mut shape = Shape::new(PieceKind::O, (0, 0));
        shape.set_location(3, 5);
        assert_eq!(positions(&shape), vec![(3, 5), (3, 6), (4, 5), (4, 6)]);
    }

    #[test]
    fn test_turn_right_t_piece() {
        // T spawns pointing up; one clockwise turn points it right.
        let mut shape = Shape::new(PieceKind::T, (0, 0));
        shape.turn_right();
        assert_eq!(positions(&shape), vec![(1, 0), (1, 1), (1, 2), (2, 1)]);
    }
}
