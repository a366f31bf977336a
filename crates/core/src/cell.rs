//! Cell - the smallest unit of the playing field.
//!
//! A cell knows its current absolute position and its contents. Cells inside a
//! shape's bounding box carry *local* box coordinates until the shape projects
//! them onto the field's coordinate space.

use blockbattle_types::CellType;

/// A single cell: position plus contents. Plain value, freely copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    x: i32,
    y: i32,
    kind: CellType,
}

impl Cell {
    pub fn new(x: i32, y: i32, kind: CellType) -> Self {
        Self { x, y, kind }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Current absolute (or local, for unprojected shape cells) position.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn kind(&self) -> CellType {
        self.kind
    }

    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Tag this cell as part of the falling shape.
    pub fn set_shape(&mut self) {
        self.kind = CellType::Shape;
    }

    pub fn is_shape(&self) -> bool {
        self.kind == CellType::Shape
    }

    pub fn is_empty(&self) -> bool {
        self.kind == CellType::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_mutation() {
        let mut cell = Cell::new(0, 0, CellType::Empty);
        assert!(cell.is_empty());
        assert!(!cell.is_shape());

        cell.set_shape();
        assert!(cell.is_shape());
        assert_eq!(cell.kind(), CellType::Shape);

        cell.set_position(4, 7);
        assert_eq!(cell.position(), (4, 7));
    }
}
