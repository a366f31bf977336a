//! Field - one player's playing grid.
//!
//! Built once per engine update from the serialized cell listing. Uses a flat
//! row-major array; coordinates are (x, y) with x running left to right and y
//! top to bottom. Out-of-bounds lookups return `None` rather than panicking.

use thiserror::Error;

use blockbattle_types::CellType;

use crate::cell::Cell;

/// Errors from parsing the engine's serialized field payload.
///
/// The payload is unusable as a whole if any token is bad, so parsing fails
/// fast without partial recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldParseError {
    #[error("cell token {index} is not an integer: {token:?}")]
    BadToken { index: usize, token: String },
    #[error("cell token {index} has unknown cell code {code}")]
    UnknownCode { index: usize, code: u8 },
    #[error("expected {expected} cells ({width}x{height}), got {actual}")]
    WrongCellCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// One player's field: a fixed `width` x `height` grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: u32,
    height: u32,
    /// Flat row-major storage (y * width + x).
    cells: Vec<Cell>,
}

impl Field {
    /// Parse the engine's serialized field payload.
    ///
    /// The payload is a flat list of integer cell codes, row-major with x
    /// varying fastest. `,` and `;` both separate cells; the engine does not
    /// guarantee `;` lands on row boundaries, so neither delimiter carries
    /// row semantics here.
    pub fn parse(width: u32, height: u32, payload: &str) -> Result<Self, FieldParseError> {
        let expected = (width as usize) * (height as usize);
        let mut cells = Vec::with_capacity(expected);

        let mut x: i32 = 0;
        let mut y: i32 = 0;
        for (index, token) in payload
            .split(|c| c == ',' || c == ';')
            .map(str::trim)
            .enumerate()
        {
            if index >= expected {
                // Count the rest so the error reports the actual total.
                let actual = index + 1 + payload
                    .split(|c| c == ',' || c == ';')
                    .skip(index + 1)
                    .count();
                return Err(FieldParseError::WrongCellCount {
                    width,
                    height,
                    expected,
                    actual,
                });
            }

            let code: u8 = token
                .parse()
                .map_err(|_| FieldParseError::BadToken {
                    index,
                    token: token.to_string(),
                })?;
            let kind = CellType::from_code(code)
                .ok_or(FieldParseError::UnknownCode { index, code })?;

            cells.push(Cell::new(x, y, kind));
            x += 1;
            if x == width as i32 {
                x = 0;
                y += 1;
            }
        }

        if cells.len() != expected {
            return Err(FieldParseError::WrongCellCount {
                width,
                height,
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Calculate flat index from (x, y) coordinates.
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Cell at (x, y), or `None` for any out-of-range coordinate.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
