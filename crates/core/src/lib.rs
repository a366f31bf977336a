//! Core board/piece model - pure, deterministic, and testable
//!
//! This crate holds the geometry substrate a decision engine sits on top of.
//! It has **zero dependencies** on I/O or the engine protocol, making it:
//!
//! - **Deterministic**: no hidden state, every mutation is explicit
//! - **Testable**: the rotation/translation invariants are unit tested
//! - **Fast**: shape mutations are fixed-size loops over a 4x4 box
//!
//! # Module Structure
//!
//! - [`cell`]: a single field cell (position + contents)
//! - [`field`]: one player's grid, parsed from the engine's serialized payload
//! - [`shape`]: the falling tetromino - bounding box, rotation, translation
//! - [`rng`]: tiny LCG for the random starter strategy
//!
//! # What this crate does *not* do
//!
//! Move legality, line clears, scoring and opponent modeling are decision-layer
//! concerns. Shape mutations never fail and never consult a field; a rotation
//! may happily push the piece off the board. Callers that care must check.
//!
//! # Example
//!
//! ```
//! use blockbattle_core::{Field, Shape};
//! use blockbattle_types::PieceKind;
//!
//! let field = Field::parse(2, 2, "0,0,0,0").unwrap();
//! assert!(field.cell_at(2, 0).is_none());
//!
//! let mut shape = Shape::new(PieceKind::O, (4, 0));
//! shape.one_right();
//! assert_eq!(shape.location(), (5, 0));
//! assert_eq!(shape.blocks().len(), 4);
//! ```

pub mod cell;
pub mod field;
pub mod rng;
pub mod shape;

pub use blockbattle_types as types;

// Re-export commonly used types for convenience
pub use cell::Cell;
pub use field::{Field, FieldParseError};
pub use rng::SimpleRng;
pub use shape::{shape_spec, Shape, MAX_BOX_SIZE};
