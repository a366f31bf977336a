//! Core types shared across the bot.
//! This crate contains pure data types with no external dependencies.

/// Default round configuration as announced by the engine.
/// These only seed the state before the first `settings` lines arrive.
pub const DEFAULT_TIMEBANK_MS: u32 = 10_000;
pub const DEFAULT_TIME_PER_MOVE_MS: u32 = 500;
pub const DEFAULT_FIELD_WIDTH: u32 = 10;
pub const DEFAULT_FIELD_HEIGHT: u32 = 20;

/// Contents of a single field cell, in engine wire-code order.
///
/// The engine serializes each cell as one integer: 0 = empty, 1 = part of the
/// currently falling shape, 2 = a locked block, 3 = a solid garbage line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Empty,
    Shape,
    Block,
    Solid,
}

impl CellType {
    /// Decode an engine cell code. Returns `None` for codes the engine
    /// never emits.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellType::Empty),
            1 => Some(CellType::Shape),
            2 => Some(CellType::Block),
            3 => Some(CellType::Solid),
            _ => None,
        }
    }

    /// The wire code for this cell type.
    pub fn code(&self) -> u8 {
        match self {
            CellType::Empty => 0,
            CellType::Shape => 1,
            CellType::Block => 2,
            CellType::Solid => 3,
        }
    }
}

/// The seven tetromino piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in a fixed order (handy for exhaustive tests).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse the engine's single-letter piece symbol (case-insensitive).
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "I" => Some(PieceKind::I),
            "J" => Some(PieceKind::J),
            "L" => Some(PieceKind::L),
            "O" => Some(PieceKind::O),
            "S" => Some(PieceKind::S),
            "T" => Some(PieceKind::T),
            "Z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// The uppercase letter the engine uses for this kind.
    pub fn symbol(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Discrete piece commands the bot may emit.
///
/// A well-formed response is a comma-joined sequence of these, terminated by
/// exactly one `drop`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Down,
    Left,
    Right,
    TurnLeft,
    TurnRight,
    Drop,
}

impl MoveType {
    /// All move types, in emission-alphabet order.
    pub const ALL: [MoveType; 6] = [
        MoveType::Down,
        MoveType::Left,
        MoveType::Right,
        MoveType::TurnLeft,
        MoveType::TurnRight,
        MoveType::Drop,
    ];

    /// Parse a move word (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" => Some(MoveType::Down),
            "left" => Some(MoveType::Left),
            "right" => Some(MoveType::Right),
            "turnleft" => Some(MoveType::TurnLeft),
            "turnright" => Some(MoveType::TurnRight),
            "drop" => Some(MoveType::Drop),
            _ => None,
        }
    }

    /// The lowercase word the engine expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveType::Down => "down",
            MoveType::Left => "left",
            MoveType::Right => "right",
            MoveType::TurnLeft => "turnleft",
            MoveType::TurnRight => "turnright",
            MoveType::Drop => "drop",
        }
    }
}
