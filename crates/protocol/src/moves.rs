//! Moves module - the command sequence sent back to the engine.

use std::fmt;

use blockbattle_types::MoveType;

/// Ordered sequence of piece commands for one `action moves` response.
///
/// Serialized by joining the move words with `,`; a well-formed response ends
/// with exactly one `drop`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<MoveType>,
}

impl MoveList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: MoveType) {
        self.moves.push(mv);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Whether this list terminates correctly: a single trailing `drop` and
    /// no `drop` anywhere else.
    pub fn ends_with_drop(&self) -> bool {
        self.moves.last() == Some(&MoveType::Drop)
            && self.moves.iter().filter(|m| **m == MoveType::Drop).count() == 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveType> {
        self.moves.iter()
    }
}

impl From<Vec<MoveType>> for MoveList {
    fn from(moves: Vec<MoveType>) -> Self {
        Self { moves }
    }
}

impl fmt::Display for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(mv.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_commas() {
        let moves = MoveList::from(vec![
            MoveType::Left,
            MoveType::TurnRight,
            MoveType::Down,
            MoveType::Drop,
        ]);
        assert_eq!(moves.to_string(), "left,turnright,down,drop");
    }

    #[test]
    fn test_single_drop() {
        let moves = MoveList::from(vec![MoveType::Drop]);
        assert_eq!(moves.to_string(), "drop");
        assert!(moves.ends_with_drop());
    }

    #[test]
    fn test_ends_with_drop_rejects_bad_sequences() {
        assert!(!MoveList::new().ends_with_drop());
        assert!(!MoveList::from(vec![MoveType::Left]).ends_with_drop());
        assert!(
            !MoveList::from(vec![MoveType::Drop, MoveType::Left]).ends_with_drop()
        );
        assert!(
            !MoveList::from(vec![MoveType::Drop, MoveType::Drop]).ends_with_drop()
        );
    }
}
