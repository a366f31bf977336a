//! Bot module - the strategy seam.
//!
//! [`Bot`] is the one trait a real decision engine implements: given the
//! accumulated [`BotState`], produce the move sequence for the current piece.
//! [`RandomBot`] is the placeholder that ships with the starter - it draws
//! uniformly random moves until it draws `drop`. Replace it.

use blockbattle_core::SimpleRng;
use blockbattle_types::MoveType;

use crate::moves::MoveList;
use crate::state::BotState;

/// Strategy interface: turn the current game state into a move sequence.
pub trait Bot {
    fn choose_moves(&mut self, state: &BotState) -> MoveList;
}

/// The starter strategy: uniform-random commands, terminated by the first
/// randomly drawn `drop`. Deterministic per seed.
#[derive(Debug, Clone)]
pub struct RandomBot {
    rng: SimpleRng,
}

impl RandomBot {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Bot for RandomBot {
    fn choose_moves(&mut self, _state: &BotState) -> MoveList {
        let mut moves = MoveList::new();
        loop {
            let idx = self.rng.next_range(MoveType::ALL.len() as u32) as usize;
            let mv = MoveType::ALL[idx];
            moves.push(mv);
            if mv == MoveType::Drop {
                return moves;
            }
        }
    }
}
