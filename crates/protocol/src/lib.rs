//! Engine protocol - line-based text protocol between bot and game engine
//!
//! The engine launches the bot as a child process and talks to it over
//! stdin/stdout, one message per line.
//!
//! # Protocol Overview
//!
//! 1. **Settings**: before the match, the engine announces the round
//!    configuration (`settings <key> <value>`)
//! 2. **Updates**: each round, the engine pushes the game state
//!    (`update game <key> <value>` and `update <player> <key> <value>`)
//! 3. **Action request**: `action moves <remaining_timebank_ms>` asks the bot
//!    for a command sequence for the current piece
//! 4. **Response**: the bot writes one line of comma-joined moves, terminated
//!    by `drop`
//!
//! # Example Protocol Flow
//!
//! ```text
//! Engine -> Bot: settings player_names player1,player2
//! Engine -> Bot: settings your_bot player1
//! Engine -> Bot: settings field_width 10
//! Engine -> Bot: settings field_height 20
//! Engine -> Bot: update game round 1
//! Engine -> Bot: update game this_piece_type S
//! Engine -> Bot: update game this_piece_position 3,-1
//! Engine -> Bot: update player1 field 0,0,0,...
//! Engine -> Bot: action moves 10000
//! Bot -> Engine: left,turnright,down,drop
//! ```
//!
//! # Modules
//!
//! - [`message`]: parses one engine line into an [`EngineMessage`]
//! - [`state`]: [`BotState`], the accumulated game knowledge
//! - [`moves`]: [`MoveList`], the serialized command sequence
//! - [`bot`]: the [`Bot`] strategy trait and the random starter strategy
//! - [`runner`]: the async stdin/stdout loop driving it all
//!
//! # Testing
//!
//! The runner is generic over its reader/writer, so an entire bot session can
//! be driven from an in-memory byte buffer:
//!
//! ```
//! use blockbattle_protocol::{run_bot, RandomBot};
//! use tokio::io::BufReader;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let input = b"action moves 10000\n" as &[u8];
//! let mut output = Vec::new();
//! let mut bot = RandomBot::new(1);
//! run_bot(BufReader::new(input), &mut output, &mut bot).await.unwrap();
//! assert!(String::from_utf8(output).unwrap().trim_end().ends_with("drop"));
//! # });
//! ```

pub mod bot;
pub mod message;
pub mod moves;
pub mod runner;
pub mod state;

pub use blockbattle_core as core;
pub use blockbattle_types as types;

// Re-export the commonly used types for convenience
pub use bot::{Bot, RandomBot};
pub use message::{parse_engine_line, EngineMessage, GameUpdate, PlayerUpdate, Setting};
pub use moves::MoveList;
pub use runner::{run_bot, run_stdio};
pub use state::{BotState, Player, RoundConfig};
