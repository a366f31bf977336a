//! State module - everything the bot knows about the current game.
//!
//! [`BotState`] accumulates `settings` and `update` messages: the round
//! configuration, a registry of both players (points, combo, skips, field),
//! and the current/next piece. Field payloads are parsed eagerly with the
//! configured dimensions; a bad payload makes the round unusable, so the
//! error propagates instead of being patched over.

use std::collections::HashMap;

use anyhow::{Context, Result};

use blockbattle_core::{Field, Shape};
use blockbattle_types::{
    PieceKind, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, DEFAULT_TIMEBANK_MS,
    DEFAULT_TIME_PER_MOVE_MS,
};

use crate::message::{EngineMessage, GameUpdate, PlayerUpdate, Setting};

/// Fixed round configuration, filled from `settings` lines.
#[derive(Debug, Clone)]
pub struct RoundConfig {
    pub max_timebank_ms: u32,
    pub time_per_move_ms: u32,
    pub field_width: u32,
    pub field_height: u32,
    pub my_name: String,
    pub player_names: Vec<String>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            max_timebank_ms: DEFAULT_TIMEBANK_MS,
            time_per_move_ms: DEFAULT_TIME_PER_MOVE_MS,
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            my_name: String::new(),
            player_names: Vec::new(),
        }
    }
}

/// Per-player state tracked across updates.
#[derive(Debug, Clone, Default)]
pub struct Player {
    pub name: String,
    pub row_points: u32,
    pub combo: u32,
    pub skips: u32,
    pub field: Option<Field>,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// All game knowledge accumulated from the engine.
#[derive(Debug, Clone, Default)]
pub struct BotState {
    round: u32,
    timebank_ms: u32,
    config: RoundConfig,
    players: HashMap<String, Player>,
    current_piece: Option<PieceKind>,
    next_piece: Option<PieceKind>,
    piece_position: Option<(i32, i32)>,
}

impl BotState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed engine message into the state.
    ///
    /// `action` and `unknown` messages are not state: the runner handles
    /// those before calling this.
    pub fn apply(&mut self, message: EngineMessage) -> Result<()> {
        match message {
            EngineMessage::Settings(setting) => self.apply_setting(setting),
            EngineMessage::GameUpdate(update) => self.apply_game_update(update),
            EngineMessage::PlayerUpdate { player, update } => {
                self.apply_player_update(&player, update)?
            }
            EngineMessage::ActionMoves { timebank_ms } => {
                self.timebank_ms = timebank_ms;
            }
            EngineMessage::Unknown { .. } => {}
        }
        Ok(())
    }

    fn apply_setting(&mut self, setting: Setting) {
        match setting {
            Setting::Timebank(ms) => {
                self.config.max_timebank_ms = ms;
                self.timebank_ms = ms;
            }
            Setting::TimePerMove(ms) => self.config.time_per_move_ms = ms,
            Setting::PlayerNames(names) => {
                for name in &names {
                    self.players
                        .entry(name.clone())
                        .or_insert_with(|| Player::new(name));
                }
                self.config.player_names = names;
            }
            Setting::YourBot(name) => self.config.my_name = name,
            Setting::FieldWidth(w) => self.config.field_width = w,
            Setting::FieldHeight(h) => self.config.field_height = h,
        }
    }

    fn apply_game_update(&mut self, update: GameUpdate) {
        match update {
            GameUpdate::Round(n) => self.round = n,
            GameUpdate::ThisPieceType(kind) => self.current_piece = Some(kind),
            GameUpdate::NextPieceType(kind) => self.next_piece = Some(kind),
            GameUpdate::ThisPiecePosition(x, y) => self.piece_position = Some((x, y)),
        }
    }

    fn apply_player_update(&mut self, player: &str, update: PlayerUpdate) -> Result<()> {
        let entry = self
            .players
            .entry(player.to_string())
            .or_insert_with(|| Player::new(player));

        match update {
            PlayerUpdate::RowPoints(n) => entry.row_points = n,
            PlayerUpdate::Combo(n) => entry.combo = n,
            PlayerUpdate::Skips(n) => entry.skips = n,
            PlayerUpdate::Field(payload) => {
                let field =
                    Field::parse(self.config.field_width, self.config.field_height, &payload)
                        .with_context(|| format!("bad field payload for player {player:?}"))?;
                entry.field = Some(field);
            }
        }
        Ok(())
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Remaining timebank in ms, as of the last `action moves` request.
    pub fn timebank_ms(&self) -> u32 {
        self.timebank_ms
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn players(&self) -> &HashMap<String, Player> {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    /// This bot's own player entry, if `settings your_bot` has arrived.
    pub fn my_player(&self) -> Option<&Player> {
        self.players.get(&self.config.my_name)
    }

    /// This bot's latest field, if one has been pushed.
    pub fn my_field(&self) -> Option<&Field> {
        self.my_player().and_then(|p| p.field.as_ref())
    }

    pub fn current_piece(&self) -> Option<PieceKind> {
        self.current_piece
    }

    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next_piece
    }

    /// Spawn anchor of the current piece.
    pub fn piece_position(&self) -> Option<(i32, i32)> {
        self.piece_position
    }

    /// Build a fresh [`Shape`] for the current piece at its spawn anchor.
    /// `None` until both kind and position have been announced.
    pub fn current_shape(&self) -> Option<Shape> {
        let kind = self.current_piece?;
        let position = self.piece_position?;
        Some(Shape::new(kind, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::parse_engine_line;

    fn feed(state: &mut BotState, lines: &[&str]) {
        for line in lines {
            let msg = parse_engine_line(line).unwrap();
            state.apply(msg).unwrap();
        }
    }

    #[test]
    fn test_settings_fill_config_and_players() {
        let mut state = BotState::new();
        feed(
            &mut state,
            &[
                "settings timebank 10000",
                "settings time_per_move 500",
                "settings player_names player1,player2",
                "settings your_bot player2",
                "settings field_width 10",
                "settings field_height 20",
            ],
        );

        assert_eq!(state.config().max_timebank_ms, 10000);
        assert_eq!(state.config().field_width, 10);
        assert_eq!(state.players().len(), 2);
        assert_eq!(state.my_player().unwrap().name, "player2");
    }

    #[test]
    fn test_updates_track_piece_and_points() {
        let mut state = BotState::new();
        feed(
            &mut state,
            &[
                "settings player_names player1,player2",
                "settings your_bot player1",
                "update game round 2",
                "update game this_piece_type S",
                "update game next_piece_type O",
                "update game this_piece_position 3,-1",
                "update player2 row_points 6",
                "update player2 combo 2",
            ],
        );

        assert_eq!(state.round(), 2);
        assert_eq!(state.current_piece(), Some(PieceKind::S));
        assert_eq!(state.next_piece(), Some(PieceKind::O));
        assert_eq!(state.piece_position(), Some((3, -1)));
        assert_eq!(state.player("player2").unwrap().row_points, 6);
        assert_eq!(state.player("player2").unwrap().combo, 2);
    }

    #[test]
    fn test_field_update_parses_with_configured_dimensions() {
        let mut state = BotState::new();
        feed(
            &mut state,
            &[
                "settings player_names player1,player2",
                "settings your_bot player1",
                "settings field_width 2",
                "settings field_height 2",
                "update player1 field 0,2;2,0",
            ],
        );

        let field = state.my_field().unwrap();
        assert_eq!(field.width(), 2);
        assert_eq!(
            field.cell_at(1, 0).unwrap().kind(),
            blockbattle_types::CellType::Block
        );
    }

    #[test]
    fn test_bad_field_payload_is_fatal() {
        let mut state = BotState::new();
        feed(
            &mut state,
            &[
                "settings player_names player1,player2",
                "settings field_width 2",
                "settings field_height 2",
            ],
        );

        let msg = parse_engine_line("update player1 field 0,0,0").unwrap();
        assert!(state.apply(msg).is_err());
    }

    #[test]
    fn test_current_shape_needs_kind_and_position() {
        let mut state = BotState::new();
        assert!(state.current_shape().is_none());

        feed(&mut state, &["update game this_piece_type O"]);
        assert!(state.current_shape().is_none());

        feed(&mut state, &["update game this_piece_position 4,0"]);
        let shape = state.current_shape().unwrap();
        assert_eq!(shape.kind(), PieceKind::O);
        assert_eq!(shape.location(), (4, 0));
    }
}
