//! Message module - parsing of engine protocol lines.
//!
//! The engine speaks a line-based text protocol on stdin. Every line is one
//! message, space-separated:
//!
//! ```text
//! settings <key> <value>
//! update game <key> <value>
//! update <player> <key> <value>
//! action moves <remaining_timebank_ms>
//! ```
//!
//! Unknown-but-well-formed messages parse to [`EngineMessage::Unknown`] so
//! engine-side protocol additions do not kill older bots. Malformed known
//! messages are hard errors: the round state would be unusable.

use anyhow::{anyhow, bail, Context, Result};

use blockbattle_types::PieceKind;

/// One parsed engine line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineMessage {
    Settings(Setting),
    GameUpdate(GameUpdate),
    PlayerUpdate {
        player: String,
        update: PlayerUpdate,
    },
    /// Request for a move sequence, with the remaining timebank in ms.
    ActionMoves {
        timebank_ms: u32,
    },
    /// A message this bot does not understand. Skipped, not fatal.
    Unknown {
        line: String,
    },
}

/// `settings <key> <value>` payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    Timebank(u32),
    TimePerMove(u32),
    PlayerNames(Vec<String>),
    YourBot(String),
    FieldWidth(u32),
    FieldHeight(u32),
}

/// `update game <key> <value>` payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    Round(u32),
    ThisPieceType(PieceKind),
    NextPieceType(PieceKind),
    /// Spawn anchor of the current piece. May sit above the visible field
    /// (negative y).
    ThisPiecePosition(i32, i32),
}

/// `update <player> <key> <value>` payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerUpdate {
    RowPoints(u32),
    Combo(u32),
    Skips(u32),
    /// Serialized field payload, parsed against the round's dimensions when
    /// applied to the state.
    Field(String),
}

/// Parse one engine line into an [`EngineMessage`].
pub fn parse_engine_line(line: &str) -> Result<EngineMessage> {
    let mut parts = line.split_whitespace();
    let keyword = parts
        .next()
        .ok_or_else(|| anyhow!("empty engine line"))?;

    match keyword {
        "settings" => parse_settings(parts, line),
        "update" => parse_update(parts, line),
        "action" => parse_action(parts, line),
        _ => Ok(EngineMessage::Unknown {
            line: line.to_string(),
        }),
    }
}

fn parse_settings<'a>(
    mut parts: impl Iterator<Item = &'a str>,
    line: &str,
) -> Result<EngineMessage> {
    let key = parts
        .next()
        .ok_or_else(|| anyhow!("settings line without key: {line:?}"))?;
    let value = parts
        .next()
        .ok_or_else(|| anyhow!("settings line without value: {line:?}"))?;

    let setting = match key {
        "timebank" => Setting::Timebank(parse_number(value, line)?),
        "time_per_move" => Setting::TimePerMove(parse_number(value, line)?),
        "player_names" => {
            Setting::PlayerNames(value.split(',').map(str::to_string).collect())
        }
        "your_bot" => Setting::YourBot(value.to_string()),
        "field_width" => Setting::FieldWidth(parse_number(value, line)?),
        "field_height" => Setting::FieldHeight(parse_number(value, line)?),
        _ => {
            return Ok(EngineMessage::Unknown {
                line: line.to_string(),
            })
        }
    };
    Ok(EngineMessage::Settings(setting))
}

fn parse_update<'a>(
    mut parts: impl Iterator<Item = &'a str>,
    line: &str,
) -> Result<EngineMessage> {
    let target = parts
        .next()
        .ok_or_else(|| anyhow!("update line without target: {line:?}"))?;
    let key = parts
        .next()
        .ok_or_else(|| anyhow!("update line without key: {line:?}"))?;
    let value = parts
        .next()
        .ok_or_else(|| anyhow!("update line without value: {line:?}"))?;

    if target == "game" {
        let update = match key {
            "round" => GameUpdate::Round(parse_number(value, line)?),
            "this_piece_type" => GameUpdate::ThisPieceType(parse_piece(value, line)?),
            "next_piece_type" => GameUpdate::NextPieceType(parse_piece(value, line)?),
            "this_piece_position" => {
                let (x, y) = parse_position(value, line)?;
                GameUpdate::ThisPiecePosition(x, y)
            }
            _ => {
                return Ok(EngineMessage::Unknown {
                    line: line.to_string(),
                })
            }
        };
        return Ok(EngineMessage::GameUpdate(update));
    }

    let update = match key {
        "row_points" => PlayerUpdate::RowPoints(parse_number(value, line)?),
        "combo" => PlayerUpdate::Combo(parse_number(value, line)?),
        "skips" => PlayerUpdate::Skips(parse_number(value, line)?),
        "field" => PlayerUpdate::Field(value.to_string()),
        _ => {
            return Ok(EngineMessage::Unknown {
                line: line.to_string(),
            })
        }
    };
    Ok(EngineMessage::PlayerUpdate {
        player: target.to_string(),
        update,
    })
}

fn parse_action<'a>(
    mut parts: impl Iterator<Item = &'a str>,
    line: &str,
) -> Result<EngineMessage> {
    let action = parts
        .next()
        .ok_or_else(|| anyhow!("action line without action name: {line:?}"))?;
    if action != "moves" {
        return Ok(EngineMessage::Unknown {
            line: line.to_string(),
        });
    }
    let timebank = parts
        .next()
        .ok_or_else(|| anyhow!("action moves without timebank: {line:?}"))?;
    Ok(EngineMessage::ActionMoves {
        timebank_ms: parse_number(timebank, line)?,
    })
}

fn parse_number(value: &str, line: &str) -> Result<u32> {
    value
        .parse()
        .with_context(|| format!("bad number {value:?} in line {line:?}"))
}

fn parse_piece(value: &str, line: &str) -> Result<PieceKind> {
    PieceKind::from_symbol(value)
        .ok_or_else(|| anyhow!("unknown piece type {value:?} in line {line:?}"))
}

fn parse_position(value: &str, line: &str) -> Result<(i32, i32)> {
    let mut coords = value.split(',');
    let x = coords
        .next()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| anyhow!("bad position {value:?} in line {line:?}"))?;
    let y = coords
        .next()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| anyhow!("bad position {value:?} in line {line:?}"))?;
    if coords.next().is_some() {
        bail!("bad position {value:?} in line {line:?}");
    }
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings_lines() {
        assert_eq!(
            parse_engine_line("settings timebank 10000").unwrap(),
            EngineMessage::Settings(Setting::Timebank(10000))
        );
        assert_eq!(
            parse_engine_line("settings player_names player1,player2").unwrap(),
            EngineMessage::Settings(Setting::PlayerNames(vec![
                "player1".to_string(),
                "player2".to_string()
            ]))
        );
        assert_eq!(
            parse_engine_line("settings your_bot player1").unwrap(),
            EngineMessage::Settings(Setting::YourBot("player1".to_string()))
        );
    }

    #[test]
    fn test_parse_game_updates() {
        assert_eq!(
            parse_engine_line("update game round 3").unwrap(),
            EngineMessage::GameUpdate(GameUpdate::Round(3))
        );
        assert_eq!(
            parse_engine_line("update game this_piece_type T").unwrap(),
            EngineMessage::GameUpdate(GameUpdate::ThisPieceType(PieceKind::T))
        );
        assert_eq!(
            parse_engine_line("update game this_piece_position 4,-1").unwrap(),
            EngineMessage::GameUpdate(GameUpdate::ThisPiecePosition(4, -1))
        );
    }

    #[test]
    fn test_parse_player_updates() {
        assert_eq!(
            parse_engine_line("update player2 row_points 8").unwrap(),
            EngineMessage::PlayerUpdate {
                player: "player2".to_string(),
                update: PlayerUpdate::RowPoints(8),
            }
        );
        assert_eq!(
            parse_engine_line("update player1 field 0,0;0,0").unwrap(),
            EngineMessage::PlayerUpdate {
                player: "player1".to_string(),
                update: PlayerUpdate::Field("0,0;0,0".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_action_moves() {
        assert_eq!(
            parse_engine_line("action moves 9500").unwrap(),
            EngineMessage::ActionMoves { timebank_ms: 9500 }
        );
    }

    #[test]
    fn test_unknown_messages_are_skippable() {
        assert!(matches!(
            parse_engine_line("settings max_rounds 40").unwrap(),
            EngineMessage::Unknown { .. }
        ));
        assert!(matches!(
            parse_engine_line("quit").unwrap(),
            EngineMessage::Unknown { .. }
        ));
    }

    #[test]
    fn test_malformed_known_messages_fail() {
        assert!(parse_engine_line("settings timebank abc").is_err());
        assert!(parse_engine_line("update game this_piece_type Q").is_err());
        assert!(parse_engine_line("update game this_piece_position 4").is_err());
        assert!(parse_engine_line("action moves").is_err());
    }
}
