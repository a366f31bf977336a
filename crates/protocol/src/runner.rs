//! Runner module - the engine I/O loop.
//!
//! Reads engine lines from a buffered reader, folds them into a [`BotState`],
//! and on every `action moves` request asks the [`Bot`] for a move sequence
//! and writes it back as one line, flushed immediately (the engine waits for
//! it synchronously).
//!
//! The loop is generic over reader and writer so tests can drive it with
//! in-memory buffers; [`run_stdio`] wires in the process stdin/stdout.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::bot::Bot;
use crate::message::{parse_engine_line, EngineMessage};
use crate::state::BotState;

/// Drive a bot over arbitrary line-based I/O until the input closes.
///
/// State-update parse failures abort the run: per the protocol there is no
/// way to resynchronize a half-applied round. Unknown lines are only warned
/// about on stderr - stdout stays a clean protocol channel.
pub async fn run_bot<R, W, B>(reader: R, mut writer: W, bot: &mut B) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    B: Bot,
{
    let mut lines = reader.lines();
    let mut state = BotState::new();

    while let Some(line) = lines.next_line().await.context("reading engine input")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_engine_line(line)? {
            EngineMessage::ActionMoves { timebank_ms } => {
                state.apply(EngineMessage::ActionMoves { timebank_ms })?;
                let moves = bot.choose_moves(&state);
                writer
                    .write_all(format!("{moves}\n").as_bytes())
                    .await
                    .context("writing move line")?;
                writer.flush().await.context("flushing move line")?;
            }
            EngineMessage::Unknown { line } => {
                eprintln!("[blockbattle-bot] skipping unknown line: {line}");
            }
            message => state.apply(message)?,
        }
    }

    Ok(())
}

/// Run the bot over the process's stdin/stdout.
pub async fn run_stdio<B: Bot>(bot: &mut B) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run_bot(stdin, stdout, bot).await
}
