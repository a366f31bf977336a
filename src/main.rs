//! Block Battle bot entrypoint.
//!
//! The engine runs this binary as a child process and speaks the line
//! protocol over stdin/stdout. The strategy is the random starter bot;
//! swap in a real [`Bot`](blockbattle_protocol::Bot) implementation here.

use anyhow::Result;
use tokio::runtime::Runtime;

use blockbattle_bot::protocol::{run_stdio, RandomBot};

fn main() -> Result<()> {
    let rt = Runtime::new()?;
    let mut bot = RandomBot::new(clock_seed());
    rt.block_on(run_stdio(&mut bot))
}

/// Wall-clock seed so consecutive runs play different random games.
fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos()
}
