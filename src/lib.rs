//! Block Battle starter bot (workspace facade crate).
//!
//! This package keeps a stable `blockbattle_bot::{core,protocol,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use blockbattle_core as core;
pub use blockbattle_protocol as protocol;
pub use blockbattle_types as types;
