//! TUI Match (workspace facade crate).
//!
//! This package keeps a single `tui_match::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_match_core as core;
pub use tui_match_input as input;
pub use tui_match_term as term;
pub use tui_match_types as types;
