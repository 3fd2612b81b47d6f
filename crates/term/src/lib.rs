//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Implement the core's `Renderer` capability with retained card faces
//!   (including the brief hold that lets a mismatch be seen before it flips
//!   back)
//! - Allow precise control over tile size and layout

pub mod board_view;
pub mod fb;
pub mod renderer;
pub mod surface;

pub use tui_match_core as core;
pub use tui_match_types as types;

pub use board_view::{AnchorY, BoardView, Hud, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use surface::{BoardModel, Face};
