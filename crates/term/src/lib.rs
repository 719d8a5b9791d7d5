//! Terminal "game renderer" module.
//!
//! A small game-oriented rendering layer: the view draws into a plain
//! framebuffer and a crossterm backend flushes it. No widget/layout
//! framework sits in between.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so grid geometry (and pointer hit-testing) can be
//!   unit tested without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_whack_core as core;
pub use tui_whack_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, GridLayout, Viewport};
pub use renderer::TerminalRenderer;
