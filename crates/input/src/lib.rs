//! Input mapping from terminal events to game actions.
//!
//! Whacking is a discrete action, so there is no held-key or auto-repeat
//! handling here: one key press, one action. The digit keys stand in for
//! pointer taps on the grid; real mouse clicks are resolved by the view's
//! hit-testing instead.

pub mod map;

pub use tui_whack_types as types;

pub use map::{handle_key_event, should_quit};
