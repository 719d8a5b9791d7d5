//! Terminal whack-a-mole (workspace facade crate).
//!
//! This package keeps a stable `tui_whack::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_whack_core as core;
pub use tui_whack_input as input;
pub use tui_whack_term as term;
pub use tui_whack_types as types;
