//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the whole temporal state machine of the game: spawn
//! scheduling, visibility timing, hit resolution, and score/timer
//! bookkeeping. It has **zero dependencies** on UI, networking, or I/O:
//!
//! - **Deterministic**: the same seed and tick sequence replays identically
//! - **Total**: every operation is a silent no-op on invalid input; nothing
//!   here panics or errors on late, duplicate, or out-of-range events
//! - **Portable**: runs headless for tests and benches
//!
//! # Module Structure
//!
//! - [`board`]: the 3x3 grid of holes
//! - [`game_state`]: session state machine and its three schedulers
//! - [`rng`]: seeded uniform selection over empty holes
//! - [`snapshot`]: the immutable render contract
//!
//! # Timing
//!
//! The engine is advanced purely by [`GameState::tick`] with elapsed
//! milliseconds; the host loop owns the real clock. Three schedulers share
//! that timeline: the spawn ticker (600ms period), one pending despawn
//! deadline per hole (800ms from spawn, 100ms from a whack), and the
//! one-second countdown. Callbacks run to completion in a fixed order
//! within each tick, so there is no preemption to reason about.
//!
//! # Example
//!
//! ```
//! use tui_whack_core::GameState;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // First spawn lands after the spawn interval.
//! game.tick(600);
//! let snap = game.snapshot();
//! assert!(snap.holes.iter().any(|hole| hole.has_mole()));
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_whack_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
