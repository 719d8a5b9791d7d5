//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (3x3 grid of holes, row-major indexing)
pub const BOARD_COLS: usize = 3;
pub const BOARD_ROWS: usize = 3;
pub const BOARD_HOLES: usize = BOARD_COLS * BOARD_ROWS;

/// Game timing constants (in milliseconds unless noted)
pub const TICK_MS: u32 = 16;
pub const GAME_DURATION_SECS: u32 = 30;
pub const SPAWN_INTERVAL_MS: u32 = 600;
pub const MOLE_SHOW_MS: u32 = 800;
pub const WHACK_CLEAR_MS: u32 = 100;
pub const COUNTDOWN_STEP_MS: u32 = 1000;

/// State of a single hole on the board.
///
/// `Mole` and `Whacked` both count as "a target occupies this hole";
/// `Whacked` additionally means the target has been struck and is
/// animating out. A whacked hole can only come from a mole, so the
/// hit-implies-target invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoleState {
    Empty,
    Mole,
    Whacked,
}

impl HoleState {
    /// True while a target occupies the hole (struck or not).
    pub fn has_mole(&self) -> bool {
        !matches!(self, HoleState::Empty)
    }

    /// True once the occupying target has been struck.
    pub fn is_whacked(&self) -> bool {
        matches!(self, HoleState::Whacked)
    }
}

impl Default for HoleState {
    fn default() -> Self {
        HoleState::Empty
    }
}

/// Session lifecycle. `start()` is the only way into `Running`;
/// the countdown reaching zero is the only way into `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Running,
    Ended,
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Strike the hole at the given board index.
    Whack(usize),
    /// Start a new session (also restarts a running one).
    Start,
}

/// Tunable session timing. Defaults mirror the timing constants above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Session length in seconds.
    pub duration_secs: u32,
    /// Period of the spawn ticker.
    pub spawn_interval_ms: u32,
    /// How long an unhit mole stays visible.
    pub mole_show_ms: u32,
    /// How long a whacked mole lingers before its hole clears.
    pub whack_clear_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: GAME_DURATION_SECS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            mole_show_ms: MOLE_SHOW_MS,
            whack_clear_ms: WHACK_CLEAR_MS,
        }
    }
}
