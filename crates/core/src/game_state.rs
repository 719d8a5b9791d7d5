//! Game state module - manages the complete session state
//!
//! This module ties together the board, the RNG, and the three schedulers
//! that drive a session: the spawn ticker, the per-hole despawn deadlines,
//! and the countdown. All scheduling is expressed as millisecond
//! accumulators advanced by [`GameState::tick`], so the engine never touches
//! a real clock and every sequence of events is reproducible.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{GameConfig, HoleState, Phase, BOARD_HOLES, COUNTDOWN_STEP_MS};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    /// One pending despawn deadline per hole, in ms remaining.
    /// Armed on spawn (show duration) and re-armed on whack (clear delay);
    /// a fresh `start()` replaces the whole array, which cancels every
    /// deadline belonging to the previous session.
    despawn_ms: [Option<u32>; BOARD_HOLES],
    /// Spawn ticker accumulator.
    spawn_timer_ms: u32,
    /// Countdown accumulator (one decrement per elapsed second).
    countdown_timer_ms: u32,
    score: u32,
    time_remaining: u32,
    /// Best score across completed sessions. Process lifetime only.
    high_score: u32,
    phase: Phase,
    /// Monotonic session id (increments on every start).
    episode_id: u32,
    rng: SimpleRng,
    config: GameConfig,
}

impl GameState {
    /// Create a new game with the given RNG seed and default timing
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    /// Create with custom session timing
    pub fn with_config(seed: u32, config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            despawn_ms: [None; BOARD_HOLES],
            spawn_timer_ms: 0,
            countdown_timer_ms: 0,
            score: 0,
            time_remaining: config.duration_secs,
            high_score: 0,
            phase: Phase::Idle,
            episode_id: 0,
            rng: SimpleRng::new(seed),
            config,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Start a session. Acts as a full restart from any phase: the board,
    /// score, timers, and every pending despawn deadline are reset. The
    /// high score is the one thing that survives.
    pub fn start(&mut self) {
        self.board.clear();
        self.despawn_ms = [None; BOARD_HOLES];
        self.spawn_timer_ms = 0;
        self.countdown_timer_ms = 0;
        self.score = 0;
        self.time_remaining = self.config.duration_secs;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = Phase::Running;
    }

    /// Advance the session clock by `elapsed_ms`.
    ///
    /// Order within a tick: despawn deadlines first, then the spawn ticker,
    /// then the countdown. Deadlines keep draining after the session ends so
    /// leftover moles still vanish on schedule; spawning and the countdown
    /// only run while the session is live. A large `elapsed_ms` can fire a
    /// periodic scheduler several times in one call.
    ///
    /// Returns true when any renderer-visible state changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase == Phase::Idle {
            return false;
        }

        let mut changed = self.advance_despawns(elapsed_ms);

        if self.phase != Phase::Running {
            return changed;
        }

        self.spawn_timer_ms += elapsed_ms;
        while self.spawn_timer_ms >= self.config.spawn_interval_ms {
            self.spawn_timer_ms -= self.config.spawn_interval_ms;
            changed |= self.spawn_mole();
        }

        self.countdown_timer_ms += elapsed_ms;
        while self.countdown_timer_ms >= COUNTDOWN_STEP_MS && self.time_remaining > 0 {
            self.countdown_timer_ms -= COUNTDOWN_STEP_MS;
            self.time_remaining -= 1;
            changed = true;
            if self.time_remaining == 0 {
                self.end_session();
                break;
            }
        }

        changed
    }

    /// Strike the hole at `index`.
    ///
    /// Silent no-op (returns false) unless the session is running, the index
    /// is on the board, and the hole holds an unstruck mole. A successful
    /// whack scores one point and re-arms the hole's despawn deadline to the
    /// short clear delay, superseding the natural show-duration deadline.
    pub fn whack(&mut self, index: usize) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        match self.board.get(index) {
            Some(HoleState::Mole) => {
                self.board.set(index, HoleState::Whacked);
                self.score += 1;
                self.despawn_ms[index] = Some(self.config.whack_clear_ms);
                true
            }
            _ => false,
        }
    }

    /// Drain pending despawn deadlines. Firing clears the hole outright,
    /// which drops both the target and any hit marker at once.
    fn advance_despawns(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;
        for index in 0..BOARD_HOLES {
            let Some(remaining) = self.despawn_ms[index] else {
                continue;
            };
            if remaining > elapsed_ms {
                self.despawn_ms[index] = Some(remaining - elapsed_ms);
            } else {
                self.despawn_ms[index] = None;
                self.board.set(index, HoleState::Empty);
                changed = true;
            }
        }
        changed
    }

    /// One spawn tick: place a mole in a uniformly random empty hole.
    /// A saturated board skips the tick silently.
    fn spawn_mole(&mut self) -> bool {
        let empty = self.board.empty_holes();
        let Some(&index) = self.rng.choose(&empty) else {
            return false;
        };
        self.board.set(index, HoleState::Mole);
        self.despawn_ms[index] = Some(self.config.mole_show_ms);
        true
    }

    /// Countdown reached zero: the only way out of `Running`.
    /// The high score is compared exactly once, here.
    fn end_session(&mut self) {
        self.phase = Phase::Ended;
        self.spawn_timer_ms = 0;
        self.countdown_timer_ms = 0;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.holes = *self.board.holes();
        out.score = self.score;
        out.time_remaining = self.time_remaining;
        out.running = self.phase == Phase::Running;
        out.high_score = self.high_score;
        out.episode_id = self.episode_id;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
