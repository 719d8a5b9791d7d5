//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and owns the grid geometry, so pointer
//! hit-testing lives here too and can never drift from what is drawn.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{HoleState, BOARD_COLS, BOARD_HOLES, BOARD_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Resolved on-screen geometry of the hole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub hole_w: u16,
    pub hole_h: u16,
    pub gap_x: u16,
    pub gap_y: u16,
}

impl GridLayout {
    pub fn grid_width(&self) -> u16 {
        (BOARD_COLS as u16) * self.hole_w + (BOARD_COLS as u16 - 1) * self.gap_x
    }

    pub fn grid_height(&self) -> u16 {
        (BOARD_ROWS as u16) * self.hole_h + (BOARD_ROWS as u16 - 1) * self.gap_y
    }

    /// Screen rect (x, y, w, h) of the hole at `index`.
    pub fn hole_rect(&self, index: usize) -> (u16, u16, u16, u16) {
        let col = (index % BOARD_COLS) as u16;
        let row = (index / BOARD_COLS) as u16;
        (
            self.origin_x + col * (self.hole_w + self.gap_x),
            self.origin_y + row * (self.hole_h + self.gap_y),
            self.hole_w,
            self.hole_h,
        )
    }

    /// Hole index under a screen position. Gaps and everything outside the
    /// grid miss.
    pub fn hole_at(&self, x: u16, y: u16) -> Option<usize> {
        for index in 0..BOARD_HOLES {
            let (hx, hy, hw, hh) = self.hole_rect(index);
            if x >= hx && x < hx + hw && y >= hy && y < hy + hh {
                return Some(index);
            }
        }
        None
    }
}

const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 2;

const BACKDROP: CellStyle = CellStyle::new(Rgb::new(130, 130, 120), Rgb::new(12, 16, 24));
const TITLE: CellStyle = CellStyle::new(Rgb::new(240, 200, 90), Rgb::new(12, 16, 24)).bold();
const SCOREBOARD: CellStyle = CellStyle::new(Rgb::new(220, 220, 210), Rgb::new(12, 16, 24));
const STATUS: CellStyle = CellStyle::new(Rgb::new(160, 160, 150), Rgb::new(12, 16, 24)).dim();
const BANNER: CellStyle = CellStyle::new(Rgb::new(240, 120, 90), Rgb::new(12, 16, 24)).bold();
const OPENING: CellStyle = CellStyle::new(Rgb::new(90, 70, 50), Rgb::new(30, 22, 15));
const DIRT: CellStyle = CellStyle::new(Rgb::new(150, 110, 60), Rgb::new(72, 50, 28));
const LABEL: CellStyle = CellStyle::new(Rgb::new(120, 100, 80), Rgb::new(30, 22, 15)).dim();
const MOLE: CellStyle = CellStyle::new(Rgb::new(225, 172, 105), Rgb::new(30, 22, 15)).bold();
const WHACKED: CellStyle = CellStyle::new(Rgb::new(235, 90, 80), Rgb::new(30, 22, 15)).dim();

/// A lightweight terminal renderer for the whack-a-mole board.
pub struct GameView {
    /// Hole width in terminal columns.
    hole_w: u16,
    /// Hole height in terminal rows (last row is the dirt mound).
    hole_h: u16,
    gap_x: u16,
    gap_y: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Wide holes compensate for typical terminal glyph aspect ratio.
        Self {
            hole_w: 9,
            hole_h: 4,
            gap_x: 2,
            gap_y: 1,
        }
    }
}

impl GameView {
    pub fn new(hole_w: u16, hole_h: u16) -> Self {
        Self {
            hole_w,
            hole_h,
            ..Self::default()
        }
    }

    /// Resolve where the grid lands inside the viewport. The whole block
    /// (header, grid, status line) is centered.
    pub fn layout(&self, viewport: Viewport) -> GridLayout {
        let mut layout = GridLayout {
            origin_x: 0,
            origin_y: 0,
            hole_w: self.hole_w,
            hole_h: self.hole_h,
            gap_x: self.gap_x,
            gap_y: self.gap_y,
        };
        let block_h = HEADER_ROWS + layout.grid_height() + FOOTER_ROWS;
        layout.origin_x = viewport.width.saturating_sub(layout.grid_width()) / 2;
        layout.origin_y = viewport.height.saturating_sub(block_h) / 2 + HEADER_ROWS;
        layout
    }

    /// Hole index under a pointer position, if any.
    pub fn hit_test(&self, viewport: Viewport, x: u16, y: u16) -> Option<usize> {
        self.layout(viewport).hole_at(x, y)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(BACKDROP.into_cell(' '));

        let layout = self.layout(viewport);

        self.draw_header(snap, viewport, &layout, fb);
        for (index, hole) in snap.holes.iter().enumerate() {
            self.draw_hole(&layout, index, *hole, fb);
        }
        self.draw_status(snap, viewport, &layout, fb);
    }

    /// Convenience wrapper allocating a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &GridLayout,
        fb: &mut FrameBuffer,
    ) {
        let title_y = layout.origin_y.saturating_sub(HEADER_ROWS);
        put_centered(fb, viewport, title_y, "W H A C K - A - M O L E", TITLE);

        let scoreboard = format!(
            "SCORE {:>3}   TIME {:>2}s   BEST {:>3}",
            snap.score, snap.time_remaining, snap.high_score
        );
        put_centered(fb, viewport, title_y + 1, &scoreboard, SCOREBOARD);
    }

    fn draw_hole(&self, layout: &GridLayout, index: usize, hole: HoleState, fb: &mut FrameBuffer) {
        let (x, y, w, h) = layout.hole_rect(index);
        let dirt_y = y + h.saturating_sub(1);

        fb.fill_rect(x, y, w, h.saturating_sub(1), ' ', OPENING);
        fb.fill_rect(x, dirt_y, w, 1, '▒', DIRT);

        // Key hint in the corner: hole 0 is key '1'.
        if index < 9 {
            let digit = char::from(b'1' + index as u8);
            fb.put_char(x, y, digit, LABEL);
        }

        let art_x = x + w.saturating_sub(5) / 2;
        match hole {
            HoleState::Empty => {}
            HoleState::Mole => {
                fb.put_str(art_x, y + 1, "(o o)", MOLE);
                fb.put_str(art_x, y + 2, " \\_/ ", MOLE);
            }
            HoleState::Whacked => {
                fb.put_str(art_x, y + 1, "(x x)", WHACKED);
                fb.put_str(art_x, y + 2, " ~~~ ", WHACKED);
            }
        }
    }

    fn draw_status(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &GridLayout,
        fb: &mut FrameBuffer,
    ) {
        let status_y = layout.origin_y + layout.grid_height() + 1;
        if snap.running {
            put_centered(fb, viewport, status_y, "WHACK: 1-9 OR CLICK   Q QUITS", STATUS);
        } else if snap.game_over() {
            let banner = format!("GAME OVER!  YOU SCORED {}  -  R TO PLAY AGAIN", snap.score);
            put_centered(fb, viewport, status_y, &banner, BANNER);
        } else {
            put_centered(fb, viewport, status_y, "R TO START   Q QUITS", STATUS);
        }
    }
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let len = text.chars().count() as u16;
    let x = viewport.width.saturating_sub(len) / 2;
    fb.put_str(x, y, text, style);
}
