//! BoardView: maps the render-side board state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::{BoardModel, Face};
use crate::types::{CARD_BACK_GLYPH, GRID_COLS, GRID_ROWS};

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

/// Live counters shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub seconds: u32,
    pub moves: u32,
    pub stars: u8,
}

/// A lightweight terminal renderer for the card board.
pub struct BoardView {
    /// Card tile width in terminal columns.
    tile_w: u16,
    /// Card tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for BoardView {
    fn default() -> Self {
        // 6x3 tiles leave room for a double-width glyph with breathing space.
        Self {
            tile_w: 6,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl BoardView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the board into an existing framebuffer.
    ///
    /// `cursor` is the (col, row) of the highlighted card, if any.
    pub fn render_into(
        &self,
        model: &BoardModel,
        hud: &Hud,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let board_px_w = (GRID_COLS as u16) * self.tile_w;
        let board_px_h = (GRID_ROWS as u16) * self.tile_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let felt = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 40, 30),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Table felt behind the cards.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', felt);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Cards.
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let id = row * GRID_COLS + col;
                let under_cursor = cursor == Some((col, row));
                self.draw_card(fb, model, start_x, start_y, col, row, id, under_cursor);
            }
        }

        // Side panel (time/moves/stars).
        self.draw_side_panel(fb, hud, viewport, start_x, start_y, frame_w);

        // Win overlay.
        if let Some(summary) = model.summary() {
            self.draw_summary(fb, start_x, start_y, frame_w, frame_h, summary);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        model: &BoardModel,
        hud: &Hud,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(model, hud, cursor, viewport, &mut fb);
        fb
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        model: &BoardModel,
        start_x: u16,
        start_y: u16,
        col: u8,
        row: u8,
        id: u8,
        under_cursor: bool,
    ) {
        let face = model.face(id);

        let bg = match face {
            Face::Down => Rgb::new(70, 50, 110),
            Face::Up => Rgb::new(150, 140, 110),
            Face::Matched => Rgb::new(60, 110, 70),
            Face::Concealing { .. } => Rgb::new(130, 70, 70),
        };
        let bg = if under_cursor {
            Rgb::new(bg.r.saturating_add(50), bg.g.saturating_add(50), bg.b.saturating_add(50))
        } else {
            bg
        };
        let style = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg,
            bold: under_cursor,
            dim: matches!(face, Face::Concealing { .. }),
        };

        // One column of felt between tiles keeps cards visually separate.
        let px = start_x + 1 + (col as u16) * self.tile_w;
        let py = start_y + 1 + (row as u16) * self.tile_h;
        let card_w = self.tile_w.saturating_sub(1);
        let card_h = self.tile_h.saturating_sub(1);
        fb.fill_rect(px, py, card_w, card_h, ' ', style);

        let glyph = match face {
            Face::Down => CARD_BACK_GLYPH,
            Face::Up | Face::Matched | Face::Concealing { .. } => {
                model.token(id).map(|t| t.glyph()).unwrap_or(' ')
            }
        };
        // Glyphs are double-width in most terminals; leave the cell to the
        // right of them blank.
        fb.put_char(px + (card_w / 2).saturating_sub(1), py + card_h / 2, glyph, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        hud: &Hud,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.seconds, value);
        fb.put_str(panel_x + digit_count(hud.seconds), y, "s", value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, hud.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STARS", label);
        y = y.saturating_add(1);
        for i in 0..3u16 {
            let ch = if (i as u8) < hud.stars { '★' } else { '☆' };
            fb.put_char(panel_x + i * 2, y, ch, value);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ENTER flip", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "R replay", hint);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "Q quit", hint);
    }

    fn draw_summary(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        summary: &crate::core::WinSummary,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let detail = CellStyle {
            bold: false,
            ..style
        };

        let mid_y = start_y.saturating_add(frame_h / 2);
        let center = |fb: &mut FrameBuffer, y: u16, text: &str, s: CellStyle| {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, y, text, s);
        };

        center(fb, mid_y.saturating_sub(2), "ALL PAIRS FOUND", style);

        let mut stars_line = String::new();
        for i in 0..3u8 {
            stars_line.push(if i < summary.stars { '★' } else { '☆' });
            stars_line.push(' ');
        }
        center(fb, mid_y.saturating_sub(1), stars_line.trim_end(), detail);

        let numbers = format!(
            "{} moves in {}s",
            summary.moves, summary.elapsed_seconds
        );
        center(fb, mid_y, &numbers, detail);
        center(fb, mid_y.saturating_add(2), "PRESS R TO REPLAY", style);
    }
}

fn digit_count(value: u32) -> u16 {
    let mut n = value;
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
