use game_core::{Aabb, Frame};

use super::font::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};

pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0, 0, 0, 255];
pub const WHITE: Rgba = [255, 255, 255, 255];
pub const AI_BLUE: Rgba = [173, 216, 230, 255];
pub const PLAYER_PINK: Rgba = [255, 192, 203, 255];

const SCORE_SCALE: u32 = 8;
const SCORE_TOP: f32 = 20.0;
const HEADLINE_SCALE: u32 = 3;
const SUBTEXT_SCALE: u32 = 2;

/// RGBA8 framebuffer with clipped drawing helpers
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert_eq!(frame.len(), (width * height * 4) as usize);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Rgba) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&color);
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.frame[i..i + 4].copy_from_slice(&color);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let x0 = (x.floor() as i32).max(0);
        let y0 = (y.floor() as i32).max(0);
        let x1 = ((x + w).floor() as i32).min(self.width as i32);
        let y1 = ((y + h).floor() as i32).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                self.put(px, py, color);
            }
        }
    }

    pub fn fill_aabb(&mut self, aabb: &Aabb, color: Rgba) {
        self.fill_rect(aabb.min.x, aabb.min.y, aabb.width(), aabb.height(), color);
    }

    /// Ellipse inscribed in the box
    pub fn fill_ellipse(&mut self, aabb: &Aabb, color: Rgba) {
        let center = aabb.center();
        let rx = aabb.width() / 2.0;
        let ry = aabb.height() / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let y0 = aabb.min.y.floor() as i32;
        let y1 = aabb.max.y.ceil() as i32;
        let x0 = aabb.min.x.floor() as i32;
        let x1 = aabb.max.x.ceil() as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = (px as f32 + 0.5 - center.x) / rx;
                let dy = (py as f32 + 0.5 - center.y) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(px, py, color);
                }
            }
        }
    }

    /// Draw one line of text with its top-left corner at (x, y)
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: u32, color: Rgba) {
        let s = scale as f32;
        for (i, c) in text.chars().enumerate() {
            let origin_x = x + (i as u32 * ADVANCE) as f32 * s;
            for (row, bits) in font::glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        self.fill_rect(
                            origin_x + col as f32 * s,
                            y + row as f32 * s,
                            s,
                            s,
                            color,
                        );
                    }
                }
            }
        }
    }

    /// Draw text horizontally centered on `center_x`
    pub fn draw_text_centered(
        &mut self,
        text: &str,
        center_x: f32,
        y: f32,
        scale: u32,
        color: Rgba,
    ) {
        let width = (font::text_width(text) * scale) as f32;
        self.draw_text(text, center_x - width / 2.0, y, scale, color);
    }
}

/// Court, paddles, ball and both scores
pub fn draw_court(canvas: &mut Canvas, frame: &Frame) {
    let width = canvas.width as f32;
    let height = canvas.height as f32;

    canvas.clear(BLACK);

    canvas.fill_aabb(&frame.left_paddle, AI_BLUE);
    canvas.fill_aabb(&frame.right_paddle, PLAYER_PINK);
    canvas.fill_ellipse(&frame.ball, WHITE);

    let left = frame.score.left.to_string();
    canvas.draw_text(&left, width / 4.0, SCORE_TOP, SCORE_SCALE, AI_BLUE);

    let right = frame.score.right.to_string();
    let right_width = (font::text_width(&right) * SCORE_SCALE) as f32;
    canvas.draw_text(
        &right,
        width * 3.0 / 4.0 - right_width,
        SCORE_TOP,
        SCORE_SCALE,
        PLAYER_PINK,
    );

    // Dashed center line
    let mut y = 0.0;
    while y < height {
        canvas.fill_rect(width / 2.0 - 1.0, y, 3.0, 15.0, WHITE);
        y += 25.0;
    }
}

/// Headline plus optional extra lines, centered on a blank screen
pub fn draw_message(canvas: &mut Canvas, text: &str, subtext: Option<&str>) {
    let center_x = canvas.width as f32 / 2.0;
    let center_y = canvas.height as f32 / 2.0;

    canvas.clear(BLACK);

    let headline_height = (GLYPH_HEIGHT * HEADLINE_SCALE) as f32;
    canvas.draw_text_centered(
        text,
        center_x,
        center_y - 80.0 - headline_height / 2.0,
        HEADLINE_SCALE,
        WHITE,
    );

    if let Some(subtext) = subtext {
        let line_height = (GLYPH_HEIGHT * SUBTEXT_SCALE) as f32 + 40.0;
        for (i, line) in subtext.lines().enumerate() {
            canvas.draw_text_centered(
                line,
                center_x,
                center_y + i as f32 * line_height,
                SUBTEXT_SCALE,
                WHITE,
            );
        }
    }
}
