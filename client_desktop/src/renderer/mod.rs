pub mod draw;
pub mod font;

use anyhow::{Context, Result};
use game_core::Frame;
use pixels::{Pixels, SurfaceTexture};
use tracing::debug;
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use draw::Canvas;

/// Software renderer drawing the court into a fixed-size pixel buffer
pub struct Renderer {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: &Window, width: u32, height: u32) -> Result<Self> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window);
        let pixels =
            Pixels::new(width, height, surface).context("failed to create pixel buffer")?;
        debug!(width, height, "renderer ready");
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(self.pixels.frame_mut(), self.width, self.height)
    }

    pub fn draw_frame(&mut self, frame: &Frame) {
        draw::draw_court(&mut self.canvas(), frame);
    }

    pub fn draw_message(&mut self, text: &str, subtext: Option<&str>) {
        draw::draw_message(&mut self.canvas(), text, subtext);
    }

    /// Push the current buffer to the window
    pub fn present(&self) -> Result<()> {
        self.pixels.render().context("failed to present frame")
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels
            .resize_surface(width, height)
            .context("failed to resize surface")
    }

    /// Map a cursor position in the window to a court y coordinate
    pub fn window_to_court_y(&self, position: PhysicalPosition<f64>) -> f32 {
        let pos = (position.x as f32, position.y as f32);
        let (_x, y) = self
            .pixels
            .window_pos_to_pixel(pos)
            .unwrap_or_else(|pos| self.pixels.clamp_pixel_pos(pos));
        y as f32
    }
}
