use game_core::{Frame, Frontend, InputState, SoundEvent};
use tracing::info;
use winit::window::Window;

use crate::audio::Audio;
use crate::input::InputTracker;
use crate::renderer::Renderer;

pub const WINDOW_TITLE: &str = "Pong vs AI";

/// Desktop window, framebuffer and speakers behind the match's `Frontend` seam
pub struct DesktopFrontend {
    pub window: Window,
    pub renderer: Renderer,
    pub audio: Audio,
    pub input: InputTracker,
}

impl DesktopFrontend {
    pub fn new(window: Window, renderer: Renderer, audio: Audio) -> Self {
        Self {
            window,
            renderer,
            audio,
            input: InputTracker::new(),
        }
    }
}

impl Frontend for DesktopFrontend {
    fn poll_input(&mut self) -> InputState {
        self.input.take()
    }

    fn render(&mut self, frame: &Frame) {
        self.renderer.draw_frame(frame);
        self.window.request_redraw();
    }

    fn show_message(&mut self, text: &str, subtext: Option<&str>) {
        info!(message = text, "showing message");
        self.window.set_title(&format!("{} - {}", WINDOW_TITLE, text));
        self.renderer.draw_message(text, subtext);
        self.window.request_redraw();
    }

    fn play(&mut self, event: SoundEvent) {
        self.audio.play(event);
    }
}
