mod audio;
mod frontend;
mod input;
mod renderer;

use std::time::Instant;

use anyhow::{Context, Result};
use game_core::{Config, GameRng, Match};
use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, KeyboardInput, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use audio::Audio;
use frontend::{DesktopFrontend, WINDOW_TITLE};
use renderer::Renderer;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::new();
    let width = config.screen_width as u32;
    let height = config.screen_height as u32;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(width, height))
        .with_min_inner_size(LogicalSize::new(width / 2, height / 2))
        .build(&event_loop)
        .context("failed to open window")?;
    window.set_cursor_visible(false);

    let renderer = Renderer::new(&window, width, height)?;
    let audio = Audio::open_or_silent();
    info!(sound = !audio.is_silent(), "audio ready");
    let mut frontend = DesktopFrontend::new(window, renderer, audio);

    let seed: u64 = rand::random();
    info!(seed, "starting match");
    let mut game = Match::new(config, GameRng::new(seed));

    let mut next_tick = Instant::now();

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => frontend.input.request_quit(),
            WindowEvent::CursorMoved { position, .. } => {
                let y = frontend.renderer.window_to_court_y(position);
                frontend.input.set_pointer(y);
            }
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(key),
                        ..
                    },
                ..
            } => frontend.input.on_key(key, state),
            WindowEvent::Resized(size) => {
                if let Err(err) = frontend.renderer.resize(size.width, size.height) {
                    error!("{:#}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                let size = *new_inner_size;
                if let Err(err) = frontend.renderer.resize(size.width, size.height) {
                    error!("{:#}", err);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            let now = Instant::now();
            if now >= next_tick {
                game.tick(&mut frontend);
                if game.is_terminated() {
                    info!(rounds = game.rounds_played, "goodbye");
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                next_tick += game.tick_interval();
                // Don't try to catch up after a stall
                if next_tick < now {
                    next_tick = now + game.tick_interval();
                }
            }
            *control_flow = ControlFlow::WaitUntil(next_tick);
        }
        Event::RedrawRequested(_) => {
            if let Err(err) = frontend.renderer.present() {
                error!("{:#}", err);
                *control_flow = ControlFlow::Exit;
            }
        }
        _ => {}
    });
}
