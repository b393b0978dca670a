#![deny(clippy::pedantic)]

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use minifb::{Scale, Window, WindowOptions};

use space_wars::assets::Assets;
use space_wars::clock::FrameClock;
use space_wars::input::Controls;
use space_wars::{GameConfig, SpaceWars};

fn main() -> Result<()> {
    init_logging(&GameConfig::log_file_from_env());
    let config = GameConfig::from_env()
        .map_err(|e| {
            log::error!("{}", e);
            e
        })
        .context("Invalid configuration")?;

    log::info!("Images Path: {}", config.images_dir().display());
    log::info!("Sounds Path: {}", config.sounds_dir().display());

    // Create window
    let mut window = Window::new(
        &config.title(),
        config.window_width,
        config.window_height,
        WindowOptions {
            borderless: false,
            title: true,
            resize: false,
            scale: Scale::X1,
            ..WindowOptions::default()
        },
    )
    .context("Could not create window")?;
    window.set_cursor_visibility(false);

    let assets = Assets::load(&config.images_dir());
    log::debug!("{} of 4 images loaded", assets.loaded_count());

    let mut clock = FrameClock::new(config.fps);
    let mut game = SpaceWars::new(config, assets, &mut rand::thread_rng());

    while game.is_running() {
        game.handle_input(&Controls::sample(&window));
        if !game.is_running() {
            break;
        }

        game.draw_frame(clock.ticks_ms());

        let canvas = game.canvas();
        window
            .update_with_buffer(canvas.buffer(), canvas.width(), canvas.height())
            .unwrap_or_else(|e| log::warn!("Failed to update window buffer: {}", e));

        clock.tick();
    }

    log::info!("Shutting down");
    Ok(())
}

/// Logs go to the configured file, or stderr if it cannot be created.
/// `RUST_LOG` overrides the default `debug` filter.
fn init_logging(log_file: &Path) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("debug"));
    builder.format(|buf, record| {
        writeln!(buf, "{}: {}: {}", buf.timestamp(), record.level(), record.args())
    });

    match File::create(log_file) {
        Ok(file) => {
            builder.target(Target::Pipe(Box::new(file))).init();
        }
        Err(e) => {
            builder.init();
            log::warn!("Could not open {}: {}", log_file.display(), e);
        }
    }

    log::info!("Log Init:");
}
