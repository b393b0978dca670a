use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

/// RGB colour packed as `0x00RRGGBB`, the layout minifb expects.
pub type Color = u32;

pub const BLACK: Color = 0x00_00_00_00;
pub const WHITE: Color = 0x00_ff_ff_ff;
pub const LIGHT_GRAY: Color = 0x00_c8_c8_c8;
pub const DARK_GRAY: Color = 0x00_96_96_96;

/// Scroll speed (pixels per frame) and colour of one parallax layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSpec {
    pub speed: u32,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyGridConfig {
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub columns: usize,
    pub rows: usize,
    pub spacing_y: f32,
    /// Radians per millisecond.
    pub sway_speed: f64,
    pub sway_amplitude: f64,
}

impl EnemyGridConfig {
    pub fn spacing_x(&self) -> f32 {
        if self.columns > 1 {
            (self.end_x - self.start_x) / (self.columns - 1) as f32
        } else {
            0.0
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub version: String,
    pub fps: u32,
    pub window_width: usize,
    pub window_height: usize,

    pub hero_size: f32,
    pub hero_speed: f32,
    pub hero_margin: f32,

    pub enemies: EnemyGridConfig,

    pub stars_per_layer: usize,
    pub star_layers: [LayerSpec; 3],

    pub resources_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        let window_width = 1600;
        let window_height = 900;

        Self {
            version: "v0.0.1".to_owned(),
            fps: 60,
            window_width,
            window_height,

            hero_size: 64.0,
            hero_speed: 4.0,
            hero_margin: 100.0,

            enemies: EnemyGridConfig {
                start_x: 200.0,
                start_y: 100.0,
                end_x: window_width as f32 - 200.0 - 64.0,
                columns: 10,
                rows: 6,
                spacing_y: 60.0,
                sway_speed: 0.001,
                sway_amplitude: 100.0,
            },

            stars_per_layer: 700,
            star_layers: [
                LayerSpec { speed: 1, color: DARK_GRAY },
                LayerSpec { speed: 2, color: LIGHT_GRAY },
                LayerSpec { speed: 3, color: WHITE },
            ],

            resources_dir: PathBuf::from("resource"),
            log_file: PathBuf::from("game.log"),
        }
    }
}

impl GameConfig {
    pub const RESOURCES_VAR: &'static str = "SPACE_WARS_RESOURCES";
    pub const LOG_VAR: &'static str = "SPACE_WARS_LOG";
    pub const FPS_VAR: &'static str = "SPACE_WARS_FPS";

    /// Defaults with any `SPACE_WARS_*` environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(dir) = env::var_os(Self::RESOURCES_VAR) {
            config.resources_dir = PathBuf::from(dir);
        }
        config.log_file = Self::log_file_from_env();
        if let Ok(raw) = env::var(Self::FPS_VAR) {
            config.fps = parse_fps(&raw)?;
        }

        Ok(config)
    }

    /// Log path on its own, so logging can start before the rest is parsed.
    pub fn log_file_from_env() -> PathBuf {
        env::var_os(Self::LOG_VAR)
            .map_or_else(|| Self::default().log_file, PathBuf::from)
    }

    pub fn title(&self) -> String {
        format!("Space Wars Game {}", self.version)
    }

    /// Leftmost and rightmost x the hero sprite may occupy.
    pub fn hero_bounds(&self) -> (f32, f32) {
        let right = self.window_width as f32 - self.hero_margin - self.hero_size;
        (self.hero_margin, right)
    }

    pub fn hero_start(&self) -> (f32, f32) {
        (
            (self.window_width as f32 - self.hero_size) / 2.0,
            self.window_height as f32 - 150.0,
        )
    }

    pub fn images_dir(&self) -> PathBuf {
        self.resources_dir.join("img")
    }

    pub fn sounds_dir(&self) -> PathBuf {
        self.resources_dir.join("sound")
    }
}

pub fn parse_fps(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(fps) if fps > 0 => Ok(fps),
        _ => Err(ConfigError::InvalidNumber {
            var: GameConfig::FPS_VAR,
            value: raw.to_owned(),
        }),
    }
}
