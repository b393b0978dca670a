use crate::assets::Sprite;
use crate::canvas::Canvas;
use crate::config::EnemyGridConfig;

/// A fixed formation of enemies. Even rows sway right while odd rows sway
/// left, all driven by one sine of elapsed time.
#[derive(Clone, Debug, PartialEq)]
pub struct EnemyGrid {
    config: EnemyGridConfig,
    spacing_x: f32,
}

impl EnemyGrid {
    pub fn new(config: EnemyGridConfig) -> Self {
        let spacing_x = config.spacing_x();
        Self { config, spacing_x }
    }

    pub fn len(&self) -> usize {
        self.config.rows * self.config.columns
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn spacing_x(&self) -> f32 {
        self.spacing_x
    }

    /// Horizontal offset shared by the whole grid at `ticks_ms`.
    /// Computed in `f64` so the phase stays accurate over long sessions.
    pub fn sway(&self, ticks_ms: u64) -> f32 {
        ((ticks_ms as f64 * self.config.sway_speed).sin() * self.config.sway_amplitude) as f32
    }

    /// Top-left corner of every enemy, row by row.
    pub fn positions(&self, ticks_ms: u64) -> impl Iterator<Item = (f32, f32)> + '_ {
        let sway = self.sway(ticks_ms);
        let c = &self.config;

        (0..c.rows).flat_map(move |row| {
            let offset = if row % 2 == 0 { sway } else { -sway };
            (0..c.columns).map(move |col| {
                (
                    c.start_x + self.spacing_x * col as f32 + offset,
                    c.start_y + c.spacing_y * row as f32,
                )
            })
        })
    }

    pub fn draw(&self, canvas: &mut Canvas, sprite: &Sprite, ticks_ms: u64) {
        for (x, y) in self.positions(ticks_ms) {
            canvas.blit(sprite, x as i32, y as i32);
        }
    }
}
