use rand::Rng;

use crate::assets::Assets;
use crate::canvas::Canvas;
use crate::config::{GameConfig, BLACK};
use crate::enemies::EnemyGrid;
use crate::hero::Hero;
use crate::input::Controls;
use crate::starfield::Starfield;

pub struct SpaceWars {
    config: GameConfig,
    canvas: Canvas,
    assets: Assets,
    hero: Hero,
    enemies: EnemyGrid,
    starfield: Starfield,
    running: bool,
    mouse_down: bool,
    mouse_pos: Option<(f32, f32)>,
}

impl SpaceWars {
    #[cfg(feature = "debug_layers")]
    const TROPHY_PREVIEW: (i32, i32) = (600, 200);
    #[cfg(feature = "debug_layers")]
    const EXPLOSION_PREVIEW: (i32, i32) = (800, 200);

    pub fn new(config: GameConfig, assets: Assets, rng: &mut impl Rng) -> Self {
        let mut canvas = Canvas::new(config.window_width, config.window_height);
        canvas.fill(BLACK);

        let hero = Hero::new(config.hero_start(), config.hero_speed);
        let enemies = EnemyGrid::new(config.enemies.clone());
        let starfield = Starfield::new(
            rng,
            config.window_width,
            config.window_height,
            config.stars_per_layer,
            config.star_layers,
        );

        Self {
            config,
            canvas,
            assets,
            hero,
            enemies,
            starfield,
            running: true,
            mouse_down: false,
            mouse_pos: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn enemies(&self) -> &EnemyGrid {
        &self.enemies
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_mouse_down(&self) -> bool {
        self.mouse_down
    }

    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.mouse_pos
    }

    pub fn handle_input(&mut self, controls: &Controls) {
        if controls.quit {
            log::info!("Quit requested");
            self.running = false;
        }

        self.mouse_down = controls.mouse_down;
        self.mouse_pos = controls.mouse_pos;

        self.hero.steer(controls, self.config.hero_bounds());
    }

    /// Renders one frame onto the canvas. `ticks_ms` drives the enemy sway.
    pub fn draw_frame(&mut self, ticks_ms: u64) {
        self.draw_background();
        self.draw_hero();
        self.draw_enemies(ticks_ms);

        #[cfg(feature = "debug_layers")]
        {
            self.draw_items();
            self.draw_effects();
            self.draw_mouse_trail();
        }
    }

    fn draw_background(&mut self) {
        self.canvas.fill(BLACK);
        self.starfield.draw(&mut self.canvas);
    }

    fn draw_hero(&mut self) {
        if let Some(sprite) = &self.assets.hero {
            self.hero.draw(&mut self.canvas, sprite);
        }
    }

    fn draw_enemies(&mut self, ticks_ms: u64) {
        if let Some(sprite) = &self.assets.enemy {
            self.enemies.draw(&mut self.canvas, sprite, ticks_ms);
        }
    }

    #[cfg(feature = "debug_layers")]
    fn draw_items(&mut self) {
        if let Some(sprite) = &self.assets.trophy {
            let (x, y) = Self::TROPHY_PREVIEW;
            self.canvas.blit(sprite, x, y);
        }
    }

    #[cfg(feature = "debug_layers")]
    fn draw_effects(&mut self) {
        if let Some(sprite) = &self.assets.explosion {
            let (x, y) = Self::EXPLOSION_PREVIEW;
            self.canvas.blit(sprite, x, y);
        }
    }

    #[cfg(feature = "debug_layers")]
    fn draw_mouse_trail(&mut self) {
        if !self.mouse_down {
            return;
        }
        if let Some((x, y)) = self.mouse_pos {
            self.canvas.fill_circle(x as i32, y as i32, 5, crate::config::WHITE);
        }
    }
}
