#![cfg(feature = "debug_layers")]

use rand::rngs::StdRng;
use rand::SeedableRng;

use space_wars::assets::{Assets, Sprite};
use space_wars::config::{BLACK, WHITE};
use space_wars::input::Controls;
use space_wars::{GameConfig, SpaceWars};

fn dot(rgb: [u8; 3]) -> Sprite {
    Sprite::from_rgba(1, 1, &[rgb[0], rgb[1], rgb[2], 255]).unwrap()
}

fn previews() -> Assets {
    Assets {
        trophy: Some(dot([0x01, 0x02, 0x03])),
        explosion: Some(dot([0x04, 0x05, 0x06])),
        ..Assets::default()
    }
}

fn game(assets: Assets) -> SpaceWars {
    let config = GameConfig {
        stars_per_layer: 0,
        ..GameConfig::default()
    };
    SpaceWars::new(config, assets, &mut StdRng::seed_from_u64(7))
}

fn mouse(down: bool, pos: (f32, f32)) -> Controls {
    Controls {
        mouse_down: down,
        mouse_pos: Some(pos),
        ..Controls::default()
    }
}

// ── item and effect previews ─────────────────────────────────────────────────

#[test]
fn trophy_and_explosion_are_previewed() {
    let mut g = game(previews());
    g.draw_frame(0);

    let c = g.canvas();
    assert_eq!(c.pixel(600, 200), Some(0x00_01_02_03));
    assert_eq!(c.pixel(800, 200), Some(0x00_04_05_06));
}

#[test]
fn missing_preview_sprites_draw_nothing() {
    let mut g = game(Assets::default());
    g.draw_frame(0);
    assert!(g.canvas().buffer().iter().all(|&p| p == BLACK));
}

// ── mouse trail ──────────────────────────────────────────────────────────────

#[test]
fn held_button_draws_a_circle_under_the_cursor() {
    let mut g = game(Assets::default());
    g.handle_input(&mouse(true, (50.0, 60.0)));
    g.draw_frame(0);

    let c = g.canvas();
    assert_eq!(c.pixel(50, 60), Some(WHITE));
    assert_eq!(c.pixel(55, 60), Some(WHITE));
    assert_eq!(c.pixel(50, 55), Some(WHITE));
    assert_eq!(c.pixel(56, 60), Some(BLACK));
    assert_eq!(c.pixel(54, 64), Some(BLACK));

    let lit = c.buffer().iter().filter(|&&p| p == WHITE).count();
    assert_eq!(lit, 81); // lattice points inside a radius-5 disc
}

#[test]
fn released_button_draws_no_trail() {
    let mut g = game(Assets::default());
    g.handle_input(&mouse(false, (50.0, 60.0)));
    g.draw_frame(0);
    assert!(g.canvas().buffer().iter().all(|&p| p == BLACK));
}

#[test]
fn trail_disappears_after_release() {
    let mut g = game(Assets::default());
    g.handle_input(&mouse(true, (50.0, 60.0)));
    g.draw_frame(0);
    g.handle_input(&mouse(false, (50.0, 60.0)));
    g.draw_frame(0);
    assert_eq!(g.canvas().pixel(50, 60), Some(BLACK));
}
