use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use space_wars::assets::{AssetError, Assets, Sprite};

fn write_png(dir: &Path, name: &str, w: u32, h: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(w, h, Rgba(color))
        .save(dir.join(name))
        .unwrap();
}

#[test]
fn sprite_loads_png_as_argb() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "hero.png", 3, 2, [0x11, 0x22, 0x33, 0xff]);

    let sprite = Sprite::load(dir.path().join("hero.png")).unwrap();
    assert_eq!(sprite.width(), 3);
    assert_eq!(sprite.height(), 2);
    assert!(sprite.pixels().iter().all(|&p| p == 0xff_11_22_33));
}

#[test]
fn missing_file_reports_its_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.png");

    match Sprite::load(&path) {
        Err(AssetError::Decode { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[test]
fn garbage_file_fails_to_decode() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("enemy_01.png");
    fs::write(&path, b"definitely not a png").unwrap();

    let err = Sprite::load(&path).unwrap_err();
    assert!(err.to_string().contains("enemy_01.png"));
}

#[test]
fn from_rgba_checks_buffer_length() {
    let err = Sprite::from_rgba(2, 2, &[0; 15]).unwrap_err();
    assert!(matches!(
        err,
        AssetError::BadBuffer { expected: 16, actual: 15, .. }
    ));
}

#[test]
fn assets_load_what_exists() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), Assets::HERO, 64, 64, [255, 255, 255, 255]);
    write_png(dir.path(), Assets::ENEMY, 48, 32, [255, 0, 0, 255]);

    let assets = Assets::load(dir.path());
    assert_eq!(assets.loaded_count(), 2);
    assert_eq!(assets.hero.as_ref().map(Sprite::width), Some(64));
    assert_eq!(assets.enemy.as_ref().map(Sprite::height), Some(32));
    assert!(assets.trophy.is_none());
    assert!(assets.explosion.is_none());
}

#[test]
fn empty_directory_loads_nothing() {
    let dir = TempDir::new().unwrap();
    let assets = Assets::load(dir.path());
    assert_eq!(assets.loaded_count(), 0);
}
