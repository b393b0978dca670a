use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("sprite buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    BadBuffer {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// A decoded image, one `0xAARRGGBB` value per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Sprite {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(width as usize, height as usize, rgba.as_raw())
    }

    /// Builds a sprite from tightly packed RGBA bytes.
    pub fn from_rgba(width: usize, height: usize, bytes: &[u8]) -> Result<Self, AssetError> {
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(AssetError::BadBuffer {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|p| u32::from_be_bytes([p[3], p[0], p[1], p[2]]))
            .collect();

        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

/// Every image the game knows about. A resource that failed to load is `None`
/// and its draw call is skipped.
#[derive(Clone, Debug, Default)]
pub struct Assets {
    pub hero: Option<Sprite>,
    pub enemy: Option<Sprite>,
    pub trophy: Option<Sprite>,
    pub explosion: Option<Sprite>,
}

impl Assets {
    pub const HERO: &'static str = "hero.png";
    pub const ENEMY: &'static str = "enemy_01.png";
    pub const TROPHY: &'static str = "trophy.png";
    pub const EXPLOSION: &'static str = "explosion_01.png";

    pub fn load(images_dir: &Path) -> Self {
        Self {
            hero: load_image(images_dir, Self::HERO),
            enemy: load_image(images_dir, Self::ENEMY),
            trophy: load_image(images_dir, Self::TROPHY),
            explosion: load_image(images_dir, Self::EXPLOSION),
        }
    }

    pub fn loaded_count(&self) -> usize {
        [&self.hero, &self.enemy, &self.trophy, &self.explosion]
            .iter()
            .filter(|s| s.is_some())
            .count()
    }
}

fn load_image(dir: &Path, name: &str) -> Option<Sprite> {
    let path = dir.join(name);
    log::info!("Resource: {}", path.display());

    match Sprite::load(&path) {
        Ok(sprite) => Some(sprite),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}
