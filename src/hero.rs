use crate::assets::Sprite;
use crate::canvas::Canvas;
use crate::input::Controls;

/// The player's ship. Only `x` ever changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hero {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl Hero {
    pub fn new((x, y): (f32, f32), speed: f32) -> Self {
        Self { x, y, speed }
    }

    /// Applies one frame of held arrow keys, then clamps to `bounds`.
    pub fn steer(&mut self, controls: &Controls, (min_x, max_x): (f32, f32)) {
        if controls.left {
            self.x -= self.speed;
        }
        if controls.right {
            self.x += self.speed;
        }
        self.x = self.x.clamp(min_x, max_x);
    }

    pub fn draw(&self, canvas: &mut Canvas, sprite: &Sprite) {
        canvas.blit(sprite, self.x as i32, self.y as i32);
    }
}
