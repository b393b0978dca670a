use rand::Rng;

use crate::canvas::Canvas;
use crate::config::{Color, LayerSpec};

/// One parallax layer: fixed points that all scroll down at the same rate.
#[derive(Clone, Debug, PartialEq)]
pub struct StarLayer {
    points: Vec<(u32, u32)>,
    speed: u32,
    offset: u32,
    color: Color,
}

impl StarLayer {
    pub fn new(points: Vec<(u32, u32)>, spec: LayerSpec) -> Self {
        Self {
            points,
            speed: spec.speed,
            offset: 0,
            color: spec.color,
        }
    }

    pub fn scatter(
        rng: &mut impl Rng,
        width: u32,
        height: u32,
        count: usize,
        spec: LayerSpec,
    ) -> Self {
        if width == 0 || height == 0 {
            return Self::new(Vec::new(), spec);
        }
        let points = (0..count)
            .map(|_| (rng.gen_range(0..width), rng.gen_range(0..height)))
            .collect();
        Self::new(points, spec)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Points at their current scrolled position. Nothing is visible on a
    /// zero-height screen.
    pub fn scrolled(&self, height: u32) -> impl Iterator<Item = (u32, u32)> + '_ {
        let offset = self.offset;
        let visible = if height == 0 { &[][..] } else { &self.points[..] };
        visible
            .iter()
            .map(move |&(x, y)| (x, (y + offset) % height))
    }

    /// The offset is kept below `height`, which leaves `scrolled` unchanged.
    pub fn advance(&mut self, height: u32) {
        if height > 0 {
            self.offset = (self.offset + self.speed) % height;
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        let height = canvas.height() as u32;
        for (x, y) in self.scrolled(height) {
            canvas.put_pixel(x as i32, y as i32, self.color);
        }
    }
}

pub struct Starfield {
    layers: [StarLayer; 3],
    height: u32,
}

impl Starfield {
    pub fn new(
        rng: &mut impl Rng,
        width: usize,
        height: usize,
        stars_per_layer: usize,
        specs: [LayerSpec; 3],
    ) -> Self {
        let (w, h) = (width as u32, height as u32);
        let layers =
            specs.map(|spec| StarLayer::scatter(&mut *rng, w, h, stars_per_layer, spec));
        Self { layers, height: h }
    }

    pub fn layers(&self) -> &[StarLayer; 3] {
        &self.layers
    }

    /// Draws every layer back to front, then scrolls them for the next frame.
    pub fn draw(&mut self, canvas: &mut Canvas) {
        for layer in &self.layers {
            layer.draw(canvas);
        }
        for layer in &mut self.layers {
            layer.advance(self.height);
        }
    }
}
