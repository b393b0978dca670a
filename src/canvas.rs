use crate::assets::Sprite;
use crate::config::Color;

/// Off-screen frame buffer, pushed to the window once per frame.
pub struct Canvas {
    width: usize,
    height: usize,
    buffer: Vec<u32>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn fill(&mut self, color: Color) {
        self.buffer.iter_mut().for_each(|p| *p = color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.buffer[i])
    }

    /// Out-of-bounds writes are dropped.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.buffer[i] = color;
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.put_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Draws `sprite` with its top-left corner at `(x, y)`, alpha-blended over
    /// what is already on the canvas.
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        let (w, h) = (self.width as i32, self.height as i32);
        let (sw, sh) = (sprite.width() as i32, sprite.height() as i32);

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + sw).min(w);
        let y1 = (y + sh).min(h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let src = sprite.pixels();
        for dy in y0..y1 {
            let src_row = ((dy - y) * sw) as usize;
            let dst_row = (dy * w) as usize;
            for dx in x0..x1 {
                let s = src[src_row + (dx - x) as usize];
                let d = &mut self.buffer[dst_row + dx as usize];
                *d = blend(s, *d);
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x + y * self.width)
    }
}

/// Source-over blend of an `0xAARRGGBB` pixel onto an opaque `0x00RRGGBB` one.
fn blend(src: u32, dst: u32) -> u32 {
    let alpha = src >> 24;
    match alpha {
        0 => dst,
        0xff => src & 0x00_ff_ff_ff,
        _ => {
            let inv = 0xff - alpha;
            let channel = |shift: u32| {
                let s = (src >> shift) & 0xff;
                let d = (dst >> shift) & 0xff;
                ((s * alpha + d * inv + 127) / 0xff) << shift
            };
            channel(16) | channel(8) | channel(0)
        }
    }
}
