use minifb::{Key, MouseButton, MouseMode, Window};

/// Keyboard and mouse state sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Controls {
    pub left: bool,
    pub right: bool,
    pub quit: bool,
    pub mouse_down: bool,
    pub mouse_pos: Option<(f32, f32)>,
}

impl Controls {
    pub fn sample(window: &Window) -> Self {
        Self {
            // Hero movement
            left: window.is_key_down(Key::Left),
            right: window.is_key_down(Key::Right),

            quit: !window.is_open() || window.is_key_down(Key::Escape),

            mouse_down: window.get_mouse_down(MouseButton::Left),
            mouse_pos: window.get_mouse_pos(MouseMode::Discard),
        }
    }
}
