// Window + input.
// Visual: a window showing the texture; left click and S are the only controls.

use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, Window, WindowOptions};

pub struct Drawer {
    window: Window,   // the on-screen window you see
    was_down: bool,   // left button state last frame (for click edges)
}

impl Drawer {
    /// Create a window sized to the texture.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        // The image only changes on click; no need to spin faster than this.
        window.set_target_fps(60);
        Ok(Self { window, was_down: false })
    }

    /// Push the frame to the screen and pump window events.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// True once per left-button press (not while held).
    pub fn left_clicked(&mut self) -> bool {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let clicked = down && !self.was_down;
        self.was_down = down;
        clicked
    }

    /// S saves the texture; holding the key doesn't repeat.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}
