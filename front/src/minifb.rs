//! Frontend using the `minifb` crate for window creation and event handling.

use std::{
    ops::ControlFlow::{self, Break},
    time::Instant,
};

use minifb::{Key, WindowOptions};
use tracing::{debug, info};

use morphx_core::util::buf::Bitmap;

use crate::{
    Error, Frame, Result,
    dims::{Dims, SVGA_800_600},
};

/// A lightweight wrapper of a `minifb` window.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The current width and height of the window.
    pub dims: Dims,
    // Reused between frames to avoid reallocating
    pixels: Vec<u32>,
}

/// Builder for creating `Window`s.
pub struct Builder<'title> {
    pub dims: Dims,
    pub title: &'title str,
    pub target_fps: Option<u32>,
    pub opts: WindowOptions,
}

impl Default for Builder<'_> {
    fn default() -> Self {
        Self {
            dims: SVGA_800_600,
            title: "// morphx application //",
            target_fps: Some(60),
            opts: WindowOptions::default(),
        }
    }
}

impl<'t> Builder<'t> {
    /// Sets the width and height of the window.
    pub fn dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }
    /// Sets the title of the window.
    pub fn title(mut self, title: &'t str) -> Self {
        self.title = title;
        self
    }
    /// Sets the frame rate cap of the window. `None` means unlimited
    /// frame rate (the main loop runs as fast as possible).
    pub fn target_fps(mut self, fps: Option<u32>) -> Self {
        self.target_fps = fps;
        self
    }
    /// Sets whether the user can resize the window.
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.opts.resize = resizable;
        self
    }
    /// Sets other `minifb` options.
    pub fn options(mut self, opts: WindowOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Creates the window.
    ///
    /// # Errors
    /// If either dimension is zero, or if `minifb` fails to create
    /// the window.
    pub fn build(self) -> Result<Window> {
        let Self { dims, title, target_fps, opts } = self;
        let (w, h) = dims;
        if w == 0 || h == 0 {
            return Err(Error::InvalidDims(w, h));
        }
        let mut imp = minifb::Window::new(title, w as usize, h as usize, opts)?;
        if let Some(fps) = target_fps {
            imp.set_target_fps(fps as usize);
        }
        info!(title, w, h, ?target_fps, "window created");
        Ok(Window { imp, dims, pixels: Vec::new() })
    }
}

impl Window {
    /// Returns a window builder.
    pub fn builder() -> Builder<'static> {
        Builder::default()
    }

    /// Updates the window content with the pixels of `bmp`.
    ///
    /// The bitmap is stretched or cropped by `minifb` if its size differs
    /// from the window size. Alpha is ignored.
    ///
    /// # Errors
    /// If `minifb` fails to update the window.
    pub fn present(&mut self, bmp: &Bitmap) -> Result<()> {
        self.pixels.clear();
        self.pixels.extend(bmp.argb_pixels());
        self.imp
            .update_with_buffer(&self.pixels, bmp.width(), bmp.height())?;
        Ok(())
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to draw the next frame.
    ///
    /// The bitmap passed to the callback persists between frames. When the
    /// window size changes, it is replaced with a new empty bitmap of the
    /// new size, and [`Frame::resized`] is set for that frame.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window via the GUI (e.g. titlebar close button);
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    ///
    /// # Errors
    /// If presenting a frame fails.
    pub fn run<F>(&mut self, mut frame_fn: F) -> Result<()>
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let (w, h) = self.dims;
        let mut bitmap = Bitmap::new(w as usize, h as usize);
        let mut frames = 0u64;

        let start = Instant::now();
        let mut last = start;
        loop {
            if self.should_quit() {
                break;
            }
            let resized = self.update_dims();
            if resized {
                let (w, h) = self.dims;
                bitmap = Bitmap::new(w as usize, h as usize);
            }
            let now = Instant::now();
            let frame = &mut Frame {
                t: now - start,
                dt: now - last,
                bitmap: &mut bitmap,
                resized,
                win: self,
            };
            last = now;

            if let Break(()) = frame_fn(frame) {
                break;
            }
            self.present(&bitmap)?;
            frames += 1;
        }
        let secs = start.elapsed().as_secs_f64();
        info!(frames, secs, fps = frames as f64 / secs, "main loop finished");
        Ok(())
    }

    /// Checks the current window size, updating `self.dims` and returning
    /// `true` if it has changed. A minimized window reports zero size,
    /// which is ignored.
    fn update_dims(&mut self) -> bool {
        let (w, h) = self.imp.get_size();
        let (Ok(w), Ok(h)) = (u32::try_from(w), u32::try_from(h)) else {
            return false;
        };
        if w == 0 || h == 0 || (w, h) == self.dims {
            return false;
        }
        debug!(from = ?self.dims, to = ?(w, h), "window resized");
        self.dims = (w, h);
        true
    }

    fn should_quit(&self) -> bool {
        !self.imp.is_open() || self.imp.is_key_down(Key::Escape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let b = Window::builder();
        assert_eq!(b.dims, SVGA_800_600);
        assert_eq!(b.target_fps, Some(60));
        assert!(!b.opts.resize);
    }

    #[test]
    fn builder_setters() {
        let b = Window::builder()
            .dims((320, 200))
            .title("test")
            .target_fps(None)
            .resizable(true);
        assert_eq!(b.dims, (320, 200));
        assert_eq!(b.title, "test");
        assert_eq!(b.target_fps, None);
        assert!(b.opts.resize);
    }

    #[test]
    fn zero_dims_are_rejected() {
        let res = Window::builder().dims((0, 100)).build();
        assert!(matches!(res, Err(Error::InvalidDims(0, 100))));
    }
}
