//! Frontends for creating simple windowed applications with `morphx`.

use std::time::Duration;

use morphx_core::util::buf::Bitmap;

#[cfg(feature = "minifb")]
pub mod minifb;

/// Errors that can occur when creating or updating a window.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The windowing backend reported an error.
    #[cfg(feature = "minifb")]
    #[error("window error: {0}")]
    Window(#[from] ::minifb::Error),

    /// A window cannot have zero width or height.
    #[error("invalid window dimensions {0}×{1}")]
    InvalidDims(u32, u32),
}

/// Result type of frontend operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub mod dims {
    //! Common window sizes.

    /// Width and height of a window in pixels.
    pub type Dims = (u32, u32);

    pub const VGA_640_480: Dims = (640, 480);
    pub const SVGA_800_600: Dims = (800, 600);
    pub const XGA_1024_768: Dims = (1024, 768);
}

/// Per-frame state. The window run method passes an instance of `Frame`
/// to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Bitmap in which to draw. Persists across frames; nothing is cleared
    /// between them.
    pub bitmap: &'a mut Bitmap,
    /// Whether the window was resized since the previous frame. If so,
    /// `bitmap` has been replaced with a new, empty one of the new size.
    pub resized: bool,
    /// Reference to the window object.
    pub win: &'a mut Win,
}

impl<Win> Frame<'_, Win> {
    /// Returns the width and height of the bitmap.
    pub fn dims(&self) -> (usize, usize) {
        (self.bitmap.width(), self.bitmap.height())
    }
}
