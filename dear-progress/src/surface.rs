//! Host drawing surface
//!
//! Progress widgets never own a renderer. Every frame they are handed a
//! [`Surface`] and emit a handful of immediate-mode primitives through it:
//! colored rectangles, textured rectangles and the border of the panel.
//! Texture lifetime calls live on the same trait because the host that draws
//! the textures is also the one that owns them.
//!
//! All methods take `&self`; a surface behaves like an immediate-mode context
//! and keeps whatever mutable state it needs internally.

use crate::color::Color;
use crate::texture::TextureId;

/// Integer rectangle in panel-local pixels, `(x0, y0)` inclusive to `(x1, y1)` exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// Creates a rectangle from its corners.
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle covering a whole `wide` x `tall` panel.
    #[inline]
    pub const fn from_size(wide: i32, tall: i32) -> Self {
        Self::new(0, 0, wide, tall)
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    #[inline]
    pub const fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// True when the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Drawing and texture primitives a host toolkit provides to widgets.
pub trait Surface {
    /// Sets the color used by subsequent rectangle draws.
    fn set_draw_color(&self, color: Color);

    /// Fills `rect` with the current draw color.
    fn draw_filled_rect(&self, rect: Rect);

    /// Draws `rect` with the bound texture, tinted by the current draw color.
    fn draw_textured_rect(&self, rect: Rect);

    /// Binds a texture for subsequent textured draws.
    fn draw_set_texture(&self, id: TextureId);

    /// Paints a named scheme border around `rect`.
    fn draw_border(&self, border: &str, rect: Rect);

    /// Allocates a fresh texture id.
    fn create_new_texture_id(&self) -> TextureId;

    /// Loads an image file into an allocated texture id.
    fn draw_set_texture_file(&self, id: TextureId, path: &str, hardware_filter: bool, force_reload: bool);

    /// Whether `id` currently names a live texture.
    fn is_texture_id_valid(&self, id: TextureId) -> bool;

    /// Releases a texture id.
    fn delete_texture_by_id(&self, id: TextureId);
}
