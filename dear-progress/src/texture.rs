//! Texture ids and scoped texture ownership
//!
//! The continuous progress bar may draw its fill and background from image
//! files. The host allocates a texture id for each image the first time a
//! scheme is applied; the widget owns those ids through [`OwnedTexture`], which
//! hands them back to the surface when dropped. Replacing or clearing an image
//! drops the old handle, and so does dropping the widget.

use crate::progress_debug;
use crate::surface::Surface;
use std::fmt;
use std::rc::Rc;

/// Root directory image names are resolved against.
pub const IMAGE_ROOT: &str = "vgui/";

/// Host texture identifier
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TextureId(u32);

impl TextureId {
    /// Creates a new texture id with the given identifier
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl From<u32> for TextureId {
    #[inline]
    fn from(id: u32) -> Self {
        TextureId(id)
    }
}

/// Which of the two progress textures an image belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextureSlot {
    /// Drawn over the filled part of the bar
    Foreground = 0,
    /// Drawn over the whole bar behind the fill
    Background = 1,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 2] = [TextureSlot::Foreground, TextureSlot::Background];

    /// Settings key holding this slot's image name.
    pub const fn settings_key(self) -> &'static str {
        match self {
            TextureSlot::Foreground => "fg_texture",
            TextureSlot::Background => "bg_texture",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }
}

/// A texture id owned by a widget, released through the surface on drop.
pub struct OwnedTexture {
    id: TextureId,
    surface: Rc<dyn Surface>,
}

impl OwnedTexture {
    /// Allocates a new texture id on `surface`.
    pub fn allocate(surface: &Rc<dyn Surface>) -> Self {
        let id = surface.create_new_texture_id();
        progress_debug!("Allocated progress texture {}", id.id());
        Self {
            id,
            surface: Rc::clone(surface),
        }
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    /// Loads `path` into the owned texture.
    pub fn bind_file(&self, path: &str) {
        self.surface.draw_set_texture_file(self.id, path, true, false);
    }
}

impl Drop for OwnedTexture {
    fn drop(&mut self) {
        if self.surface.is_texture_id_valid(self.id) {
            self.surface.delete_texture_by_id(self.id);
            progress_debug!("Released progress texture {}", self.id.id());
        }
    }
}

impl fmt::Debug for OwnedTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedTexture").field("id", &self.id).finish()
    }
}

#[derive(Debug, Default)]
struct TextureEntry {
    name: Option<String>,
    path: Option<String>,
    handle: Option<OwnedTexture>,
}

/// Image names and texture handles for the foreground and background slots.
#[derive(Debug, Default)]
pub struct ProgressTextures {
    entries: [TextureEntry; 2],
}

impl ProgressTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Image name as configured, without the root prefix.
    pub fn name(&self, slot: TextureSlot) -> Option<&str> {
        self.entries[slot.index()].name.as_deref()
    }

    /// Resolved image path handed to the surface.
    pub fn path(&self, slot: TextureSlot) -> Option<&str> {
        self.entries[slot.index()].path.as_deref()
    }

    /// Allocated texture id, if the slot has been bound.
    pub fn id(&self, slot: TextureSlot) -> Option<TextureId> {
        self.entries[slot.index()].handle.as_ref().map(OwnedTexture::id)
    }

    /// Records a new image for `slot`. A different previous image releases its handle.
    pub fn set_name(&mut self, slot: TextureSlot, name: &str) {
        let entry = &mut self.entries[slot.index()];
        if entry.name.as_deref() == Some(name) {
            return;
        }
        entry.handle = None;
        entry.path = Some(format!("{IMAGE_ROOT}{name}"));
        entry.name = Some(name.to_owned());
    }

    /// Forgets the image for `slot` and releases its handle.
    pub fn clear(&mut self, slot: TextureSlot) {
        self.entries[slot.index()] = TextureEntry::default();
    }

    /// Allocates missing handles for every named slot and loads its image.
    pub fn bind_all(&mut self, surface: &Rc<dyn Surface>) {
        for entry in &mut self.entries {
            let Some(path) = entry.path.as_deref() else {
                continue;
            };
            let handle = entry
                .handle
                .get_or_insert_with(|| OwnedTexture::allocate(surface));
            handle.bind_file(path);
        }
    }
}
