//! Headless recording surface.
//!
//! [`RecordingSurface`] implements [`Surface`] without a GPU: draw calls are
//! appended to a command list and textures live in an in-memory table. Useful
//! for tests, snapshotting a widget's output, or hosts that replay commands
//! into their own renderer.

use crate::color::Color;
use crate::surface::{Rect, Surface};
use crate::texture::TextureId;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// A recorded draw command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    SetColor(Color),
    FilledRect(Rect),
    TexturedRect(Rect),
    SetTexture(TextureId),
    Border { name: String, rect: Rect },
}

/// Surface that records every call instead of rendering.
#[derive(Debug)]
pub struct RecordingSurface {
    commands: RefCell<Vec<DrawCmd>>,
    textures: RefCell<BTreeMap<TextureId, Option<String>>>,
    next_texture: Cell<u32>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            textures: RefCell::new(BTreeMap::new()),
            next_texture: Cell::new(1),
        }
    }

    /// Copy of the commands recorded so far.
    pub fn commands(&self) -> Vec<DrawCmd> {
        self.commands.borrow().clone()
    }

    /// Returns and clears the recorded commands.
    pub fn take_commands(&self) -> Vec<DrawCmd> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    /// Filled rectangles only, in draw order.
    pub fn filled_rects(&self) -> Vec<Rect> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::FilledRect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Textured rectangles only, in draw order.
    pub fn textured_rects(&self) -> Vec<Rect> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::TexturedRect(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Number of rectangle draws of either kind.
    pub fn rect_count(&self) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::FilledRect(_) | DrawCmd::TexturedRect(_)))
            .count()
    }

    pub fn live_texture_count(&self) -> usize {
        self.textures.borrow().len()
    }

    /// Image path loaded into `id`, if any.
    pub fn texture_file(&self, id: TextureId) -> Option<String> {
        self.textures.borrow().get(&id).cloned().flatten()
    }
}

impl Surface for RecordingSurface {
    fn set_draw_color(&self, color: Color) {
        self.commands.borrow_mut().push(DrawCmd::SetColor(color));
    }

    fn draw_filled_rect(&self, rect: Rect) {
        self.commands.borrow_mut().push(DrawCmd::FilledRect(rect));
    }

    fn draw_textured_rect(&self, rect: Rect) {
        self.commands.borrow_mut().push(DrawCmd::TexturedRect(rect));
    }

    fn draw_set_texture(&self, id: TextureId) {
        self.commands.borrow_mut().push(DrawCmd::SetTexture(id));
    }

    fn draw_border(&self, border: &str, rect: Rect) {
        self.commands.borrow_mut().push(DrawCmd::Border {
            name: border.to_owned(),
            rect,
        });
    }

    fn create_new_texture_id(&self) -> TextureId {
        let id = TextureId::new(self.next_texture.get());
        self.next_texture.set(id.id() + 1);
        self.textures.borrow_mut().insert(id, None);
        id
    }

    fn draw_set_texture_file(&self, id: TextureId, path: &str, _hardware_filter: bool, force_reload: bool) {
        let mut textures = self.textures.borrow_mut();
        if let Some(slot) = textures.get_mut(&id) {
            if force_reload || slot.as_deref() != Some(path) {
                *slot = Some(path.to_owned());
            }
        }
    }

    fn is_texture_id_valid(&self, id: TextureId) -> bool {
        self.textures.borrow().contains_key(&id)
    }

    fn delete_texture_by_id(&self, id: TextureId) {
        self.textures.borrow_mut().remove(&id);
    }
}
