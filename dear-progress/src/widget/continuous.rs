//! Continuous progress bar
//!
//! Same progress and direction handling as [`ProgressBar`], but the fill is a
//! single gapless rectangle proportional to the panel size. The bar can
//! optionally draw its fill and background from image textures.
//!
use crate::scheme::Scheme;
use crate::settings::{Properties, SettingDescriptor, SettingKind};
use crate::surface::{Rect, Surface};
use crate::texture::{ProgressTextures, TextureId, TextureSlot};
use crate::widget::{PanelBase, Paintable, ProgressBar, ProgressDirection};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

/// Gapless progress bar with optional foreground/background textures.
///
/// Progress, direction and dialog-variable handling come from the wrapped
/// [`ProgressBar`], reachable through `Deref`.
#[derive(Debug, Default)]
pub struct ContinuousProgressBar {
    bar: ProgressBar,
    using_textures: bool,
    textures: ProgressTextures,
}

impl Deref for ContinuousProgressBar {
    type Target = ProgressBar;

    fn deref(&self) -> &ProgressBar {
        &self.bar
    }
}

impl DerefMut for ContinuousProgressBar {
    fn deref_mut(&mut self) -> &mut ProgressBar {
        &mut self.bar
    }
}

impl ContinuousProgressBar {
    pub const CLASS_NAME: &'static str = "ContinuousProgressBar";

    pub const SETTINGS: &'static [SettingDescriptor] = &[
        SettingDescriptor::new("using_textures", SettingKind::Bool),
        SettingDescriptor::new("fg_texture", SettingKind::String),
        SettingDescriptor::new("bg_texture", SettingKind::String),
    ];

    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new(),
            using_textures: false,
            textures: ProgressTextures::new(),
        }
    }

    #[inline]
    pub fn using_textures(&self) -> bool {
        self.using_textures
    }

    pub fn set_using_textures(&mut self, using_textures: bool) {
        self.using_textures = using_textures;
    }

    /// Sets or clears the image drawn in `slot`.
    ///
    /// Setting an image switches the bar to texture mode, turns border
    /// painting off and invalidates layout so the next scheme pass loads it.
    /// Clearing releases the slot's texture and returns to solid fills.
    pub fn set_image(&mut self, image_name: Option<&str>, slot: TextureSlot) {
        let panel = self.bar.panel_mut();
        match image_name {
            Some(name) => {
                self.textures.set_name(slot, name);
                self.using_textures = true;
                panel.set_paint_border_enabled(false);
                panel.invalidate_layout();
            }
            None => {
                self.textures.clear(slot);
                self.using_textures = false;
                panel.set_paint_border_enabled(true);
            }
        }
    }

    pub fn image_name(&self, slot: TextureSlot) -> Option<&str> {
        self.textures.name(slot)
    }

    pub fn texture_id(&self, slot: TextureSlot) -> Option<TextureId> {
        self.textures.id(slot)
    }

    /// Area covered by the fill for the current progress and direction.
    pub fn fill_rect(&self) -> Rect {
        let (wide, tall) = self.bar.panel().size();
        let progress = self.bar.progress();
        match self.bar.direction() {
            ProgressDirection::East => Rect::new(0, 0, (wide as f32 * progress) as i32, tall),
            ProgressDirection::West => {
                Rect::new((wide as f32 * (1.0 - progress)) as i32, 0, wide, tall)
            }
            ProgressDirection::North => {
                Rect::new(0, (tall as f32 * (1.0 - progress)) as i32, wide, tall)
            }
            ProgressDirection::South => Rect::new(0, 0, wide, (tall as f32 * progress) as i32),
        }
    }
}

impl Paintable for ContinuousProgressBar {
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    fn panel(&self) -> &PanelBase {
        self.bar.panel()
    }

    fn panel_mut(&mut self) -> &mut PanelBase {
        self.bar.panel_mut()
    }

    fn paint_background(&self, surface: &dyn Surface) {
        if !self.using_textures {
            return self.bar.paint_background(surface);
        }

        // Without a background image the foreground one is stretched behind the fill
        let texture = self
            .textures
            .id(TextureSlot::Background)
            .or_else(|| self.textures.id(TextureSlot::Foreground));
        let Some(texture) = texture else {
            return self.bar.paint_background(surface);
        };

        let panel = self.bar.panel();
        surface.draw_set_texture(texture);
        surface.set_draw_color(panel.bg_color());
        surface.draw_textured_rect(panel.bounds());
    }

    fn paint(&self, surface: &dyn Surface) {
        surface.set_draw_color(self.bar.panel().fg_color());

        let rect = self.fill_rect();
        let texture = self
            .using_textures
            .then(|| self.textures.id(TextureSlot::Foreground))
            .flatten();
        match texture {
            Some(texture) => {
                surface.draw_set_texture(texture);
                surface.draw_textured_rect(rect);
            }
            None => surface.draw_filled_rect(rect),
        }
    }

    fn apply_settings(&mut self, settings: &Properties) {
        self.bar.apply_settings(settings);

        if let Some(using_textures) = settings.get_bool("using_textures") {
            self.using_textures = using_textures;
        }
        for slot in TextureSlot::ALL {
            // empty names are what get_settings writes for unset slots
            if let Some(name) = settings.get_str(slot.settings_key()).filter(|n| !n.is_empty()) {
                self.set_image(Some(&*name), slot);
            }
        }

        self.bar.panel_mut().invalidate_layout();
    }

    fn get_settings(&self, out: &mut Properties) {
        self.bar.get_settings(out);
        out.set_bool("using_textures", self.using_textures);
        for slot in TextureSlot::ALL {
            out.set_string(slot.settings_key(), self.textures.name(slot).unwrap_or_default());
        }
    }

    fn apply_scheme(&mut self, scheme: &dyn Scheme, surface: &Rc<dyn Surface>) {
        self.bar.apply_scheme_colors(scheme);
        self.textures.bind_all(surface);
    }

    fn on_dialog_variables_changed(&mut self, variables: &Properties) {
        self.bar.on_dialog_variables_changed(variables);
    }

    fn settings_descriptors(&self) -> Vec<SettingDescriptor> {
        let mut descriptors = self.bar.settings_descriptors();
        descriptors.extend_from_slice(Self::SETTINGS);
        descriptors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::recording::{DrawCmd, RecordingSurface};
    use crate::scheme::StaticScheme;
    use pretty_assertions::assert_eq;

    fn bar(progress: f32, direction: ProgressDirection) -> ContinuousProgressBar {
        let mut bar = ContinuousProgressBar::new();
        bar.panel_mut().set_size(200, 20);
        bar.set_progress(progress);
        bar.set_direction(direction);
        bar
    }

    #[test]
    fn fill_rect_is_proportional_per_direction() {
        assert_eq!(bar(0.25, ProgressDirection::East).fill_rect(), Rect::new(0, 0, 50, 20));
        assert_eq!(bar(0.25, ProgressDirection::West).fill_rect(), Rect::new(150, 0, 200, 20));
        assert_eq!(bar(0.25, ProgressDirection::North).fill_rect(), Rect::new(0, 15, 200, 20));
        assert_eq!(bar(0.25, ProgressDirection::South).fill_rect(), Rect::new(0, 0, 200, 5));
    }

    #[test]
    fn solid_paint_without_textures() {
        let bar = bar(0.5, ProgressDirection::East);
        let surface = RecordingSurface::new();
        bar.paint(&surface);
        assert_eq!(
            surface.commands(),
            vec![
                DrawCmd::SetColor(Color::WHITE),
                DrawCmd::FilledRect(Rect::new(0, 0, 100, 20)),
            ]
        );
    }

    #[test]
    fn textured_paint_after_scheme_pass() {
        let rec = Rc::new(RecordingSurface::new());
        let surface: Rc<dyn Surface> = rec.clone();
        let mut bar = bar(0.5, ProgressDirection::East);
        bar.set_image(Some("progress_fg"), TextureSlot::Foreground);
        assert!(bar.using_textures());
        assert!(!bar.panel().paint_border_enabled());
        assert!(bar.panel().is_layout_invalid());

        bar.apply_scheme(&StaticScheme::new(), &surface);
        let fg = bar.texture_id(TextureSlot::Foreground).unwrap();
        assert_eq!(rec.texture_file(fg).as_deref(), Some("vgui/progress_fg"));

        bar.paint_background(&*rec);
        bar.paint(&*rec);
        assert_eq!(
            rec.commands(),
            vec![
                DrawCmd::SetTexture(fg),
                DrawCmd::SetColor(Color::BLACK),
                DrawCmd::TexturedRect(Rect::new(0, 0, 200, 20)),
                DrawCmd::SetColor(Color::WHITE),
                DrawCmd::SetTexture(fg),
                DrawCmd::TexturedRect(Rect::new(0, 0, 100, 20)),
            ]
        );
    }

    #[test]
    fn background_texture_preferred_for_background() {
        let rec = Rc::new(RecordingSurface::new());
        let surface: Rc<dyn Surface> = rec.clone();
        let mut bar = bar(0.0, ProgressDirection::East);
        bar.set_image(Some("fg"), TextureSlot::Foreground);
        bar.set_image(Some("bg"), TextureSlot::Background);
        bar.apply_scheme(&StaticScheme::new(), &surface);
        let bg = bar.texture_id(TextureSlot::Background).unwrap();

        bar.paint_background(&*rec);
        assert_eq!(rec.commands()[0], DrawCmd::SetTexture(bg));
    }

    #[test]
    fn texture_mode_without_handles_falls_back_to_fill() {
        let mut bar = bar(0.5, ProgressDirection::East);
        bar.set_using_textures(true);
        let surface = RecordingSurface::new();
        bar.paint_background(&surface);
        bar.paint(&surface);
        assert_eq!(surface.textured_rects(), Vec::<Rect>::new());
        assert_eq!(surface.filled_rects().len(), 2);
    }

    #[test]
    fn clearing_an_image_releases_its_texture() {
        let rec = Rc::new(RecordingSurface::new());
        let surface: Rc<dyn Surface> = rec.clone();
        let mut bar = bar(0.5, ProgressDirection::East);
        bar.set_image(Some("fg"), TextureSlot::Foreground);
        bar.apply_scheme(&StaticScheme::new(), &surface);
        assert_eq!(rec.live_texture_count(), 1);

        bar.set_image(None, TextureSlot::Foreground);
        assert_eq!(rec.live_texture_count(), 0);
        assert!(!bar.using_textures());
        assert!(bar.panel().paint_border_enabled());
        assert_eq!(bar.image_name(TextureSlot::Foreground), None);
    }
}
