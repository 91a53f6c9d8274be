use crate::color::Color;
use crate::error::{ProgressError, ProgressResult};
use crate::scheme::Scheme;
use crate::settings::{Properties, SettingDescriptor, SettingKind};
use crate::surface::{Rect, Surface};
use std::rc::Rc;

pub mod continuous;
pub mod progress;

pub use self::continuous::*;
pub use self::progress::*;

bitflags::bitflags! {
    /// State flags shared by every panel
    #[repr(transparent)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PanelFlags: u32 {
        /// No flags
        const NONE = 0;
        /// The panel asked the host to repaint it
        const REPAINT = 1 << 0;
        /// Layout (and the scheme pass that follows it) must run again
        const LAYOUT_INVALID = 1 << 1;
        /// The scheme border is drawn after the foreground
        const PAINT_BORDER = 1 << 2;
    }
}

/// Geometry, colors and flags every widget carries.
#[derive(Clone, Debug)]
pub struct PanelBase {
    wide: i32,
    tall: i32,
    fg_color: Color,
    bg_color: Color,
    border: Option<String>,
    flags: PanelFlags,
    repaint_requests: u32,
}

impl Default for PanelBase {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelBase {
    pub const BASE_SETTINGS: &'static [SettingDescriptor] = &[
        SettingDescriptor::new("wide", SettingKind::Integer),
        SettingDescriptor::new("tall", SettingKind::Integer),
    ];

    pub fn new() -> Self {
        Self {
            wide: 64,
            tall: 24,
            fg_color: Color::WHITE,
            bg_color: Color::BLACK,
            border: None,
            flags: PanelFlags::PAINT_BORDER | PanelFlags::LAYOUT_INVALID,
            repaint_requests: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.wide, self.tall)
    }

    pub fn set_size(&mut self, wide: i32, tall: i32) {
        if (wide, tall) != (self.wide, self.tall) {
            self.wide = wide;
            self.tall = tall;
            self.invalidate_layout();
            self.repaint();
        }
    }

    /// Full panel rectangle in local coordinates.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.wide, self.tall)
    }

    #[inline]
    pub fn fg_color(&self) -> Color {
        self.fg_color
    }

    pub fn set_fg_color(&mut self, color: Color) {
        self.fg_color = color;
    }

    #[inline]
    pub fn bg_color(&self) -> Color {
        self.bg_color
    }

    pub fn set_bg_color(&mut self, color: Color) {
        self.bg_color = color;
    }

    pub fn border(&self) -> Option<&str> {
        self.border.as_deref()
    }

    pub fn set_border(&mut self, border: Option<String>) {
        self.border = border;
    }

    #[inline]
    pub fn flags(&self) -> PanelFlags {
        self.flags
    }

    /// Asks the host for a repaint.
    pub fn repaint(&mut self) {
        self.flags.insert(PanelFlags::REPAINT);
        self.repaint_requests += 1;
    }

    /// Number of repaint requests made over the panel's lifetime.
    #[inline]
    pub fn repaint_requests(&self) -> u32 {
        self.repaint_requests
    }

    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.flags.contains(PanelFlags::REPAINT)
    }

    pub fn clear_repaint(&mut self) {
        self.flags.remove(PanelFlags::REPAINT);
    }

    pub fn invalidate_layout(&mut self) {
        self.flags.insert(PanelFlags::LAYOUT_INVALID);
    }

    #[inline]
    pub fn is_layout_invalid(&self) -> bool {
        self.flags.contains(PanelFlags::LAYOUT_INVALID)
    }

    #[inline]
    pub fn paint_border_enabled(&self) -> bool {
        self.flags.contains(PanelFlags::PAINT_BORDER)
    }

    pub fn set_paint_border_enabled(&mut self, enabled: bool) {
        self.flags.set(PanelFlags::PAINT_BORDER, enabled);
    }

    /// Reads the panel geometry; missing keys keep the current size.
    pub fn apply_settings(&mut self, settings: &Properties) {
        let wide = settings.get_int("wide", self.wide);
        let tall = settings.get_int("tall", self.tall);
        self.set_size(wide, tall);
    }

    pub fn get_settings(&self, out: &mut Properties) {
        out.set_int("wide", self.wide);
        out.set_int("tall", self.tall);
    }

    /// Marks the scheme pass as done.
    pub fn apply_scheme(&mut self) {
        self.flags.remove(PanelFlags::LAYOUT_INVALID);
        self.repaint();
    }
}

/// A widget the host can lay out, theme, serialize and paint.
pub trait Paintable {
    /// Factory name of the widget class.
    fn class_name(&self) -> &'static str;

    fn panel(&self) -> &PanelBase;

    fn panel_mut(&mut self) -> &mut PanelBase;

    /// Paints behind the widget's content.
    fn paint_background(&self, surface: &dyn Surface);

    /// Paints the widget's content.
    fn paint(&self, surface: &dyn Surface);

    /// Loads resource settings, falling back to defaults for missing or malformed fields.
    fn apply_settings(&mut self, settings: &Properties);

    /// Writes the widget's settings.
    fn get_settings(&self, out: &mut Properties);

    /// Pulls colors and border from `scheme`; may allocate textures on `surface`.
    fn apply_scheme(&mut self, scheme: &dyn Scheme, surface: &Rc<dyn Surface>);

    /// Reacts to updated dialog variables.
    fn on_dialog_variables_changed(&mut self, _variables: &Properties) {}

    /// Editable settings of this widget class.
    fn settings_descriptors(&self) -> Vec<SettingDescriptor>;

    /// Background, content, then border; clears the pending repaint.
    fn paint_traverse(&mut self, surface: &dyn Surface) {
        self.paint_background(surface);
        self.paint(surface);

        let panel = self.panel();
        if panel.paint_border_enabled() {
            if let Some(border) = panel.border() {
                surface.draw_border(border, panel.bounds());
            }
        }
        self.panel_mut().clear_repaint();
    }
}

/// Class names [`create_widget`] can build.
pub const WIDGET_CLASSES: &[&str] = &[ProgressBar::CLASS_NAME, ContinuousProgressBar::CLASS_NAME];

/// Builds a widget by class name.
pub fn create_widget(class_name: &str) -> ProgressResult<Box<dyn Paintable>> {
    match class_name {
        ProgressBar::CLASS_NAME => Ok(Box::new(ProgressBar::new())),
        ContinuousProgressBar::CLASS_NAME => Ok(Box::new(ContinuousProgressBar::new())),
        other => Err(ProgressError::unknown_widget(other)),
    }
}
