//! Segmented progress bar
//!
//! The bar is drawn as a row (or column) of equally sized blocks separated by
//! gaps. The number of block slots follows from the panel extent along the
//! fill axis; progress decides how many of them are lit.
//!
use crate::color::Color;
use crate::error::{ProgressError, ProgressResult};
use crate::localize::Localizer;
use crate::scheme::Scheme;
use crate::settings::{Properties, SettingDescriptor, SettingKind};
use crate::surface::{Rect, Surface};
use crate::time_remaining;
use crate::widget::{PanelBase, Paintable};
use crate::{progress_trace, progress_warn};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Edge the fill grows from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressDirection {
    /// Left to right
    #[default]
    East,
    /// Right to left
    West,
    /// Bottom to top
    North,
    /// Top to bottom
    South,
}

impl ProgressDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            ProgressDirection::East => "east",
            ProgressDirection::West => "west",
            ProgressDirection::North => "north",
            ProgressDirection::South => "south",
        }
    }

    /// Whether the fill runs along the panel height.
    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, ProgressDirection::North | ProgressDirection::South)
    }
}

impl fmt::Display for ProgressDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressDirection {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "east" => Ok(ProgressDirection::East),
            "west" => Ok(ProgressDirection::West),
            "north" => Ok(ProgressDirection::North),
            "south" => Ok(ProgressDirection::South),
            _ => Err(ProgressError::invalid_value("direction", s)),
        }
    }
}

/// Segmented progress bar widget.
///
/// # Examples
///
/// ```
/// # use dear_progress::*;
/// let mut bar = ProgressBar::new();
/// bar.panel_mut().set_size(120, 24);
/// bar.set_progress(0.5);
/// assert_eq!(bar.drawn_segment_count(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct ProgressBar {
    panel: PanelBase,
    progress: f32,
    segment_gap: i32,
    segment_width: i32,
    bar_inset: i32,
    margin: i32,
    direction: ProgressDirection,
    dialog_variable: Option<String>,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressBar {
    pub const CLASS_NAME: &'static str = "ProgressBar";

    pub const DEFAULT_SEGMENT_GAP: i32 = 4;
    pub const DEFAULT_SEGMENT_WIDTH: i32 = 8;
    pub const DEFAULT_BAR_INSET: i32 = 4;

    /// Scheme entries read by [`Paintable::apply_scheme`].
    pub const SCHEME_FG_COLOR: &'static str = "ProgressBar.FgColor";
    pub const SCHEME_BG_COLOR: &'static str = "ProgressBar.BgColor";
    pub const SCHEME_BORDER: &'static str = "ButtonDepressedBorder";

    pub const SETTINGS: &'static [SettingDescriptor] = &[
        SettingDescriptor::new("progress", SettingKind::String),
        SettingDescriptor::new("segment_gap", SettingKind::Integer),
        SettingDescriptor::new("segment_width", SettingKind::Integer),
        SettingDescriptor::new("variable", SettingKind::String),
    ];

    pub fn new() -> Self {
        Self {
            panel: PanelBase::new(),
            progress: 0.0,
            segment_gap: Self::DEFAULT_SEGMENT_GAP,
            segment_width: Self::DEFAULT_SEGMENT_WIDTH,
            bar_inset: Self::DEFAULT_BAR_INSET,
            margin: 0,
            direction: ProgressDirection::East,
            dialog_variable: None,
        }
    }

    /// Sets the fill fraction, clamped to `[0, 1]` (NaN counts as 0).
    ///
    /// A repaint is requested only when the stored value changes.
    pub fn set_progress(&mut self, progress: f32) {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        if progress != self.progress {
            progress_trace!("progress {} -> {}", self.progress, progress);
            self.progress = progress;
            self.panel.repaint();
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Sets the segment gap and width in pixels.
    ///
    /// Negative values and a zero `gap + width` are rejected and leave the
    /// current geometry in place.
    pub fn set_segment_info(&mut self, gap: i32, width: i32) -> ProgressResult<()> {
        if gap < 0 || width < 0 || gap.checked_add(width).is_none_or(|stride| stride == 0) {
            return Err(ProgressError::invalid_segment_geometry(gap, width));
        }
        self.segment_gap = gap;
        self.segment_width = width;
        Ok(())
    }

    #[inline]
    pub fn segment_gap(&self) -> i32 {
        self.segment_gap
    }

    #[inline]
    pub fn segment_width(&self) -> i32 {
        self.segment_width
    }

    #[inline]
    fn segment_stride(&self) -> i32 {
        self.segment_gap + self.segment_width
    }

    /// Number of lit segments along the fill axis.
    pub fn drawn_segment_count(&self) -> i32 {
        let (wide, tall) = self.panel.size();
        let extent = if self.direction.is_vertical() { tall } else { wide };
        let segment_total = extent / self.segment_stride();
        ((segment_total as f32 * self.progress) as i32).max(0)
    }

    /// Distance of the segments from the panel edges across the fill axis.
    pub fn set_bar_inset(&mut self, pixels: i32) {
        self.bar_inset = pixels;
    }

    #[inline]
    pub fn bar_inset(&self) -> i32 {
        self.bar_inset
    }

    /// Space kept free at both ends of the fill axis.
    pub fn set_margin(&mut self, pixels: i32) {
        self.margin = pixels;
    }

    #[inline]
    pub fn margin(&self) -> i32 {
        self.margin
    }

    pub fn set_direction(&mut self, direction: ProgressDirection) {
        if direction != self.direction {
            self.direction = direction;
            self.panel.repaint();
        }
    }

    #[inline]
    pub fn direction(&self) -> ProgressDirection {
        self.direction
    }

    /// Binds the dialog variable polled by [`Paintable::on_dialog_variables_changed`].
    pub fn set_dialog_variable(&mut self, name: Option<&str>) {
        self.dialog_variable = name.filter(|n| !n.is_empty()).map(str::to_owned);
    }

    pub fn dialog_variable(&self) -> Option<&str> {
        self.dialog_variable.as_deref()
    }

    /// Rectangles of the lit segments, in paint order.
    ///
    /// Coordinates saturate, so extreme margins or insets yield empty or
    /// clipped rects instead of overflowing.
    pub fn segment_rects(&self) -> Vec<Rect> {
        let (mut wide, mut tall) = self.panel.size();
        let gap = self.segment_gap;
        let width = self.segment_width;
        let stride = self.segment_stride();
        let margins = self.margin.saturating_mul(2);

        let (mut x, mut y, segment_total) = match self.direction {
            ProgressDirection::West => {
                wide = wide.saturating_sub(margins);
                (wide.saturating_sub(self.margin), self.bar_inset, wide / stride)
            }
            ProgressDirection::East => {
                wide = wide.saturating_sub(margins);
                (self.margin, self.bar_inset, wide / stride)
            }
            ProgressDirection::North => {
                tall = tall.saturating_sub(margins);
                (self.bar_inset, tall.saturating_sub(self.margin), tall / stride)
            }
            ProgressDirection::South => {
                tall = tall.saturating_sub(margins);
                (self.bar_inset, self.margin, tall / stride)
            }
        };
        let segments_drawn = ((segment_total as f32 * self.progress) as i32).max(0);

        // cross-axis extent between the two insets
        let across = |origin: i32, extent: i32| {
            origin.saturating_add(extent.saturating_sub(origin.saturating_mul(2)))
        };

        let mut rects = Vec::with_capacity(segments_drawn as usize);
        for _ in 0..segments_drawn {
            match self.direction {
                ProgressDirection::East => {
                    x = x.saturating_add(gap);
                    rects.push(Rect::new(x, y, x.saturating_add(width), across(y, tall)));
                    x = x.saturating_add(width);
                }
                ProgressDirection::West => {
                    x = x.saturating_sub(stride);
                    rects.push(Rect::new(x, y, x.saturating_add(width), across(y, tall)));
                }
                ProgressDirection::North => {
                    y = y.saturating_sub(stride);
                    rects.push(Rect::new(x, y, across(x, wide), y.saturating_add(width)));
                }
                ProgressDirection::South => {
                    y = y.saturating_add(gap);
                    rects.push(Rect::new(x, y, across(x, wide), y.saturating_add(width)));
                    y = y.saturating_add(width);
                }
            }
        }
        rects
    }

    /// Localized "time remaining" label; see [`time_remaining::construct_time_remaining_string`].
    pub fn construct_time_remaining_string(
        localizer: &dyn Localizer,
        start_time: f32,
        current_time: f32,
        current_progress: f32,
        last_progress_update_time: f32,
        add_remaining_suffix: bool,
    ) -> Option<String> {
        time_remaining::construct_time_remaining_string(
            localizer,
            start_time,
            current_time,
            current_progress,
            last_progress_update_time,
            add_remaining_suffix,
        )
    }

    /// Applies scheme colors and border; shared with composed bars.
    pub(crate) fn apply_scheme_colors(&mut self, scheme: &dyn Scheme) {
        if let Some(color) = scheme.color(Self::SCHEME_FG_COLOR) {
            self.panel.set_fg_color(color);
        }
        if let Some(color) = scheme.color(Self::SCHEME_BG_COLOR) {
            self.panel.set_bg_color(color);
        }
        if let Some(border) = scheme.border(Self::SCHEME_BORDER) {
            self.panel.set_border(Some(border.to_owned()));
        }
        self.panel.apply_scheme();
    }

    pub(crate) fn fill_background(&self, surface: &dyn Surface, color: Color) {
        surface.set_draw_color(color);
        surface.draw_filled_rect(self.panel.bounds());
    }
}

impl Paintable for ProgressBar {
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    fn panel(&self) -> &PanelBase {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut PanelBase {
        &mut self.panel
    }

    fn paint_background(&self, surface: &dyn Surface) {
        self.fill_background(surface, self.panel.bg_color());
    }

    fn paint(&self, surface: &dyn Surface) {
        surface.set_draw_color(self.panel.fg_color());
        for rect in self.segment_rects() {
            surface.draw_filled_rect(rect);
        }
    }

    fn apply_settings(&mut self, settings: &Properties) {
        self.panel.apply_settings(settings);
        self.set_progress(settings.get_float("progress", 0.0));

        let gap = settings.get_int("segment_gap", Self::DEFAULT_SEGMENT_GAP);
        let width = settings.get_int("segment_width", Self::DEFAULT_SEGMENT_WIDTH);
        if self.set_segment_info(gap, width).is_err() {
            progress_warn!(
                "{}: unusable segment geometry {}/{}, using defaults",
                Self::CLASS_NAME,
                gap,
                width
            );
            self.segment_gap = Self::DEFAULT_SEGMENT_GAP;
            self.segment_width = Self::DEFAULT_SEGMENT_WIDTH;
        }

        let variable = settings.get_str("variable");
        self.set_dialog_variable(variable.as_deref());
    }

    fn get_settings(&self, out: &mut Properties) {
        self.panel.get_settings(out);
        out.set_float("progress", self.progress);
        out.set_int("segment_gap", self.segment_gap);
        out.set_int("segment_width", self.segment_width);
        out.set_string("variable", self.dialog_variable.as_deref().unwrap_or_default());
    }

    fn apply_scheme(&mut self, scheme: &dyn Scheme, _surface: &Rc<dyn Surface>) {
        self.apply_scheme_colors(scheme);
    }

    fn on_dialog_variables_changed(&mut self, variables: &Properties) {
        let value = match self.dialog_variable.as_deref() {
            Some(name) => variables.get_int(name, -1),
            None => return,
        };
        if value >= 0 {
            self.set_progress(value as f32 / 100.0);
        }
    }

    fn settings_descriptors(&self) -> Vec<SettingDescriptor> {
        PanelBase::BASE_SETTINGS
            .iter()
            .chain(Self::SETTINGS)
            .copied()
            .collect()
    }
}
