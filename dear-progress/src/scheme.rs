//! Scheme (theme) lookups
//!
//! Widgets pull their colors and border from the host's scheme whenever it
//! changes. [`StaticScheme`] is a map-backed scheme for tests and simple hosts.

use crate::color::Color;
use std::collections::HashMap;

/// Named colors and borders provided by the host toolkit.
pub trait Scheme {
    /// Looks up a named color.
    fn color(&self, name: &str) -> Option<Color>;

    /// Looks up a named border.
    fn border(&self, name: &str) -> Option<&str>;
}

/// Map-backed [`Scheme`].
#[derive(Clone, Debug, Default)]
pub struct StaticScheme {
    colors: HashMap<String, Color>,
    borders: HashMap<String, String>,
}

impl StaticScheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named color.
    pub fn with_color(mut self, name: impl Into<String>, color: Color) -> Self {
        self.colors.insert(name.into(), color);
        self
    }

    /// Adds or replaces a named border.
    pub fn with_border(mut self, name: impl Into<String>, border: impl Into<String>) -> Self {
        self.borders.insert(name.into(), border.into());
        self
    }
}

impl Scheme for StaticScheme {
    fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    fn border(&self, name: &str) -> Option<&str> {
        self.borders.get(name).map(String::as_str)
    }
}
