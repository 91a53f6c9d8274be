//! Error types for progress widgets
//!
//! Painting never fails; errors only surface from configuration entry points
//! such as segment geometry setters, the widget factory and value parsing.

use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Result type for progress widget operations
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Errors that can occur while configuring progress widgets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    /// Segment gap/width pair that cannot be laid out
    #[error("Invalid segment geometry: gap={gap}, width={width}")]
    InvalidSegmentGeometry { gap: i32, width: i32 },

    /// The factory does not know the requested widget class
    #[error("Unknown widget class: {class_name}")]
    UnknownWidget { class_name: String },

    /// A value could not be interpreted
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl ProgressError {
    /// Create a segment geometry error
    pub fn invalid_segment_geometry(gap: i32, width: i32) -> Self {
        #[cfg(feature = "tracing")]
        warn!("Rejected segment geometry gap={} width={}", gap, width);
        Self::InvalidSegmentGeometry { gap, width }
    }

    /// Create an unknown widget error
    pub fn unknown_widget(class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        #[cfg(feature = "tracing")]
        warn!("Unknown widget class: {}", class_name);
        Self::UnknownWidget { class_name }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        let field = field.into();
        let value = value.into();
        #[cfg(feature = "tracing")]
        debug!("Invalid value for {}: {}", field, value);
        Self::InvalidValue { field, value }
    }
}
