//! # Dear Progress - progress bar widgets for immediate-mode surfaces
//!
//! Segmented and continuous progress bars that paint through a host-provided
//! [`Surface`], read their look from a [`Scheme`], persist through a
//! [`Properties`] store, and a formatter for "time remaining" labels.
//!
//! ## Features
//!
//! - Segmented bar with configurable gap/width, inset, margin and direction
//! - Continuous bar with optional foreground/background textures
//! - Scoped texture ownership: handles are released when replaced or dropped
//! - Dialog-variable binding (0-100 integer drives the fill)
//! - Localized time-remaining label with singular/plural templates
//! - Headless [`RecordingSurface`] for tests and snapshots
//!
//! ## Quick Start
//!
//! ```
//! use dear_progress::*;
//! use std::rc::Rc;
//!
//! let surface = Rc::new(RecordingSurface::new());
//! let host: Rc<dyn Surface> = surface.clone();
//! let scheme = StaticScheme::new().with_color("ProgressBar.FgColor", Color::rgb(0.2, 0.8, 0.2));
//!
//! let mut bar = ContinuousProgressBar::new();
//! bar.panel_mut().set_size(200, 16);
//! bar.apply_scheme(&scheme, &host);
//! bar.set_progress(0.25);
//! bar.paint_traverse(&*surface);
//!
//! assert_eq!(surface.filled_rects()[1], Rect::new(0, 0, 50, 16));
//! ```

#![deny(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::float_cmp))]

// Core modules
pub use self::color::*;
pub use self::error::*;
pub use self::localize::*;
pub use self::recording::*;
pub use self::scheme::*;
pub use self::settings::*;
pub use self::surface::*;
pub use self::texture::*;
pub use self::time_remaining::*;

// Widget modules
pub use self::widget::*;

mod color;
mod error;
pub mod localize;
pub mod logging;
mod recording;
mod scheme;
mod settings;
mod surface;
mod texture;
pub mod time_remaining;
mod widget;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
