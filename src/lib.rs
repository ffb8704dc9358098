//! Viewport fitting, rotation and panning for a full-window single-image viewer.
//!
//! Pure geometry and event dispatch. The engine never touches a DOM: a shell
//! implements [`Host`] and [`ImageElement`], forwards events to
//! [`Viewer::handle`] and applies the returned [`Effect`]s. `no_std` + `alloc`
//! compatible.
//!
//! Layout runs in device pixels; CSS pixels appear only at the edges
//! (element styles, scroll offsets, pointer positions).
//!
//! # Modules
//!
//! - [`units`]: CSS/device pixel conversion
//! - [`viewport`]: window size, scrollbar thickness, usable size
//! - [`image`]: natural size, orientation, displayed size and position
//! - [`orientation`]: quarter-turn rotation group and offset rotation
//! - [`fit`]: fit, fill, natural and initial fitting
//! - [`rotate`]: rotation and point-preserving re-projection
//! - [`pan`]: drag-to-scroll
//! - [`viewer`]: event dispatch tying the above together
//! - [`sniff`]: deciding which tabs get the viewer

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod host;
pub mod image;
pub mod input;
pub mod orientation;
pub mod pan;
pub mod rotate;
pub mod sniff;
pub mod units;
pub mod viewer;
pub mod viewport;
pub mod zoom;

pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use fit::{Boundary, FitEngine, FitRules, FittingType, Placement};
pub use geometry::{Extent, Point, Size};
pub use host::{Effect, ElementStyle, Host, ImageElement, Response};
pub use image::Image;
pub use input::{Command, Modifiers};
pub use orientation::Orientation;
pub use pan::{PanController, PanState};
pub use rotate::{Anchor, PinnedPoint, RotationDirection};
pub use sniff::TabSniffer;
pub use units::Dpr;
pub use viewer::{Event, Viewer};
pub use viewport::{ScrollbarMode, Viewport};
pub use zoom::{ZoomDirection, ZoomLadder};
