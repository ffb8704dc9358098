//! The seam between the engine and the document that hosts it.
//!
//! The engine never touches a DOM. A shell implements [`Host`] and
//! [`ImageElement`] over whatever it owns (a wasm content script, a test
//! double, a native window) and carries out the [`Effect`]s returned by
//! [`Viewer::handle`](crate::Viewer::handle).

use alloc::string::String;
use alloc::vec::Vec;

use crate::units::Dpr;

/// Window measurements, all in CSS pixels.
pub trait Host {
    /// Visual viewport size, taken while scrollbar-affecting overflow is suspended.
    fn visual_viewport(&self) -> (f64, f64);

    /// Current device pixel ratio (changes with browser zoom).
    fn device_pixel_ratio(&self) -> f64;

    /// Scrollbar thickness as `(vertical bar width, horizontal bar height)`,
    /// measured with overflow forced to `scroll`.
    ///
    /// Zero for overlay scrollbars.
    fn scrollbar_thickness(&self) -> (f64, f64);
}

/// The document element the viewer takes over.
pub trait ImageElement {
    /// Lower-case tag name, e.g. `"img"`.
    fn tag_name(&self) -> &str;

    /// Intrinsic pixel dimensions, independent of orientation.
    fn natural_size(&self) -> (u32, u32);
}

/// Inline style for the image element, already in CSS units.
///
/// `width`/`height` are the element's own box axes; when the image is
/// rotated by an odd number of quarter turns these are the visual height
/// and width respectively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementStyle {
    pub width: String,
    pub height: String,
    pub left: String,
    pub top: String,
    /// `orientation-{0..3}`.
    pub class: String,
}

/// Something the shell must do on the engine's behalf.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Write the image element's inline style and class.
    Style(ElementStyle),
    /// Scroll the window to a CSS-pixel offset.
    ScrollTo { x: f64, y: f64 },
    /// Attach (`true`) or detach (`false`) the pointer-down listener used for drag panning.
    Panning(bool),
    /// Cancel the browser's default handling of the current event.
    PreventDefault,
    /// Keep the current event away from the host page's own handlers.
    StopPropagation,
    /// Tell the coordinating component that the device pixel ratio changed.
    SyncZoom { device_pixel_ratio: f64 },
}

/// Effects produced by one event, in the order they must be applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Response {
    pub effects: Vec<Effect>,
}

impl Response {
    pub(crate) fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Whether the event produced nothing for the shell to do.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// The last style written by this response, if any.
    pub fn style(&self) -> Option<&ElementStyle> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::Style(s) => Some(s),
            _ => None,
        })
    }

    /// The last scroll target in this response, if any.
    pub fn scroll_to(&self) -> Option<(f64, f64)> {
        self.effects.iter().rev().find_map(|e| match *e {
            Effect::ScrollTo { x, y } => Some((x, y)),
            _ => None,
        })
    }

    /// The last panning switch in this response, if any.
    pub fn panning(&self) -> Option<bool> {
        self.effects.iter().rev().find_map(|e| match *e {
            Effect::Panning(on) => Some(on),
            _ => None,
        })
    }

    /// Whether the response asks to cancel the default action.
    pub fn prevents_default(&self) -> bool {
        self.effects.contains(&Effect::PreventDefault)
    }

    /// Whether the response asks to stop propagation.
    pub fn stops_propagation(&self) -> bool {
        self.effects.contains(&Effect::StopPropagation)
    }
}

/// Read the host's DPR, falling back to 1 when it is unusable.
pub(crate) fn read_dpr(host: &impl Host) -> Dpr {
    Dpr::or_one(host.device_pixel_ratio())
}
