//! Grab-and-drag panning.
//!
//! Coordinates here are CSS pixels: the origin is taken from the window
//! scroll offset plus the pointer's client position, the same space the
//! host scrolls in.

use crate::geometry::Point;

/// Where the controller is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PanState {
    /// The image fits; pointer-down does nothing.
    Disabled,
    /// The image overflows; pointer-down starts a drag.
    Armed,
    /// A drag is in progress.
    Dragging {
        /// `scroll + client` at pointer-down.
        origin: Point,
    },
}

/// Drag-to-scroll state machine.
#[derive(Clone, Debug, Default)]
pub struct PanController {
    enabled: bool,
    origin: Option<Point>,
}

impl PanController {
    /// A disabled controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, derived from eligibility and any drag in progress.
    pub fn state(&self) -> PanState {
        match (self.origin, self.enabled) {
            (Some(origin), _) => PanState::Dragging { origin },
            (None, true) => PanState::Armed,
            (None, false) => PanState::Disabled,
        }
    }

    /// Whether a press may start a drag.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Arm or disarm. An ongoing drag is left alone and finishes normally.
    ///
    /// Returns whether eligibility changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        changed
    }

    /// Start a drag if armed.
    ///
    /// `default_prevented` is set when something else (a custom scrollbar)
    /// already claimed the press. Returns whether a drag started.
    pub fn pointer_down(&mut self, scroll: Point, client: Point, default_prevented: bool) -> bool {
        if !self.enabled || default_prevented {
            return false;
        }
        self.origin = Some(scroll + client);
        true
    }

    /// Scroll target for the pointer's new client position while dragging.
    pub fn pointer_move(&self, client: Point) -> Option<Point> {
        let origin = self.origin?;
        let target = origin - client;
        tracing::trace!(x = target.x, y = target.y, "pan");
        Some(target)
    }

    /// End the drag. Returns whether one was in progress.
    pub fn pointer_up(&mut self) -> bool {
        self.origin.take().is_some()
    }
}
