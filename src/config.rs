//! Viewer configuration.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! fill_boundary = "inclusive"
//! fill_reserves_scrollbar = false
//! zoom_steps = [0.5, 1.0, 2.0]
//!
//! [scrollbar.fixed]
//! width = 17.0
//! height = 17.0
//! ```

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};
use crate::fit::{Boundary, FitRules};
use crate::viewport::ScrollbarMode;
use crate::zoom::{DEFAULT_ZOOM_STEPS, ZoomLadder};

/// Tunables for a [`Viewer`](crate::Viewer).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Where scrollbar thickness comes from.
    #[serde(default)]
    pub scrollbar: ScrollbarMode,
    /// Comparison used by the fill predicates at the exact-fit boundary.
    #[serde(default)]
    pub fill_boundary: Boundary,
    /// Hold back scrollbar thickness on the pinned axis while filling.
    #[serde(default = "default_fill_reserves_scrollbar")]
    pub fill_reserves_scrollbar: bool,
    /// Preset zoom factors for stepping in natural mode.
    #[serde(default = "default_zoom_steps")]
    pub zoom_steps: Vec<f64>,
}

fn default_fill_reserves_scrollbar() -> bool {
    true
}
fn default_zoom_steps() -> Vec<f64> {
    DEFAULT_ZOOM_STEPS.to_vec()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scrollbar: ScrollbarMode::default(),
            fill_boundary: Boundary::default(),
            fill_reserves_scrollbar: default_fill_reserves_scrollbar(),
            zoom_steps: default_zoom_steps(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a TOML document.
    #[cfg(feature = "std")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if let ScrollbarMode::Fixed { width, height } = self.scrollbar {
            let usable = |v: f64| v.is_finite() && v >= 0.0;
            if !usable(width) || !usable(height) {
                return Err(ViewerError::InvalidScrollbar { width, height });
            }
        }
        self.zoom_ladder().map(|_| ())
    }

    /// Fill tie-break rules.
    pub fn rules(&self) -> FitRules {
        FitRules {
            boundary: self.fill_boundary,
            reserve_scrollbar: self.fill_reserves_scrollbar,
        }
    }

    /// The validated zoom ladder.
    pub fn zoom_ladder(&self) -> Result<ZoomLadder> {
        ZoomLadder::new(self.zoom_steps.clone())
    }
}
