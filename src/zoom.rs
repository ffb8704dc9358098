//! Preset zoom ladder.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::{Result, ViewerError};

/// Relative tolerance when comparing a scale against a preset.
const STEP_EPSILON: f64 = 1e-9;

/// Browser-style zoom levels.
pub const DEFAULT_ZOOM_STEPS: [f64; 17] = [
    0.25, 0.33, 0.5, 0.67, 0.75, 0.8, 0.9, 1.0, 1.1, 1.25, 1.5, 1.75, 2.0, 2.5, 3.0, 4.0, 5.0,
];

/// Direction of a zoom step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Strictly ascending, positive zoom factors that include 1.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomLadder {
    steps: Vec<f64>,
}

impl ZoomLadder {
    /// Validate and wrap a list of zoom factors.
    pub fn new(steps: Vec<f64>) -> Result<Self> {
        if steps.is_empty() {
            return Err(ViewerError::InvalidZoomSteps("no steps"));
        }
        if steps.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ViewerError::InvalidZoomSteps(
                "steps must be finite and positive",
            ));
        }
        if steps.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ViewerError::InvalidZoomSteps(
                "steps must be strictly ascending",
            ));
        }
        if !steps.contains(&1.0) {
            return Err(ViewerError::InvalidZoomSteps("steps must include 1"));
        }
        Ok(Self { steps })
    }

    /// The presets, ascending.
    pub fn steps(&self) -> &[f64] {
        &self.steps
    }

    /// Smallest preset.
    pub fn min(&self) -> f64 {
        self.steps[0]
    }

    /// Largest preset.
    pub fn max(&self) -> f64 {
        self.steps[self.steps.len() - 1]
    }

    /// The smallest preset strictly above `current`.
    pub fn next_above(&self, current: f64) -> Option<f64> {
        let limit = current * (1.0 + STEP_EPSILON);
        if limit >= self.max() {
            return None;
        }
        self.steps.iter().copied().find(|&s| s > limit)
    }

    /// The largest preset strictly below `current`.
    pub fn next_below(&self, current: f64) -> Option<f64> {
        let limit = current * (1.0 - STEP_EPSILON);
        if limit <= self.min() {
            return None;
        }
        self.steps.iter().rev().copied().find(|&s| s < limit)
    }

    /// The preset closest to `value`; ties go to the smaller preset.
    pub fn nearest(&self, value: f64) -> f64 {
        let mut best = self.steps[0];
        for &s in &self.steps[1..] {
            if (s - value).abs() < (best - value).abs() {
                best = s;
            }
        }
        best
    }
}

impl Default for ZoomLadder {
    fn default() -> Self {
        Self {
            steps: DEFAULT_ZOOM_STEPS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn default_ladder_is_valid() {
        let ladder = ZoomLadder::new(DEFAULT_ZOOM_STEPS.to_vec()).unwrap();
        assert_eq!(ladder, ZoomLadder::default());
        assert_eq!(ladder.min(), 0.25);
        assert_eq!(ladder.max(), 5.0);
    }

    #[test]
    fn rejects_bad_ladders() {
        assert!(ZoomLadder::new(vec![]).is_err());
        assert!(ZoomLadder::new(vec![0.5, 2.0]).is_err());
        assert!(ZoomLadder::new(vec![1.0, 0.5]).is_err());
        assert!(ZoomLadder::new(vec![0.5, 1.0, 1.0]).is_err());
        assert!(ZoomLadder::new(vec![-1.0, 1.0]).is_err());
        assert!(ZoomLadder::new(vec![1.0, f64::INFINITY]).is_err());
        assert!(ZoomLadder::new(vec![1.0]).is_ok());
    }

    #[test]
    fn steps_skip_the_current_value() {
        let ladder = ZoomLadder::default();
        assert_eq!(ladder.next_above(1.0), Some(1.1));
        assert_eq!(ladder.next_below(1.0), Some(0.9));
        // Between presets (e.g. a fit scale) steps to the neighbours.
        assert_eq!(ladder.next_above(0.6), Some(0.67));
        assert_eq!(ladder.next_below(0.6), Some(0.5));
    }

    #[test]
    fn steps_stop_at_the_ends() {
        let ladder = ZoomLadder::default();
        assert_eq!(ladder.next_above(5.0), None);
        assert_eq!(ladder.next_below(0.25), None);
        assert_eq!(ladder.next_above(9.0), None);
        assert_eq!(ladder.next_below(0.01), None);
    }

    #[test]
    fn single_preset_ladder_steps_only_onto_it() {
        let ladder = ZoomLadder::new(vec![1.0]).unwrap();
        assert_eq!((ladder.min(), ladder.max()), (1.0, 1.0));
        assert_eq!(ladder.next_above(1.0), None);
        assert_eq!(ladder.next_below(1.0), None);
        assert_eq!(ladder.next_above(0.5), Some(1.0));
        assert_eq!(ladder.next_below(2.0), Some(1.0));
    }

    #[test]
    fn nearest_snaps() {
        let ladder = ZoomLadder::default();
        assert_eq!(ladder.nearest(1.04), 1.0);
        assert_eq!(ladder.nearest(1.06), 1.1);
        assert_eq!(ladder.nearest(100.0), 5.0);
        assert_eq!(ladder.nearest(0.0), 0.25);
    }
}
