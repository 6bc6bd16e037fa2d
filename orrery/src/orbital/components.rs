//! Behavior components for orbital bodies

use serde::{Deserialize, Serialize};

/// Circular revolution around the body's parent (or anchor) in the
/// horizontal plane
///
/// A `period` of `None` or a `radius` of zero disables orbiting. `angle` is
/// the current phase and is kept in `[0, 2π)` by the update system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Orbit {
    /// Distance from the orbit center
    pub radius: f64,
    /// Duration of one full revolution, in simulated minutes
    pub period: Option<f64>,
    /// Current phase, in radians
    pub angle: f64,
}

impl Orbit {
    /// Create an orbit at the given radius and period, starting at phase zero
    pub fn new(radius: f64, period: f64) -> Self {
        Self {
            radius,
            period: Some(period),
            angle: 0.0,
        }
    }

    /// An orbit whose period and radius are both meaningful
    pub fn is_active(&self) -> bool {
        self.radius != 0.0 && self.period.is_some_and(|p| p != 0.0)
    }
}

/// Self-rotation about the body's local vertical axis
///
/// A `period` of `None` disables rotation. Ignored while the body is tidally
/// locked to a live parent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Spin {
    /// Duration of one full turn, in simulated minutes
    pub period: Option<f64>,
    /// Current phase, in radians
    pub angle: f64,
}

impl Spin {
    /// Create a spin with the given period, starting at phase zero
    pub fn new(period: f64) -> Self {
        Self {
            period: Some(period),
            angle: 0.0,
        }
    }
}

/// Tidal locking: the body always faces its parent instead of spinning
/// independently
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TidalLock {
    /// Constant angular offset added to the facing direction, in radians
    pub facing_offset: f64,
}
