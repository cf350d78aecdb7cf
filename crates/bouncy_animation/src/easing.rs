//! Easing functions for animations

use std::f32::consts::PI;

/// Tension used by the default overshoot curve
pub const DEFAULT_OVERSHOOT_TENSION: f32 = 2.0;

/// Easing function type
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// Starts slowly and speeds up. The factor is the curve's exponent
    /// divided by two, so `1.0` is a plain quadratic.
    Accelerate(f32),
    /// Starts fast and slows down; mirror image of `Accelerate`.
    Decelerate(f32),
    /// Starts and ends slowly, fastest through the middle
    AccelerateDecelerate,
    /// Flings past the target then settles back onto it. Higher tension
    /// overshoots further.
    Overshoot(f32),
    EaseInOutCubic,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Overshoot(DEFAULT_OVERSHOOT_TENSION)
    }
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Accelerate(factor) => {
                if *factor == 1.0 {
                    t * t
                } else {
                    t.powf(2.0 * factor)
                }
            }
            Easing::Decelerate(factor) => {
                if *factor == 1.0 {
                    1.0 - (1.0 - t) * (1.0 - t)
                } else {
                    1.0 - (1.0 - t).powf(2.0 * factor)
                }
            }
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Easing::Overshoot(tension) => {
                let t = t - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}
