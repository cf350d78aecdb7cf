//! Scroll container configuration (bouncy.toml)
//!
//! Every option is optional and falls back to its default. Values are not
//! range-checked: fractions outside `[0, 1]` or negative durations are kept
//! as given and simply produce degenerate geometry.

use std::fs;
use std::path::Path;

use bouncy_animation::easing::DEFAULT_OVERSHOOT_TENSION;
use bouncy_animation::Easing;
use bouncy_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Interpolation curve for the entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Overshoot,
    Accelerate,
    Decelerate,
    AccelerateDecelerate,
    Linear,
    EaseInOutCubic,
}

impl Interpolation {
    /// Resolve to a concrete easing curve
    pub fn easing(&self, overshoot_tension: f32) -> Easing {
        match self {
            Interpolation::Overshoot => Easing::Overshoot(overshoot_tension),
            Interpolation::Accelerate => Easing::Accelerate(1.0),
            Interpolation::Decelerate => Easing::Decelerate(1.0),
            Interpolation::AccelerateDecelerate => Easing::AccelerateDecelerate,
            Interpolation::Linear => Easing::Linear,
            Interpolation::EaseInOutCubic => Easing::EaseInOutCubic,
        }
    }
}

/// When repeated identical scroll-changed events are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateScrollPolicy {
    /// Drop repeats only while the surface cannot overscroll
    #[default]
    WhenOverscrollDisabled,
    /// Always drop repeats
    Always,
    /// Deliver every event
    Never,
}

/// Top-level scroll container configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BouncyConfig {
    /// Where the content rests, as a fraction of the viewport height
    /// measured from the top (0.0 = top edge, 1.0 = bottom edge)
    #[serde(default = "default_starting_position")]
    pub relative_starting_position: f32,
    /// Entrance animation duration in milliseconds
    #[serde(default = "default_view_animation_duration")]
    pub view_animation_duration: i32,
    /// Entrance animation curve
    #[serde(default)]
    pub interpolation: Interpolation,
    /// Tension for the overshoot curve
    #[serde(default = "default_overshoot_tension")]
    pub overshoot_tension: f32,
    /// Snap the content fully on or off screen once scrolling stops
    #[serde(default)]
    pub scroll_assist: bool,
    /// Scroll assist animation duration in milliseconds
    #[serde(default = "default_scroll_assist_duration")]
    pub scroll_assist_duration: i32,
    /// Fraction of the content that must be off screen before assisting
    #[serde(default = "default_scroll_assist_threshold")]
    pub scroll_assist_threshold: f32,
    /// Duplicate scroll event suppression
    #[serde(default)]
    pub duplicate_scroll_policy: DuplicateScrollPolicy,
    /// Scroll-stop polling interval (16ms = one frame at 60fps)
    #[serde(default = "default_stop_check_interval")]
    pub stop_check_interval_ms: u64,
}

fn default_starting_position() -> f32 {
    0.66
}

fn default_view_animation_duration() -> i32 {
    500
}

fn default_overshoot_tension() -> f32 {
    DEFAULT_OVERSHOOT_TENSION
}

fn default_scroll_assist_duration() -> i32 {
    200
}

fn default_scroll_assist_threshold() -> f32 {
    0.5
}

fn default_stop_check_interval() -> u64 {
    16
}

impl Default for BouncyConfig {
    fn default() -> Self {
        Self {
            relative_starting_position: default_starting_position(),
            view_animation_duration: default_view_animation_duration(),
            interpolation: Interpolation::default(),
            overshoot_tension: default_overshoot_tension(),
            scroll_assist: false,
            scroll_assist_duration: default_scroll_assist_duration(),
            scroll_assist_threshold: default_scroll_assist_threshold(),
            duplicate_scroll_policy: DuplicateScrollPolicy::default(),
            stop_check_interval_ms: default_stop_check_interval(),
        }
    }
}

impl BouncyConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Entrance animation curve
    pub fn easing(&self) -> Easing {
        self.interpolation.easing(self.overshoot_tension)
    }

    /// Builder: enable scroll assist
    pub fn with_scroll_assist(mut self, enabled: bool) -> Self {
        self.scroll_assist = enabled;
        self
    }

    /// Builder: set the resting position fraction
    pub fn with_starting_position(mut self, relative: f32) -> Self {
        self.relative_starting_position = relative;
        self
    }

    /// Builder: set the duplicate scroll policy
    pub fn with_duplicate_policy(mut self, policy: DuplicateScrollPolicy) -> Self {
        self.duplicate_scroll_policy = policy;
        self
    }
}
