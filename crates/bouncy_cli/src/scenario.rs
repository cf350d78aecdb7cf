//! Scenario definition for simulated scroll runs.

use anyhow::{bail, Result};
use bouncy_core::{Rect, Size};
use serde::Deserialize;
use std::path::Path;

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Dimensions {
    pub w: f32,
    pub h: f32,
}

impl Dimensions {
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }
}

/// A viewport, optional content, and the steps to play against them.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub viewport: Dimensions,
    #[serde(default)]
    pub content: Option<Dimensions>,
    /// Let the surface scroll past its range
    #[serde(default)]
    pub overscroll: bool,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(input)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn viewport_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.viewport.w, self.viewport.h)
    }

    fn validate(&self) -> Result<()> {
        if self.viewport.w <= 0.0 || self.viewport.h <= 0.0 {
            bail!(
                "viewport must have a positive size, got {}x{}",
                self.viewport.w,
                self.viewport.h
            );
        }
        let resized = self.steps.iter().filter_map(|step| match step {
            ScenarioStep::SetContent { w, h } => Some(Dimensions { w: *w, h: *h }),
            _ => None,
        });
        let contents = self.content.into_iter().chain(resized);
        for content in contents {
            if content.w < 0.0 || content.h < 0.0 {
                bail!("content size cannot be negative, got {}x{}", content.w, content.h);
            }
        }
        Ok(())
    }
}

/// One step of a scenario
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Press { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Release { x: f32, y: f32 },
    Cancel { x: f32, y: f32 },
    /// Press and release delivered together
    Tap { x: f32, y: f32 },
    Wait { ms: u64 },
    /// Host-driven scroll of the outer surface
    ScrollTo { offset: i32 },
    AnimateToStart,
    ResetPosition,
    SetContent { w: f32, h: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_steps() {
        let scenario = Scenario::from_json(
            r#"{
                "viewport": { "w": 400, "h": 1000 },
                "content": { "w": 400, "h": 200 },
                "steps": [
                    { "type": "animate_to_start" },
                    { "type": "wait", "ms": 600 },
                    { "type": "tap", "x": 200, "y": 700 },
                    { "type": "set_content", "w": 400, "h": 500 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.viewport_rect(), Rect::new(0.0, 0.0, 400.0, 1000.0));
        assert!(!scenario.overscroll);
        assert_eq!(
            scenario.steps,
            vec![
                ScenarioStep::AnimateToStart,
                ScenarioStep::Wait { ms: 600 },
                ScenarioStep::Tap { x: 200.0, y: 700.0 },
                ScenarioStep::SetContent { w: 400.0, h: 500.0 },
            ]
        );
    }

    #[test]
    fn content_is_optional() {
        let scenario =
            Scenario::from_json(r#"{ "viewport": { "w": 10, "h": 10 }, "steps": [] }"#).unwrap();
        assert!(scenario.content.is_none());
    }

    #[test]
    fn rejects_empty_viewport() {
        let err = Scenario::from_json(r#"{ "viewport": { "w": 10, "h": 0 }, "steps": [] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("viewport"));
    }

    #[test]
    fn rejects_unknown_step() {
        assert!(Scenario::from_json(
            r#"{ "viewport": { "w": 10, "h": 10 }, "steps": [{ "type": "fling" }] }"#
        )
        .is_err());
    }
}
