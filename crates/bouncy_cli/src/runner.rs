//! Scenario runner that plays steps against a simulated scroll view.

use crate::report::SimulationReport;
use crate::scenario::{Scenario, ScenarioStep};
use anyhow::{anyhow, Result};
use bouncy_core::{Size, TouchEvent};
use bouncy_scroll::prelude::*;
use bouncy_scroll::OverscrollMode;

/// Run a loaded scenario from a fresh view.
pub fn run_scenario(scenario: &Scenario, config: &BouncyConfig) -> Result<SimulationReport> {
    let overscroll = if scenario.overscroll {
        OverscrollMode::Always
    } else {
        OverscrollMode::Never
    };
    let surface = SimulatedSurface::new(scenario.viewport_rect()).with_overscroll(overscroll);
    let mut view = BouncyScrollView::new(surface, config);
    if let Some(content) = scenario.content {
        let content = view.surface().content(content.size());
        view.set_content_view(content);
    }

    let (listener, log) = RecordingListener::new();
    view.set_listener(listener);

    let mut touches_consumed = 0;
    for (index, step) in scenario.steps.iter().enumerate() {
        tracing::debug!("step {} at {}ms: {:?}", index, view.now_ms(), step);
        if run_step(&mut view, step) {
            touches_consumed += 1;
        }
    }

    let events = log
        .lock()
        .map_err(|e| anyhow!("listener log unavailable: {e}"))?
        .clone();

    tracing::info!(
        "ran {} steps: final offset {} after {}ms, {} callbacks",
        scenario.steps.len(),
        view.surface().offset(),
        view.now_ms(),
        events.len()
    );

    Ok(SimulationReport {
        final_offset: view.surface().offset(),
        max_offset: view.max_scroll_offset(),
        resting_offset: view.absolute_starting_position(),
        content_inner_offset: view.content_view().map(|c| c.inner_offset()),
        elapsed_ms: view.now_ms(),
        animating: view.is_animating(),
        finger_down: view.is_finger_down(),
        drag: view.drag_state().into(),
        touches_consumed,
        events,
    })
}

type SimView = BouncyScrollView<SimulatedSurface, SimContent>;

/// Returns `true` when a touch step scrolled the outer surface.
fn run_step(view: &mut SimView, step: &ScenarioStep) -> bool {
    match *step {
        ScenarioStep::Press { x, y } => view.dispatch_touch(&TouchEvent::down(x, y)),
        ScenarioStep::Move { x, y } => view.dispatch_touch(&TouchEvent::moved(x, y)),
        ScenarioStep::Release { x, y } => view.dispatch_touch(&TouchEvent::up(x, y)),
        ScenarioStep::Cancel { x, y } => view.dispatch_touch(&TouchEvent::cancel(x, y)),
        ScenarioStep::Tap { x, y } => view.dispatch_batch(&TouchEvent::tap(x, y)),
        ScenarioStep::Wait { ms } => {
            view.advance(ms);
            false
        }
        ScenarioStep::ScrollTo { offset } => {
            view.scroll_to(offset);
            false
        }
        ScenarioStep::AnimateToStart => {
            view.animate_to_starting_position();
            false
        }
        ScenarioStep::ResetPosition => {
            view.reset_position();
            false
        }
        ScenarioStep::SetContent { w, h } => {
            let content = view.surface().content(Size::new(w, h));
            view.set_content_view(content);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DragFlags;
    use bouncy_scroll::sim::ListenerEvent;

    fn run_json(input: &str, config: &BouncyConfig) -> Result<SimulationReport> {
        run_scenario(&Scenario::from_json(input)?, config)
    }

    fn run(steps: &str) -> SimulationReport {
        let input = format!(
            r#"{{
                "viewport": {{ "w": 400, "h": 1000 }},
                "content": {{ "w": 400, "h": 200 }},
                "steps": {steps}
            }}"#
        );
        run_json(&input, &BouncyConfig::default()).unwrap()
    }

    #[test]
    fn entrance_animation_reaches_resting_offset() {
        let report = run(r#"[{ "type": "animate_to_start" }, { "type": "wait", "ms": 600 }]"#);

        assert_eq!(report.final_offset, 340);
        assert_eq!(report.resting_offset, 340);
        assert_eq!(report.max_offset, 1200);
        assert_eq!(report.content_inner_offset, Some(1));
        assert_eq!(report.elapsed_ms, 600);
        assert!(!report.animating);
    }

    #[test]
    fn tap_outside_is_not_consumed() {
        let report = run(
            r#"[
                { "type": "scroll_to", "offset": 340 },
                { "type": "tap", "x": 200, "y": 100 }
            ]"#,
        );

        assert_eq!(report.touches_consumed, 0);
        assert_eq!(report.drag, DragFlags::default());
        assert_eq!(report.final_offset, 340);
    }

    #[test]
    fn drag_on_content_scrolls_to_bottom_edge() {
        let report = run(
            r#"[
                { "type": "scroll_to", "offset": 340 },
                { "type": "press", "x": 200, "y": 700 },
                { "type": "move", "x": 200, "y": 1040 },
                { "type": "release", "x": 200, "y": 1040 }
            ]"#,
        );

        assert_eq!(report.touches_consumed, 3);
        assert_eq!(report.final_offset, 0);
        assert!(!report.finger_down);
        assert_eq!(report.events.last(), Some(&ListenerEvent::HitBottom));
    }

    #[test]
    fn set_content_extends_range() {
        let report = run(r#"[{ "type": "set_content", "w": 400, "h": 500 }]"#);
        assert_eq!(report.max_offset, 1500);
    }

    #[test]
    fn scroll_assist_from_config() {
        let input = r#"{
            "viewport": { "w": 400, "h": 1000 },
            "content": { "w": 400, "h": 200 },
            "steps": [
                { "type": "scroll_to", "offset": 950 },
                { "type": "wait", "ms": 1000 }
            ]
        }"#;
        let config = BouncyConfig::default().with_scroll_assist(true);
        let report = run_json(input, &config).unwrap();

        assert_eq!(report.final_offset, 1200);
        assert_eq!(
            report.events.iter().filter(|e| **e == ListenerEvent::HitTop).count(),
            1
        );
    }
}
