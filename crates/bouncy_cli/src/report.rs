//! Report output model for simulated scroll runs.

use anyhow::Result;
use bouncy_scroll::sim::ListenerEvent;
use bouncy_scroll::DragState;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Gesture ownership flags at the end of the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DragFlags {
    pub dragging_inside_content: bool,
    pub dragging_outside_content: bool,
}

impl From<DragState> for DragFlags {
    fn from(state: DragState) -> Self {
        Self {
            dragging_inside_content: state.dragging_inside_content,
            dragging_outside_content: state.dragging_outside_content,
        }
    }
}

/// Machine-readable result of a simulated run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub final_offset: i32,
    pub max_offset: i32,
    pub resting_offset: i32,
    pub content_inner_offset: Option<i32>,
    pub elapsed_ms: u64,
    pub animating: bool,
    pub finger_down: bool,
    pub drag: DragFlags,
    /// Touch steps the outer surface scrolled with
    pub touches_consumed: usize,
    /// Listener callbacks in delivery order
    pub events: Vec<ListenerEvent>,
}

impl SimulationReport {
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
