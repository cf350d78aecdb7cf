//! In-memory host
//!
//! A simulated scroll surface and content view for headless runs and tests.
//! The content is laid out the way the container expects: below a top spacer
//! one viewport tall, so its screen position follows the outer offset.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use bouncy_core::{Rect, ScrollChange, Size};
use serde::Serialize;

use crate::surface::{ContentView, OverscrollMode, ScrollContext, ScrollListener, ScrollSurface};

/// Scroll surface backed by plain fields
#[derive(Debug)]
pub struct SimulatedSurface {
    viewport: Rect,
    offset: Rc<Cell<i32>>,
    max_offset: i32,
    overscroll: OverscrollMode,
}

impl SimulatedSurface {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            offset: Rc::new(Cell::new(0)),
            max_offset: 0,
            overscroll: OverscrollMode::Never,
        }
    }

    pub fn with_overscroll(mut self, mode: OverscrollMode) -> Self {
        self.overscroll = mode;
        self
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Largest offset reported by the last layout pass
    pub fn max_offset(&self) -> i32 {
        self.max_offset
    }

    /// Resize the viewport. The owning view must be told via
    /// `on_size_changed`.
    pub fn resize(&mut self, size: Size) {
        self.viewport.size = size;
    }

    /// Create a content view that tracks this surface's offset
    pub fn content(&self, size: Size) -> SimContent {
        SimContent {
            size,
            viewport: self.viewport,
            outer_offset: Rc::clone(&self.offset),
            inner_offset: 0,
        }
    }
}

impl ScrollSurface for SimulatedSurface {
    fn offset(&self) -> i32 {
        self.offset.get()
    }

    fn set_offset(&mut self, offset: i32) {
        self.offset.set(offset);
    }

    fn viewport_height(&self) -> i32 {
        self.viewport.height() as i32
    }

    fn overscroll_mode(&self) -> OverscrollMode {
        self.overscroll
    }

    fn set_max_offset(&mut self, max_offset: i32) {
        self.max_offset = max_offset;
    }
}

/// Content view positioned below a viewport-tall spacer
#[derive(Debug)]
pub struct SimContent {
    size: Size,
    viewport: Rect,
    outer_offset: Rc<Cell<i32>>,
    inner_offset: i32,
}

impl SimContent {
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn inner_offset(&self) -> i32 {
        self.inner_offset
    }
}

impl ContentView for SimContent {
    fn screen_bounds(&self) -> Rect {
        let top = self.viewport.y() + self.viewport.height() - self.outer_offset.get() as f32;
        Rect::new(self.viewport.x(), top, self.size.width, self.size.height)
    }

    fn height(&self) -> i32 {
        self.size.height as i32
    }

    fn set_inner_offset(&mut self, offset: i32) {
        self.inner_offset = offset;
    }
}

/// A listener callback as recorded by [`RecordingListener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ListenerEvent {
    HitBottom,
    HitTop,
    ScrollChanged { offset: i32, previous_offset: i32 },
}

/// Shared log of listener callbacks
pub type EventLog = Arc<Mutex<Vec<ListenerEvent>>>;

/// Listener that appends every callback to a shared log
#[derive(Debug, Default)]
pub struct RecordingListener {
    log: EventLog,
}

impl RecordingListener {
    /// Create a listener and the log it writes to
    pub fn new() -> (Self, EventLog) {
        let listener = Self::default();
        let log = Arc::clone(&listener.log);
        (listener, log)
    }

    fn record(&self, event: ListenerEvent) {
        if let Ok(mut log) = self.log.lock() {
            log.push(event);
        }
    }
}

impl<C> ScrollListener<C> for RecordingListener {
    fn on_content_hit_bottom(&mut self, _content: Option<&C>) {
        self.record(ListenerEvent::HitBottom);
    }

    fn on_content_hit_top(&mut self, _content: Option<&C>) {
        self.record(ListenerEvent::HitTop);
    }

    fn on_scroll_changed(&mut self, change: &ScrollChange, _context: &ScrollContext<'_, C>) {
        self.record(ListenerEvent::ScrollChanged {
            offset: change.offset,
            previous_offset: change.previous_offset,
        });
    }
}
