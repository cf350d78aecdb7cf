//! Scroll-stop detection
//!
//! Polls the outer offset at a fixed cadence after every scroll change and
//! every finger release. Scrolling has stopped once two consecutive samples
//! agree and no finger is down. At most one check is ever pending: scheduling
//! a new one cancels the previous.

use bouncy_animation::{TaskId, TaskScheduler};
use bouncy_core::{ScrollChange, TouchPhase};

use crate::view::ViewTask;

/// Default polling interval (one frame at 60fps)
pub const DEFAULT_CHECK_INTERVAL_MS: u64 = 16;

#[derive(Debug)]
pub struct ScrollStopDetector {
    interval_ms: u64,
    /// Offset sample the next check compares against
    last_offset: i32,
    finger_down: bool,
    pending: Option<TaskId>,
}

impl ScrollStopDetector {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_offset: 0,
            finger_down: false,
            pending: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms;
    }

    pub fn is_finger_down(&self) -> bool {
        self.finger_down
    }

    pub fn has_pending_check(&self) -> bool {
        self.pending.is_some()
    }

    /// The outer offset moved. The previous offset becomes the baseline.
    pub fn on_scroll_changed(
        &mut self,
        change: &ScrollChange,
        scheduler: &mut TaskScheduler<ViewTask>,
    ) {
        self.last_offset = change.previous_offset;
        self.schedule(self.interval_ms, scheduler);
    }

    /// Track the finger. Releasing it triggers an immediate check.
    pub fn on_touch(&mut self, phase: TouchPhase, scheduler: &mut TaskScheduler<ViewTask>) {
        match phase {
            TouchPhase::Down => self.finger_down = true,
            TouchPhase::Up | TouchPhase::Cancel => {
                self.finger_down = false;
                self.schedule(0, scheduler);
            }
            TouchPhase::Move => {}
        }
    }

    /// Run the check `id` against the current offset. Returns `true` when
    /// scrolling has stopped; otherwise another check is scheduled.
    ///
    /// A check superseded by a later schedule is stale and does nothing: the
    /// newer pending check owns the baseline.
    pub fn check(
        &mut self,
        id: TaskId,
        offset: i32,
        scheduler: &mut TaskScheduler<ViewTask>,
    ) -> bool {
        if self.pending != Some(id) {
            tracing::trace!("skipping superseded stop check");
            return false;
        }
        self.pending = None;

        if offset == self.last_offset && !self.finger_down {
            tracing::debug!("scroll stopped at offset {}", offset);
            return true;
        }

        self.last_offset = offset;
        // A zero interval would re-run this check forever at the same instant
        self.schedule(self.interval_ms.max(1), scheduler);
        false
    }

    /// Drop any pending check
    pub fn cancel(&mut self, scheduler: &mut TaskScheduler<ViewTask>) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
    }

    fn schedule(&mut self, delay_ms: u64, scheduler: &mut TaskScheduler<ViewTask>) {
        self.cancel(scheduler);
        self.pending = Some(scheduler.post_delayed(ViewTask::CheckScrollStopped, delay_ms));
    }
}

impl Default for ScrollStopDetector {
    fn default() -> Self {
        Self::new(DEFAULT_CHECK_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the detector against a fixed offset until the queue drains,
    /// counting stop signals.
    fn run_checks(
        detector: &mut ScrollStopDetector,
        scheduler: &mut TaskScheduler<ViewTask>,
        offset: i32,
        until_ms: u64,
    ) -> usize {
        let mut stops = 0;
        while let Some((id, task)) = scheduler.pop_due(until_ms) {
            if matches!(task, ViewTask::CheckScrollStopped) && detector.check(id, offset, scheduler)
            {
                stops += 1;
            }
        }
        stops
    }

    #[test]
    fn test_single_stop_after_scroll_settles() {
        let mut scheduler = TaskScheduler::new();
        let mut detector = ScrollStopDetector::default();

        detector.on_scroll_changed(&ScrollChange::new(340, 330), &mut scheduler);
        assert_eq!(scheduler.next_due_ms(), Some(16));

        // First poll sees 340 != 330 and re-arms, second poll agrees
        assert_eq!(run_checks(&mut detector, &mut scheduler, 340, 1_000), 1);
        assert_eq!(scheduler.now_ms(), 32);
        assert!(!detector.has_pending_check());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_no_stop_while_finger_down() {
        let mut scheduler = TaskScheduler::new();
        let mut detector = ScrollStopDetector::default();

        detector.on_touch(TouchPhase::Down, &mut scheduler);
        detector.on_scroll_changed(&ScrollChange::new(100, 100), &mut scheduler);

        assert_eq!(run_checks(&mut detector, &mut scheduler, 100, 160), 0);
        assert!(detector.has_pending_check());

        detector.on_touch(TouchPhase::Up, &mut scheduler);
        assert_eq!(run_checks(&mut detector, &mut scheduler, 100, 160), 1);
    }

    #[test]
    fn test_reschedule_cancels_previous_check() {
        let mut scheduler = TaskScheduler::new();
        let mut detector = ScrollStopDetector::default();

        detector.on_scroll_changed(&ScrollChange::new(10, 0), &mut scheduler);
        detector.on_scroll_changed(&ScrollChange::new(20, 10), &mut scheduler);
        detector.on_touch(TouchPhase::Cancel, &mut scheduler);

        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(scheduler.next_due_ms(), Some(0));
    }

    #[test]
    fn test_superseded_check_keeps_single_pending() {
        let mut scheduler = TaskScheduler::new();
        let mut detector = ScrollStopDetector::default();

        detector.on_scroll_changed(&ScrollChange::new(10, 0), &mut scheduler);
        let (due, _) = scheduler.pop_due(16).unwrap();

        // The offset moves again before the popped check runs
        detector.on_scroll_changed(&ScrollChange::new(20, 10), &mut scheduler);
        assert!(!detector.check(due, 20, &mut scheduler));

        assert_eq!(scheduler.pending_count(), 1);
        assert!(detector.has_pending_check());
        assert_eq!(scheduler.next_due_ms(), Some(32));

        // The live check still sees the movement and re-arms exactly once
        let (live, _) = scheduler.pop_due(32).unwrap();
        assert!(!detector.check(live, 20, &mut scheduler));
        assert_eq!(scheduler.pending_count(), 1);
        let (last, _) = scheduler.pop_due(48).unwrap();
        assert!(detector.check(last, 20, &mut scheduler));
        assert_eq!(scheduler.pending_count(), 0);
    }
}
