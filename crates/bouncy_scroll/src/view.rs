//! Bouncy scroll container
//!
//! Hosts a single content view between two viewport-sized spacers inside an
//! outer scroll surface. The content rests part-way up the viewport, can be
//! dragged up and down, and can be snapped fully off screen once scrolling
//! stops.
//!
//! # Layout
//!
//! ```text
//!  offset 0          offset = H - rest     offset = H + c
//! +---------+        +---------+           [content]
//! |         |        |         |           +---------+
//! | viewport|        |[content]|           |         |
//! +---------+        +---------+           +---------+
//!  [content]
//! ```
//!
//! The top spacer is `H` tall, so the largest offset is `H + c` where `c` is
//! the content height. At offset 0 the content sits just below the viewport.
//!
//! # Event flow
//!
//! Touch events go through [`intercept_touch`] then [`touch_event`]; both
//! stages report the finger to the stop detector first. Offset changes, from
//! drags, animations, or the host via [`on_scroll_changed`], are
//! deduplicated, forwarded to the listener and checked against both edges.
//! Stop checks and deferred animation starts run on the view's task queue,
//! which the host drives with [`advance`].
//!
//! [`intercept_touch`]: BouncyScrollView::intercept_touch
//! [`touch_event`]: BouncyScrollView::touch_event
//! [`on_scroll_changed`]: BouncyScrollView::on_scroll_changed
//! [`advance`]: BouncyScrollView::advance

use bouncy_animation::{Easing, OffsetAnimation, TaskId, TaskScheduler};
use bouncy_core::{ScrollChange, TouchEvent, TouchPhase};

use crate::assist::ScrollAssist;
use crate::config::{BouncyConfig, DuplicateScrollPolicy};
use crate::edge::{Edge, ScrollEdgeNotifier};
use crate::hit_test::is_touching_content;
use crate::position::PositionController;
use crate::stop::ScrollStopDetector;
use crate::surface::{ContentView, OverscrollMode, ScrollContext, ScrollListener, ScrollSurface};
use crate::touch::{DragState, TouchRouter};

/// Work queued on the view's scheduler
#[derive(Debug, Clone, PartialEq)]
pub enum ViewTask {
    /// Compare the current offset with the last sample
    CheckScrollStopped,
    /// Start an animation on the next turn of the queue
    StartAnimation(OffsetAnimation),
}

/// Scroll container with a draggable, auto-snapping content view
pub struct BouncyScrollView<S, C>
where
    S: ScrollSurface,
    C: ContentView,
{
    surface: S,
    content: Option<C>,
    listener: Option<Box<dyn ScrollListener<C>>>,
    router: TouchRouter,
    stop_detector: ScrollStopDetector,
    assist: ScrollAssist,
    position: PositionController,
    edges: ScrollEdgeNotifier,
    scheduler: TaskScheduler<ViewTask>,
    animation: Option<OffsetAnimation>,
    /// Clock value the running animation was last stepped at
    animation_clock_ms: u64,
    /// Last finger y while the surface owns a drag
    drag_anchor_y: Option<f32>,
}

impl<S, C> BouncyScrollView<S, C>
where
    S: ScrollSurface,
    C: ContentView,
{
    pub fn new(surface: S, config: &BouncyConfig) -> Self {
        let mut view = Self {
            surface,
            content: None,
            listener: None,
            router: TouchRouter::new(),
            stop_detector: ScrollStopDetector::new(config.stop_check_interval_ms),
            assist: ScrollAssist::new(
                config.scroll_assist,
                config.scroll_assist_duration,
                config.scroll_assist_threshold,
            ),
            position: PositionController::new(
                config.relative_starting_position,
                config.view_animation_duration,
                config.easing(),
            ),
            edges: ScrollEdgeNotifier::new(config.duplicate_scroll_policy),
            scheduler: TaskScheduler::new(),
            animation: None,
            animation_clock_ms: 0,
            drag_anchor_y: None,
        };
        view.on_size_changed();
        view
    }

    // =========================================================================
    // Layout & content
    // =========================================================================

    /// Re-read the viewport size: recompute the resting offset, rebuild the
    /// entrance animation and resize the spacers.
    pub fn on_size_changed(&mut self) {
        let height = self.surface.viewport_height();
        self.position.set_viewport_height(height);
        self.surface.set_max_offset(self.max_scroll_offset());
        tracing::debug!(
            "layout: viewport={} resting offset={} max offset={}",
            height,
            self.position.absolute_start(),
            self.max_scroll_offset()
        );
    }

    /// Largest reachable offset: the top spacer (one viewport tall) plus the
    /// content. Without content the content height counts as 0.
    pub fn max_scroll_offset(&self) -> i32 {
        self.surface.viewport_height() + self.content_height()
    }

    fn content_height(&self) -> i32 {
        self.content.as_ref().map_or(0, |c| c.height())
    }

    /// Replace the content view. The previous view is detached first and
    /// returned; a gesture in progress on it is forgotten.
    pub fn set_content_view(&mut self, content: C) -> Option<C> {
        let previous = self.take_content_view();
        self.content = Some(content);
        self.surface.set_max_offset(self.max_scroll_offset());
        previous
    }

    /// Detach the content view
    pub fn take_content_view(&mut self) -> Option<C> {
        let previous = self.content.take();
        self.router.reset();
        self.drag_anchor_y = None;
        self.surface.set_max_offset(self.max_scroll_offset());
        previous
    }

    pub fn content_view(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Install the listener, replacing any previous one
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: ScrollListener<C> + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) -> Option<Box<dyn ScrollListener<C>>> {
        self.listener.take()
    }

    // =========================================================================
    // Touch
    // =========================================================================

    /// Interception stage. Never consumes the event.
    pub fn intercept_touch(&mut self, event: &TouchEvent) {
        self.stop_detector.on_touch(event.phase, &mut self.scheduler);
        let touching = is_touching_content(self.content.as_ref(), event);
        self.router.intercept(event.phase, touching);
    }

    /// Handling stage. Returns `true` when the outer surface scrolled with
    /// the event, `false` when it falls through to the content.
    pub fn touch_event(&mut self, event: &TouchEvent) -> bool {
        self.stop_detector.on_touch(event.phase, &mut self.scheduler);
        let touching = is_touching_content(self.content.as_ref(), event);
        let disposition = self.router.handle(event.phase, touching);

        if disposition.is_consumed() {
            self.drag(event);
        } else if event.phase.is_release() {
            self.drag_anchor_y = None;
        }
        disposition.is_consumed()
    }

    /// Run both stages for a single event
    pub fn dispatch_touch(&mut self, event: &TouchEvent) -> bool {
        self.intercept_touch(event);
        self.touch_event(event)
    }

    /// Deliver events that arrived together, such as the down and up of a
    /// quick tap. Every event is intercepted before any is handled. Returns
    /// `true` if any event scrolled the surface.
    pub fn dispatch_batch(&mut self, events: &[TouchEvent]) -> bool {
        for event in events {
            self.intercept_touch(event);
        }
        let mut consumed = false;
        for event in events {
            consumed |= self.touch_event(event);
        }
        consumed
    }

    fn drag(&mut self, event: &TouchEvent) {
        match event.phase {
            TouchPhase::Down => self.drag_anchor_y = Some(event.y),
            TouchPhase::Move => {
                let Some(anchor) = self.drag_anchor_y else {
                    self.drag_anchor_y = Some(event.y);
                    return;
                };
                // Finger up scrolls the content up
                let delta = (anchor - event.y).round() as i32;
                if delta != 0 {
                    self.drag_anchor_y = Some(event.y);
                    self.scroll_to(self.surface.offset() + delta);
                }
            }
            TouchPhase::Up | TouchPhase::Cancel => self.drag_anchor_y = None,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.router.state()
    }

    pub fn is_finger_down(&self) -> bool {
        self.stop_detector.is_finger_down()
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Move the outer surface, clamped to `[0, max]` unless it overscrolls.
    /// Reports the change like any other scroll.
    pub fn scroll_to(&mut self, offset: i32) {
        let offset = match self.surface.overscroll_mode() {
            OverscrollMode::Never => offset.clamp(0, self.max_scroll_offset().max(0)),
            OverscrollMode::Always => offset,
        };
        let previous = self.surface.offset();
        if offset == previous {
            return;
        }
        self.surface.set_offset(offset);
        self.on_scroll_changed(ScrollChange::new(offset, previous));
    }

    /// Scroll-changed notification from the surface
    pub fn on_scroll_changed(&mut self, change: ScrollChange) {
        let max_offset = self.max_scroll_offset();
        let Some(notice) = self
            .edges
            .observe(change, self.surface.overscroll_mode(), max_offset)
        else {
            return;
        };

        tracing::trace!("scroll {} -> {}", change.previous_offset, change.offset);
        self.stop_detector.on_scroll_changed(&change, &mut self.scheduler);

        if let Some(listener) = self.listener.as_mut() {
            let context = ScrollContext {
                content: self.content.as_ref(),
                max_offset,
                resting_offset: self.position.absolute_start(),
                viewport_height: self.surface.viewport_height(),
            };
            listener.on_scroll_changed(&change, &context);
        }

        match notice.edge {
            Some(Edge::Bottom) => {
                tracing::debug!("content hit bottom");
                self.reset_position();
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_content_hit_bottom(self.content.as_ref());
                }
            }
            Some(Edge::Top) => {
                tracing::debug!("content hit top at offset {}", max_offset);
                self.reset_position();
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_content_hit_top(self.content.as_ref());
                }
            }
            None => {}
        }
    }

    /// Park the content's own container at its resting inner offset
    pub fn reset_position(&mut self) {
        self.position.reset_position(self.content.as_mut());
    }

    /// Reset, then animate the outer offset up to the resting position
    pub fn animate_to_starting_position(&mut self) {
        self.reset_position();
        let animation = self.position.entrance_animation();
        tracing::debug!(
            "entrance animation {} -> {} over {}ms",
            animation.from(),
            animation.to(),
            animation.duration_ms()
        );
        self.start_animation(animation);
    }

    /// Start an animation now, superseding any running one
    fn start_animation(&mut self, mut animation: OffsetAnimation) {
        animation.start();
        self.animation_clock_ms = self.scheduler.now_ms();
        let first = animation.value();
        self.animation = animation.is_playing().then_some(animation);
        self.scroll_to(first);
    }

    fn step_animation(&mut self, now_ms: u64) {
        let Some(mut animation) = self.animation.take() else {
            return;
        };
        animation.tick(now_ms.saturating_sub(self.animation_clock_ms) as f32);
        self.animation_clock_ms = now_ms;

        let value = animation.value();
        if animation.is_playing() {
            self.animation = Some(animation);
        }
        self.scroll_to(value);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Current view clock in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Advance the clock, running due stop checks and animation starts in
    /// order and stepping the running animation. `advance(0)` runs only what
    /// is already due.
    pub fn advance(&mut self, dt_ms: u64) {
        let target = self.scheduler.now_ms().saturating_add(dt_ms);
        self.run_until(target, |_| {});
    }

    /// Queued stop checks and animation starts
    pub fn pending_task_count(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Run every task due by `target_ms`, showing each to `observe` before
    /// it runs. The animation is stepped up to each task's due time first.
    fn run_until(&mut self, target_ms: u64, mut observe: impl FnMut(&ViewTask)) {
        while let Some((id, task)) = self.scheduler.pop_due(target_ms) {
            self.step_animation(self.scheduler.now_ms());
            observe(&task);
            self.run_task(id, task);
        }
        self.scheduler.advance_to(target_ms);
        self.step_animation(target_ms);
    }

    fn run_task(&mut self, id: TaskId, task: ViewTask) {
        match task {
            ViewTask::CheckScrollStopped => {
                let offset = self.surface.offset();
                if self.stop_detector.check(id, offset, &mut self.scheduler) {
                    self.on_scroll_stopped();
                }
            }
            ViewTask::StartAnimation(animation) => self.start_animation(animation),
        }
    }

    fn on_scroll_stopped(&mut self) {
        let offset = self.surface.offset();
        let viewport_height = self.surface.viewport_height();
        let target = self
            .assist
            .decide(offset, self.content_height(), viewport_height);
        if let Some(target) = target {
            let animation = self.assist.animation(offset, target, self.max_scroll_offset());
            if animation.from() == animation.to() {
                return;
            }
            // Deferred so it never starts in the middle of a layout pass
            self.scheduler.post(ViewTask::StartAnimation(animation));
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Apply every option from a configuration
    pub fn apply_config(&mut self, config: &BouncyConfig) {
        self.position.set_relative_start(config.relative_starting_position);
        self.position.set_duration_ms(config.view_animation_duration);
        self.position.set_easing(config.easing());
        self.assist = ScrollAssist::new(
            config.scroll_assist,
            config.scroll_assist_duration,
            config.scroll_assist_threshold,
        );
        self.edges.set_policy(config.duplicate_scroll_policy);
        self.stop_detector.set_interval_ms(config.stop_check_interval_ms);
    }

    pub fn relative_starting_position(&self) -> f32 {
        self.position.relative_start()
    }

    pub fn set_relative_starting_position(&mut self, relative: f32) {
        self.position.set_relative_start(relative);
    }

    /// Outer offset the content rests at
    pub fn absolute_starting_position(&self) -> i32 {
        self.position.absolute_start()
    }

    pub fn view_animation_duration(&self) -> i32 {
        self.position.duration_ms()
    }

    pub fn set_view_animation_duration(&mut self, duration_ms: i32) {
        self.position.set_duration_ms(duration_ms);
    }

    pub fn interpolation(&self) -> Easing {
        self.position.easing()
    }

    pub fn set_interpolation(&mut self, easing: Easing) {
        self.position.set_easing(easing);
    }

    pub fn is_scroll_assist(&self) -> bool {
        self.assist.enabled
    }

    pub fn set_scroll_assist(&mut self, enabled: bool) {
        self.assist.enabled = enabled;
    }

    pub fn scroll_assist_duration(&self) -> i32 {
        self.assist.duration_ms
    }

    pub fn set_scroll_assist_duration(&mut self, duration_ms: i32) {
        self.assist.duration_ms = duration_ms;
    }

    pub fn scroll_assist_threshold(&self) -> f32 {
        self.assist.threshold
    }

    pub fn set_scroll_assist_threshold(&mut self, threshold: f32) {
        self.assist.threshold = threshold;
    }

    pub fn duplicate_scroll_policy(&self) -> DuplicateScrollPolicy {
        self.edges.policy()
    }

    pub fn set_duplicate_scroll_policy(&mut self, policy: DuplicateScrollPolicy) {
        self.edges.set_policy(policy);
    }

    pub fn stop_check_interval_ms(&self) -> u64 {
        self.stop_detector.interval_ms()
    }

    pub fn set_stop_check_interval_ms(&mut self, interval_ms: u64) {
        self.stop_detector.set_interval_ms(interval_ms);
    }
}
