//! Scroll edge detection
//!
//! Filters duplicate scroll-changed deliveries and classifies each accepted
//! event: offset 0 means the content left through the bottom of the viewport,
//! the max offset means it left through the top.

use bouncy_core::ScrollChange;

use crate::config::DuplicateScrollPolicy;
use crate::surface::OverscrollMode;

/// Viewport edge the content scrolled past
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Bottom,
    Top,
}

/// An accepted scroll change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollNotice {
    pub change: ScrollChange,
    pub edge: Option<Edge>,
}

/// Duplicate filter and edge classifier.
///
/// Starts with no previous change, so the first change is always accepted.
/// A filter seeded with `(0, 0)` instead would drop an initial `(0, 0)`
/// event; this one delivers it and reports the bottom edge.
#[derive(Debug, Default)]
pub struct ScrollEdgeNotifier {
    policy: DuplicateScrollPolicy,
    /// Last accepted change, `None` until the first one
    last: Option<ScrollChange>,
}

impl ScrollEdgeNotifier {
    pub fn new(policy: DuplicateScrollPolicy) -> Self {
        Self { policy, last: None }
    }

    pub fn policy(&self) -> DuplicateScrollPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: DuplicateScrollPolicy) {
        self.policy = policy;
    }

    /// Last accepted change
    pub fn last(&self) -> Option<ScrollChange> {
        self.last
    }

    /// Accept or drop a scroll change. Returns `None` for a dropped duplicate.
    pub fn observe(
        &mut self,
        change: ScrollChange,
        overscroll: OverscrollMode,
        max_offset: i32,
    ) -> Option<ScrollNotice> {
        if self.is_duplicate(&change, overscroll) {
            tracing::trace!("dropping duplicate scroll change {:?}", change);
            return None;
        }
        self.last = Some(change);

        let edge = if change.offset == 0 {
            Some(Edge::Bottom)
        } else if change.offset == max_offset {
            Some(Edge::Top)
        } else {
            None
        };

        Some(ScrollNotice { change, edge })
    }

    fn is_duplicate(&self, change: &ScrollChange, overscroll: OverscrollMode) -> bool {
        let repeated = self.last.as_ref() == Some(change);
        match self.policy {
            DuplicateScrollPolicy::WhenOverscrollDisabled => {
                repeated && overscroll == OverscrollMode::Never
            }
            DuplicateScrollPolicy::Always => repeated,
            DuplicateScrollPolicy::Never => false,
        }
    }
}
