//! Host collaborators
//!
//! The scroll container does not render anything. The host supplies the
//! scrollable viewport, the embedded content view, and optionally a listener
//! for edge and scroll notifications.

use bouncy_core::{Rect, ScrollChange};

/// Whether the surface may scroll past its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverscrollMode {
    /// Offsets are clamped to `[0, max]`
    #[default]
    Never,
    /// Offsets may leave `[0, max]`
    Always,
}

/// The outer scrollable viewport
pub trait ScrollSurface {
    /// Current vertical offset in pixels
    fn offset(&self) -> i32;

    /// Jump to a vertical offset
    fn set_offset(&mut self, offset: i32);

    /// Visible height of the viewport in pixels
    fn viewport_height(&self) -> i32;

    fn overscroll_mode(&self) -> OverscrollMode {
        OverscrollMode::Never
    }

    /// Called after a layout pass with the largest reachable offset
    fn set_max_offset(&mut self, _max_offset: i32) {}
}

/// The single view embedded in the scroll container
pub trait ContentView {
    /// Bounding rectangle in screen coordinates at the current scroll offset
    fn screen_bounds(&self) -> Rect;

    /// Height in pixels
    fn height(&self) -> i32;

    /// Scroll the content's own container to `offset`
    fn set_inner_offset(&mut self, offset: i32);
}

/// Read-only snapshot of the container handed to
/// [`ScrollListener::on_scroll_changed`]
pub struct ScrollContext<'a, C> {
    pub content: Option<&'a C>,
    /// Largest reachable outer offset
    pub max_offset: i32,
    /// Outer offset the content rests at
    pub resting_offset: i32,
    pub viewport_height: i32,
}

/// Receiver for scroll container notifications.
///
/// All methods default to no-ops so listeners only implement what they need.
pub trait ScrollListener<C> {
    /// The content scrolled fully off the bottom of the viewport
    fn on_content_hit_bottom(&mut self, _content: Option<&C>) {}

    /// The content scrolled fully off the top of the viewport
    fn on_content_hit_top(&mut self, _content: Option<&C>) {}

    /// The outer offset changed
    fn on_scroll_changed(&mut self, _change: &ScrollChange, _context: &ScrollContext<'_, C>) {}
}
