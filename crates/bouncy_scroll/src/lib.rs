//! Bouncy Scroll
//!
//! A scroll container that embeds one content view and gives it "bounce" and
//! "scroll assist" behaviour: the content rests part-way up the viewport,
//! follows drags that start on it, and can be snapped fully off screen once
//! scrolling stops.
//!
//! The container is headless. The host provides a [`ScrollSurface`], a
//! [`ContentView`], raw touch events and a clock; the container decides who
//! owns each gesture and when to animate.
//!
//! # Example
//!
//! ```rust
//! use bouncy_core::{Rect, Size, TouchEvent};
//! use bouncy_scroll::prelude::*;
//!
//! let surface = SimulatedSurface::new(Rect::new(0.0, 0.0, 400.0, 1000.0));
//! let content = surface.content(Size::new(400.0, 200.0));
//!
//! let mut view = BouncyScrollView::new(surface, &BouncyConfig::default());
//! view.set_content_view(content);
//! view.animate_to_starting_position();
//! view.advance(600);
//! assert_eq!(view.surface().offset(), 340);
//!
//! // Drag the content up by 100px
//! view.dispatch_touch(&TouchEvent::down(200.0, 700.0));
//! view.dispatch_touch(&TouchEvent::moved(200.0, 600.0));
//! view.dispatch_touch(&TouchEvent::up(200.0, 600.0));
//! assert_eq!(view.surface().offset(), 440);
//! ```

pub mod assist;
pub mod config;
pub mod edge;
pub mod position;
pub mod sim;
pub mod stop;
pub mod surface;
pub mod touch;
pub mod view;

pub use assist::{AssistTarget, ScrollAssist};
pub use config::{BouncyConfig, DuplicateScrollPolicy, Interpolation};
pub use edge::{Edge, ScrollEdgeNotifier, ScrollNotice};
pub use position::PositionController;
pub use stop::ScrollStopDetector;
pub use surface::{ContentView, OverscrollMode, ScrollContext, ScrollListener, ScrollSurface};
pub use touch::{DragState, TouchDisposition, TouchRouter};
pub use view::{BouncyScrollView, ViewTask};

/// Commonly used types
pub mod prelude {
    pub use crate::config::BouncyConfig;
    pub use crate::sim::{RecordingListener, SimContent, SimulatedSurface};
    pub use crate::surface::{ContentView, ScrollContext, ScrollListener, ScrollSurface};
    pub use crate::view::BouncyScrollView;
}
