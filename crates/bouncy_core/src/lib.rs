//! Bouncy Core
//!
//! Foundational types shared by the bouncy scroll crates:
//!
//! - **Geometry**: points, sizes and screen rectangles with exclusive hit testing
//! - **Events**: touch lifecycle phases and scroll-changed payloads
//! - **Errors**: the workspace error type for configuration and scenario loading

pub mod error;
pub mod events;
pub mod geometry;

pub use error::{Error, Result};
pub use events::{ScrollChange, TouchBatch, TouchEvent, TouchPhase};
pub use geometry::{Point, Rect, Size};
