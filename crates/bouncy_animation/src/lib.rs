//! Bouncy Animation System
//!
//! Timed offset animations and the single-threaded task queue that drives them.
//!
//! # Features
//!
//! - **Easing**: Interpolation curves, including overshoot and accelerate
//! - **Offset tweens**: Integer offset animations with a fixed duration
//! - **Task scheduler**: Cancellable delayed tasks on a virtual millisecond clock

pub mod easing;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{TaskId, TaskScheduler};
pub use tween::OffsetAnimation;
