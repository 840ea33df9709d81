//! level-switch is a discrete level selector: a vertical stack of equal
//! segments that the user sets to an integer level by tapping or dragging,
//! like a slide switch with detents.
//!
//! # Overview
//!
//! The crate contains the control logic only. Hosts deliver pointer events
//! in [`dp::Dp`] coordinates, receive level changes through a
//! [`LevelSwitchDelegate`], paint segments through a [`SegmentCanvas`] and
//! optionally forward selection ticks to haptics through a
//! [`FeedbackGenerator`].
//!
//! ```
//! use level_switch::{LevelSwitch, LevelSwitchArgs, PointerEvent, SwitchResponse};
//!
//! let mut switch = LevelSwitch::new(LevelSwitchArgs::default().levels(20));
//! assert_eq!(switch.level_count(), 8);
//!
//! // A tap outside the stack asks the host to close it.
//! assert_eq!(
//!     switch.handle_event(PointerEvent::tap([500.0, 500.0])),
//!     SwitchResponse::Dismissed
//! );
//! ```
//!
//! # Levels
//!
//! The requested level count is clamped to `[MIN_LEVELS, MAX_LEVELS]` and the
//! level to `[0, level_count]`. Invalid input is never an error.

pub mod color;
pub mod config;
pub mod dp;
pub mod feedback;
pub mod level_switch;
pub mod prop;

pub use color::Color;
pub use config::{ConfigError, LevelSwitchConfig};
pub use dp::{Dp, DpPosition, DpRect, DpSize};
pub use feedback::{FeedbackGenerator, NoFeedback};
pub use level_switch::{
    DEFAULT_LEVELS, DEFAULT_SEGMENT_HEIGHT, DEFAULT_SEGMENT_WIDTH, DragEvent, DragPhase,
    LevelSwitch, LevelSwitchArgs, LevelSwitchCallbacks, LevelSwitchDelegate, MAX_LEVELS,
    MIN_LEVELS, NullCanvas, PointerEvent, Segment, SegmentAppearance, SegmentCanvas,
    SegmentStyle, SwitchResponse,
};
pub use prop::{Callback, CallbackWith};
