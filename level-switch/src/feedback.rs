//! Selection feedback for accepted level changes.
//!
//! ## Usage
//!
//! Implement [`FeedbackGenerator`] to forward selection ticks to a haptics
//! backend (or a sound, or a log line) and install it with
//! [`crate::LevelSwitchArgs::feedback`]. Without one the switch uses
//! [`NoFeedback`].
//!
//! The switch arms a [`FeedbackCue`] when an interaction starts, fires it
//! once per level change and releases it when the interaction ends.

use std::{fmt, sync::Arc};

/// Receives selection feedback requests from a level switch.
///
/// All methods are fire-and-forget: the switch never inspects a result, and
/// an implementation that does nothing leaves level handling unchanged.
pub trait FeedbackGenerator: Send + Sync {
    /// Warm up the backend so the next tick has low latency.
    fn prepare(&self);

    /// Emit one selection tick.
    fn selection_changed(&self);

    /// The interaction that armed the generator has ended.
    fn release(&self) {}
}

/// A generator that ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFeedback;

impl FeedbackGenerator for NoFeedback {
    fn prepare(&self) {}

    fn selection_changed(&self) {}
}

/// An armed feedback handle scoped to one interaction.
///
/// Arming prepares the generator. Dropping the cue disarms it, which
/// notifies the generator through [`FeedbackGenerator::release`].
pub struct FeedbackCue {
    generator: Arc<dyn FeedbackGenerator>,
}

impl FeedbackCue {
    /// Prepares `generator` and returns the armed cue.
    pub fn arm(generator: Arc<dyn FeedbackGenerator>) -> Self {
        generator.prepare();
        Self { generator }
    }

    /// Emits one tick and re-arms for the next change.
    pub fn fire(&self) {
        self.generator.selection_changed();
        self.generator.prepare();
    }
}

impl Drop for FeedbackCue {
    fn drop(&mut self) {
        self.generator.release();
    }
}

impl fmt::Debug for FeedbackCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FeedbackCue(armed)")
    }
}
