use crate::{dp::DpPosition, feedback::FeedbackCue};

/// Phase of a drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// The pointer went down and started moving.
    Began,
    /// The pointer moved while the drag is active.
    Changed,
    /// The pointer was lifted.
    Ended,
    /// The host cancelled the gesture.
    Cancelled,
    /// The gesture recognizer gave up.
    Failed,
}

impl DragPhase {
    /// Returns `true` for the phases that leave the tracking state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled | Self::Failed)
    }
}

/// A single drag sample in host-view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEvent {
    pub phase: DragPhase,
    pub position: DpPosition,
}

/// Pointer input delivered to a level switch.
///
/// Positions are in host-view coordinates; the switch converts them using
/// its configured origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A recognized tap (pointer down and up without dragging).
    Tap(DpPosition),
    /// One phase of a drag gesture.
    Drag(DragEvent),
}

impl PointerEvent {
    pub fn tap(position: impl Into<DpPosition>) -> Self {
        Self::Tap(position.into())
    }

    pub fn drag(phase: DragPhase, position: impl Into<DpPosition>) -> Self {
        Self::Drag(DragEvent {
            phase,
            position: position.into(),
        })
    }

    pub fn drag_began(position: impl Into<DpPosition>) -> Self {
        Self::drag(DragPhase::Began, position)
    }

    pub fn drag_moved(position: impl Into<DpPosition>) -> Self {
        Self::drag(DragPhase::Changed, position)
    }

    pub fn drag_ended(position: impl Into<DpPosition>) -> Self {
        Self::drag(DragPhase::Ended, position)
    }
}

/// Outcome of handling one pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchResponse {
    /// The event had no effect (outside the working area, no segment hit,
    /// not tracking, or the switch was dismissed).
    Ignored,
    /// The event mapped onto the level already selected.
    Unchanged,
    /// The level changed; carries the new effective level.
    LevelChanged(usize),
    /// A drag started tracking.
    DragStarted,
    /// A drag stopped tracking.
    DragEnded,
    /// A tap outside the container requested dismissal.
    Dismissed,
}

/// Interaction state of the switch.
///
/// `Tracking` owns the armed feedback cue; leaving it drops the cue, which
/// disarms the generator.
#[derive(Debug, Default)]
pub(super) enum InteractionState {
    #[default]
    Idle,
    Tracking(FeedbackCue),
    Dismissed,
}

impl InteractionState {
    pub fn is_tracking(&self) -> bool {
        matches!(self, Self::Tracking(_))
    }

    pub fn is_dismissed(&self) -> bool {
        matches!(self, Self::Dismissed)
    }

    pub fn cue(&self) -> Option<&FeedbackCue> {
        match self {
            Self::Tracking(cue) => Some(cue),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::feedback::NoFeedback;

    use super::*;

    #[test]
    fn terminal_phases() {
        assert!(!DragPhase::Began.is_terminal());
        assert!(!DragPhase::Changed.is_terminal());
        assert!(DragPhase::Ended.is_terminal());
        assert!(DragPhase::Cancelled.is_terminal());
        assert!(DragPhase::Failed.is_terminal());
    }

    #[test]
    fn only_tracking_holds_a_cue() {
        assert!(InteractionState::Idle.cue().is_none());
        assert!(InteractionState::Dismissed.cue().is_none());
        let tracking = InteractionState::Tracking(FeedbackCue::arm(Arc::new(NoFeedback)));
        assert!(tracking.is_tracking());
        assert!(tracking.cue().is_some());
    }
}
