//! A discrete level selector driven by taps and drags.
//!
//! ## Usage
//!
//! Use for stepped settings such as brightness or volume, where a vertical
//! stack of segments acts like a slide switch with detents. The bottom
//! `level` segments are highlighted.
//!
//! ```
//! use std::sync::{
//!     Arc,
//!     atomic::{AtomicUsize, Ordering},
//! };
//!
//! use level_switch::{
//!     LevelSwitch, LevelSwitchArgs, LevelSwitchCallbacks, PointerEvent, SwitchResponse,
//! };
//!
//! let last = Arc::new(AtomicUsize::new(0));
//! let seen = Arc::clone(&last);
//! let callbacks = Arc::new(
//!     LevelSwitchCallbacks::new().on_change(move |level| seen.store(level, Ordering::SeqCst)),
//! );
//!
//! let mut switch = LevelSwitch::new(LevelSwitchArgs::default().levels(4));
//! switch.set_delegate(&callbacks);
//!
//! assert_eq!(
//!     switch.handle_event(PointerEvent::drag_began([40.0, 10.0])),
//!     SwitchResponse::DragStarted
//! );
//! assert_eq!(
//!     switch.handle_event(PointerEvent::drag_moved([40.0, 100.0])),
//!     SwitchResponse::LevelChanged(2)
//! );
//! assert_eq!(last.load(Ordering::SeqCst), 2);
//! assert_eq!(switch.active_segments().len(), 2);
//! ```
use std::{
    fmt,
    sync::{Arc, Weak},
};

use derive_setters::Setters;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::{
    dp::{Dp, DpPosition, DpRect},
    feedback::{FeedbackCue, FeedbackGenerator, NoFeedback},
    prop::{Callback, CallbackWith},
};

use interaction::InteractionState;
use layout::{StackLayout, clamp_level, clamp_level_count};
use render::{render_active_segment, render_inactive_segment};

pub use interaction::{DragEvent, DragPhase, PointerEvent, SwitchResponse};
pub use render::{NullCanvas, SegmentAppearance, SegmentCanvas, SegmentStyle};

mod interaction;
mod layout;
mod render;

/// Fewest segments a switch will build.
pub const MIN_LEVELS: usize = 2;
/// Most segments a switch will build.
pub const MAX_LEVELS: usize = 8;
/// Requested level count when none is configured.
pub const DEFAULT_LEVELS: i32 = 4;
/// Height of one segment when none is configured.
pub const DEFAULT_SEGMENT_HEIGHT: Dp = Dp(72.0);
/// Width of the segment stack when none is configured.
pub const DEFAULT_SEGMENT_WIDTH: Dp = Dp(112.0);

/// Observer of a [`LevelSwitch`].
///
/// The switch holds its delegate weakly; dropping the last strong reference
/// silently detaches it.
pub trait LevelSwitchDelegate: Send + Sync {
    /// A pointer interaction changed the level. State and rendering are
    /// already updated when this runs.
    fn level_changed(&self, switch: &LevelSwitch, level: usize);

    /// A tap landed outside the switch. The host should close it.
    fn dismissed(&self, switch: &LevelSwitch);
}

/// Closure-based [`LevelSwitchDelegate`].
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct LevelSwitchCallbacks {
    /// Called with the new effective level.
    pub on_change: CallbackWith<usize>,
    /// Called when dismissal is requested.
    pub on_dismiss: Callback,
}

impl LevelSwitchCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level change handler.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the dismissal handler.
    pub fn on_dismiss<F>(mut self, on_dismiss: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_dismiss = Callback::new(on_dismiss);
        self
    }
}

impl LevelSwitchDelegate for LevelSwitchCallbacks {
    fn level_changed(&self, _switch: &LevelSwitch, level: usize) {
        self.on_change.call(level);
    }

    fn dismissed(&self, _switch: &LevelSwitch) {
        self.on_dismiss.call();
    }
}

/// One segment of the stack.
///
/// Segments carry geometry only; whether a segment is highlighted follows
/// from the switch level (see [`LevelSwitch::appearance_of`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Position in the stack, 0 being the bottom segment.
    pub index: usize,
    /// Bounds in container coordinates.
    pub frame: DpRect,
}

/// Arguments for [`LevelSwitch::new`].
#[derive(Setters)]
pub struct LevelSwitchArgs {
    /// Height of each segment.
    #[setters(into)]
    pub segment_height: Dp,
    /// Width of the stack, used for tap hit testing.
    #[setters(into)]
    pub segment_width: Dp,
    /// Requested number of segments, clamped to `[MIN_LEVELS, MAX_LEVELS]`.
    pub levels: i32,
    /// Initial raw level, clamped to `[0, levels]` when read.
    pub level: i32,
    /// Presentation hint for hosts; no effect on level handling.
    pub translucent: bool,
    /// Adds a row beneath the segments that selects level 0.
    pub off_stop: bool,
    /// Position of the stack container in host-view coordinates.
    #[setters(into)]
    pub origin: DpPosition,
    /// Segment fills.
    pub style: SegmentStyle,
    /// Selection feedback sink.
    #[setters(skip)]
    pub feedback: Arc<dyn FeedbackGenerator>,
    /// Render target for segment fills.
    #[setters(skip)]
    pub canvas: Box<dyn SegmentCanvas>,
}

impl Default for LevelSwitchArgs {
    fn default() -> Self {
        Self {
            segment_height: DEFAULT_SEGMENT_HEIGHT,
            segment_width: DEFAULT_SEGMENT_WIDTH,
            levels: DEFAULT_LEVELS,
            level: 0,
            translucent: true,
            off_stop: false,
            origin: DpPosition::ZERO,
            style: SegmentStyle::default(),
            feedback: Arc::new(NoFeedback),
            canvas: Box::new(NullCanvas),
        }
    }
}

impl LevelSwitchArgs {
    /// Installs a feedback sink shared with the host.
    pub fn feedback(mut self, feedback: Arc<dyn FeedbackGenerator>) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn canvas(mut self, canvas: impl SegmentCanvas + 'static) -> Self {
        self.canvas = Box::new(canvas);
        self
    }
}

impl fmt::Debug for LevelSwitchArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelSwitchArgs")
            .field("segment_height", &self.segment_height)
            .field("segment_width", &self.segment_width)
            .field("levels", &self.levels)
            .field("level", &self.level)
            .field("translucent", &self.translucent)
            .field("off_stop", &self.off_stop)
            .field("origin", &self.origin)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

fn positive_or_default(value: Dp, default: Dp, field: &'static str) -> Dp {
    if value.is_positive() {
        value
    } else {
        warn!(field, value = value.0, "invalid dimension, using default");
        default
    }
}

/// A vertical stack of segments selecting an integer level.
pub struct LevelSwitch {
    layout: StackLayout,
    level: i32,
    translucent: bool,
    style: SegmentStyle,
    segments: SmallVec<[Segment; MAX_LEVELS]>,
    interaction: InteractionState,
    delegate: Option<Weak<dyn LevelSwitchDelegate>>,
    feedback: Arc<dyn FeedbackGenerator>,
    canvas: Box<dyn SegmentCanvas>,
}

impl LevelSwitch {
    /// Builds the segment stack and paints the initial level.
    pub fn new(args: LevelSwitchArgs) -> Self {
        let layout = StackLayout {
            origin: args.origin,
            segment_width: positive_or_default(
                args.segment_width,
                DEFAULT_SEGMENT_WIDTH,
                "segment_width",
            ),
            segment_height: positive_or_default(
                args.segment_height,
                DEFAULT_SEGMENT_HEIGHT,
                "segment_height",
            ),
            level_count: clamp_level_count(args.levels),
            off_stop: args.off_stop,
        };
        let segments = (0..layout.level_count)
            .map(|index| Segment {
                index,
                frame: layout.segment_frame(index),
            })
            .collect();

        let mut switch = Self {
            layout,
            level: args.level,
            translucent: args.translucent,
            style: args.style,
            segments,
            interaction: InteractionState::Idle,
            delegate: None,
            feedback: args.feedback,
            canvas: args.canvas,
        };
        debug!(
            requested = args.levels,
            levels = switch.level_count(),
            level = switch.level(),
            "level switch configured"
        );
        switch.update_views();
        switch
    }

    /// Number of segments, always within `[MIN_LEVELS, MAX_LEVELS]`.
    pub fn level_count(&self) -> usize {
        self.layout.level_count
    }

    /// The effective level, clamped to `[0, level_count]`.
    pub fn level(&self) -> usize {
        clamp_level(self.level, self.layout.level_count)
    }

    /// The last raw level assigned, before clamping.
    pub fn raw_level(&self) -> i32 {
        self.level
    }

    /// Assigns the raw level and repaints.
    ///
    /// This is not a pointer-driven change, so the delegate is not notified.
    pub fn set_level(&mut self, level: i32) {
        self.level = level;
        self.update_views();
    }

    pub fn segment_height(&self) -> Dp {
        self.layout.segment_height
    }

    /// Height of the area in which drag positions are accepted.
    pub fn working_height(&self) -> Dp {
        self.layout.working_height()
    }

    /// Container bounds in host-view coordinates.
    pub fn container_frame(&self) -> DpRect {
        self.layout.container_frame()
    }

    pub fn has_off_stop(&self) -> bool {
        self.layout.off_stop
    }

    pub fn is_translucent(&self) -> bool {
        self.translucent
    }

    pub fn style(&self) -> &SegmentStyle {
        &self.style
    }

    /// All segments, bottom first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The bottom `level` segments.
    pub fn active_segments(&self) -> &[Segment] {
        &self.segments[..self.level()]
    }

    /// Segments above the current level.
    pub fn inactive_segments(&self) -> &[Segment] {
        &self.segments[self.level()..]
    }

    pub fn appearance_of(&self, segment: &Segment) -> SegmentAppearance {
        if segment.index < self.level() {
            SegmentAppearance::Highlighted
        } else {
            SegmentAppearance::Dim
        }
    }

    /// Whether a drag is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.interaction.is_tracking()
    }

    /// Whether an outside tap has dismissed the switch.
    pub fn is_dismissed(&self) -> bool {
        self.interaction.is_dismissed()
    }

    /// Attaches an observer without taking ownership of it.
    pub fn set_delegate<D>(&mut self, delegate: &Arc<D>)
    where
        D: LevelSwitchDelegate + 'static,
    {
        let delegate: Weak<D> = Arc::downgrade(delegate);
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Replaces the render target and repaints into it.
    pub fn set_canvas(&mut self, canvas: impl SegmentCanvas + 'static) {
        self.canvas = Box::new(canvas);
        self.update_views();
    }

    /// Repaints every segment for the current level.
    pub fn update_views(&mut self) {
        let (active, inactive) = self.segments.split_at(self.level());
        for segment in active {
            render_active_segment(self.canvas.as_mut(), segment, &self.style);
        }
        for segment in inactive {
            render_inactive_segment(self.canvas.as_mut(), segment, &self.style);
        }
    }

    /// Routes a pointer event to the tap or drag handler.
    pub fn handle_event(&mut self, event: PointerEvent) -> SwitchResponse {
        match event {
            PointerEvent::Tap(position) => self.tap(position),
            PointerEvent::Drag(DragEvent { phase, position }) => match phase {
                DragPhase::Began => self.begin_drag(position),
                phase if phase.is_terminal() => self.end_drag(phase),
                _ => self.drag_to(position),
            },
        }
    }

    /// Handles a recognized tap at `position` (host-view coordinates).
    ///
    /// A tap outside the container requests dismissal; a tap on a row
    /// selects its level; anything else is ignored.
    pub fn tap(&mut self, position: DpPosition) -> SwitchResponse {
        if self.is_dismissed() {
            return SwitchResponse::Ignored;
        }
        if !self.layout.container_frame().contains(position) {
            return self.dismiss();
        }
        let Some(row) = self.layout.hit_row(self.layout.to_local(position)) else {
            trace!(?position, "tap hit no segment");
            return SwitchResponse::Ignored;
        };

        let cue = FeedbackCue::arm(Arc::clone(&self.feedback));
        let response = self.select_row(row);
        if matches!(response, SwitchResponse::LevelChanged(_)) {
            cue.fire();
        }
        response
    }

    /// Starts tracking a drag if it begins inside the container.
    pub fn begin_drag(&mut self, position: DpPosition) -> SwitchResponse {
        if self.is_dismissed() || self.is_tracking() {
            return SwitchResponse::Ignored;
        }
        if !self.layout.container_frame().contains(position) {
            trace!(?position, "drag began outside the container");
            return SwitchResponse::Ignored;
        }
        self.interaction = InteractionState::Tracking(FeedbackCue::arm(Arc::clone(&self.feedback)));
        debug!("drag started");
        SwitchResponse::DragStarted
    }

    /// Maps a drag sample onto a level while tracking.
    pub fn drag_to(&mut self, position: DpPosition) -> SwitchResponse {
        if !self.is_tracking() {
            return SwitchResponse::Ignored;
        }
        let local = self.layout.to_local(position);
        let Some(row) = self.layout.drag_row(local.y) else {
            trace!(y = local.y.0, "drag left the working area");
            return SwitchResponse::Ignored;
        };

        let response = self.select_row(row);
        if matches!(response, SwitchResponse::LevelChanged(_))
            && let Some(cue) = self.interaction.cue()
        {
            cue.fire();
        }
        response
    }

    /// Stops tracking and disarms the feedback cue.
    pub fn end_drag(&mut self, phase: DragPhase) -> SwitchResponse {
        if !self.is_tracking() {
            return SwitchResponse::Ignored;
        }
        self.interaction = InteractionState::Idle;
        debug!(?phase, level = self.level(), "drag finished");
        SwitchResponse::DragEnded
    }

    fn dismiss(&mut self) -> SwitchResponse {
        self.interaction = InteractionState::Dismissed;
        debug!("dismissal requested");
        if let Some(delegate) = self.delegate() {
            delegate.dismissed(self);
        }
        SwitchResponse::Dismissed
    }

    fn select_row(&mut self, row: usize) -> SwitchResponse {
        let candidate = self.layout.level_for_row(row);
        if candidate == self.level() {
            return SwitchResponse::Unchanged;
        }
        self.level = candidate as i32;
        self.update_views();

        let level = self.level();
        debug!(level, "level changed");
        if let Some(delegate) = self.delegate() {
            delegate.level_changed(self, level);
        }
        SwitchResponse::LevelChanged(level)
    }

    fn delegate(&self) -> Option<Arc<dyn LevelSwitchDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }
}

impl fmt::Debug for LevelSwitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelSwitch")
            .field("levels", &self.level_count())
            .field("level", &self.level())
            .field("raw_level", &self.level)
            .field("segment_height", &self.layout.segment_height)
            .field("off_stop", &self.layout.off_stop)
            .field("interaction", &self.interaction)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use rstest::rstest;

    use crate::color::Color;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Changed(usize),
        Dismissed,
    }

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<Event>>,
    }

    impl Recorder {
        fn take(&self) -> Vec<Event> {
            std::mem::take(&mut *self.events.lock())
        }
    }

    impl LevelSwitchDelegate for Recorder {
        fn level_changed(&self, switch: &LevelSwitch, level: usize) {
            assert_eq!(switch.level(), level);
            assert_eq!(switch.active_segments().len(), level);
            self.events.lock().push(Event::Changed(level));
        }

        fn dismissed(&self, _switch: &LevelSwitch) {
            self.events.lock().push(Event::Dismissed);
        }
    }

    #[derive(Default)]
    struct Haptics {
        calls: Mutex<Vec<&'static str>>,
    }

    impl FeedbackGenerator for Haptics {
        fn prepare(&self) {
            self.calls.lock().push("prepare");
        }

        fn selection_changed(&self) {
            self.calls.lock().push("tick");
        }

        fn release(&self) {
            self.calls.lock().push("release");
        }
    }

    type Fills = Arc<Mutex<Vec<(usize, SegmentAppearance, Color)>>>;

    struct RecordingCanvas(Fills);

    impl SegmentCanvas for RecordingCanvas {
        fn fill_segment(&mut self, segment: &Segment, appearance: SegmentAppearance, color: Color) {
            self.0.lock().push((segment.index, appearance, color));
        }
    }

    fn switch_with_recorder(args: LevelSwitchArgs) -> (LevelSwitch, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let mut switch = LevelSwitch::new(args);
        switch.set_delegate(&recorder);
        (switch, recorder)
    }

    #[test]
    fn default_switch_starts_empty() {
        let switch = LevelSwitch::new(LevelSwitchArgs::default());
        assert_eq!(switch.level_count(), 4);
        assert_eq!(switch.level(), 0);
        assert!(switch.active_segments().is_empty());
        assert_eq!(switch.inactive_segments().len(), 4);
        assert_eq!(switch.working_height(), Dp(288.0));
    }

    #[rstest]
    #[case(1, 2)]
    #[case(20, 8)]
    #[case(-4, 2)]
    #[case(6, 6)]
    fn requested_levels_are_clamped(#[case] requested: i32, #[case] expected: usize) {
        let switch = LevelSwitch::new(LevelSwitchArgs::default().levels(requested));
        assert_eq!(switch.level_count(), expected);
        assert_eq!(switch.segments().len(), expected);
    }

    #[rstest]
    #[case(-5, 0)]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(4, 4)]
    #[case(12, 4)]
    fn raw_level_is_clamped(#[case] raw: i32, #[case] expected: usize) {
        let mut switch = LevelSwitch::new(LevelSwitchArgs::default());
        switch.set_level(raw);
        assert_eq!(switch.raw_level(), raw);
        assert_eq!(switch.level(), expected);
    }

    #[test]
    fn segments_are_indexed_from_the_bottom() {
        let switch = LevelSwitch::new(LevelSwitchArgs::default().levels(3));
        let segments = switch.segments();
        assert_eq!(segments[0].index, 0);
        assert_eq!(segments[0].frame.min_y(), Dp(144.0));
        assert_eq!(segments[2].frame.min_y(), Dp(0.0));
        assert!(
            segments
                .iter()
                .all(|segment| segment.frame.size.height == Dp(72.0))
        );
    }

    #[test]
    fn active_and_inactive_partition_the_stack() {
        let mut switch = LevelSwitch::new(LevelSwitchArgs::default().levels(5));
        for raw in -1..=7 {
            switch.set_level(raw);
            let active = switch.active_segments();
            let inactive = switch.inactive_segments();
            assert_eq!(active.len(), switch.level());
            assert_eq!(active.len() + inactive.len(), 5);
            assert!(
                active
                    .iter()
                    .all(|segment| !inactive.iter().any(|other| other.index == segment.index))
            );
            assert!(
                active
                    .iter()
                    .all(|segment| switch.appearance_of(segment) == SegmentAppearance::Highlighted)
            );
            assert!(
                inactive
                    .iter()
                    .all(|segment| switch.appearance_of(segment) == SegmentAppearance::Dim)
            );
        }
    }

    #[test]
    fn drag_to_100_reports_level_two() {
        let (mut switch, recorder) = switch_with_recorder(LevelSwitchArgs::default());
        assert_eq!(
            switch.handle_event(PointerEvent::drag_began([10.0, 10.0])),
            SwitchResponse::DragStarted
        );
        assert_eq!(
            switch.handle_event(PointerEvent::drag_moved([10.0, 100.0])),
            SwitchResponse::LevelChanged(2)
        );
        assert_eq!(recorder.take(), vec![Event::Changed(2)]);
    }

    #[test]
    fn repeated_moves_to_same_level_notify_once() {
        let (mut switch, recorder) = switch_with_recorder(LevelSwitchArgs::default());
        switch.handle_event(PointerEvent::drag_began([10.0, 10.0]));
        assert_eq!(
            switch.handle_event(PointerEvent::drag_moved([10.0, 80.0])),
            SwitchResponse::LevelChanged(2)
        );
        assert_eq!(
            switch.handle_event(PointerEvent::drag_moved([10.0, 140.0])),
            SwitchResponse::Unchanged
        );
        assert_eq!(recorder.take(), vec![Event::Changed(2)]);
    }

    #[test]
    fn unchanged_level_does_not_repaint() {
        let fills = Fills::default();
        let mut switch = LevelSwitch::new(
            LevelSwitchArgs::default()
                .level(2)
                .canvas(RecordingCanvas(Arc::clone(&fills))),
        );
        assert_eq!(fills.lock().len(), 4);
        fills.lock().clear();

        switch.begin_drag(DpPosition::from([10.0, 10.0]));
        // Row 1 of 4 maps onto level 2, the current level.
        assert_eq!(
            switch.drag_to(DpPosition::from([10.0, 100.0])),
            SwitchResponse::Unchanged
        );
        assert!(fills.lock().is_empty());
    }

    #[test]
    fn render_paints_bottom_segments_highlighted() {
        let fills = Fills::default();
        let mut switch =
            LevelSwitch::new(LevelSwitchArgs::default().canvas(RecordingCanvas(Arc::clone(&fills))));
        fills.lock().clear();

        switch.set_level(3);
        let style = SegmentStyle::default();
        let painted = fills.lock().clone();
        assert_eq!(
            painted,
            vec![
                (0, SegmentAppearance::Highlighted, style.active_color),
                (1, SegmentAppearance::Highlighted, style.active_color),
                (2, SegmentAppearance::Highlighted, style.active_color),
                (3, SegmentAppearance::Dim, style.inactive_color),
            ]
        );
    }

    #[test]
    fn drag_outside_working_area_is_ignored() {
        let (mut switch, recorder) =
            switch_with_recorder(LevelSwitchArgs::default().origin([0.0, 50.0]));
        switch.begin_drag(DpPosition::from([10.0, 60.0]));
        assert_eq!(
            switch.drag_to(DpPosition::from([10.0, 20.0])),
            SwitchResponse::Ignored
        );
        assert_eq!(
            switch.drag_to(DpPosition::from([10.0, 400.0])),
            SwitchResponse::Ignored
        );
        // Horizontal drift does not matter while tracking.
        assert_eq!(
            switch.drag_to(DpPosition::from([500.0, 150.0])),
            SwitchResponse::LevelChanged(2)
        );
        assert_eq!(recorder.take(), vec![Event::Changed(2)]);
    }

    #[test]
    fn moves_without_a_drag_are_ignored() {
        let (mut switch, recorder) = switch_with_recorder(LevelSwitchArgs::default());
        assert_eq!(
            switch.handle_event(PointerEvent::drag_moved([10.0, 100.0])),
            SwitchResponse::Ignored
        );
        assert_eq!(
            switch.handle_event(PointerEvent::drag_ended([10.0, 100.0])),
            SwitchResponse::Ignored
        );
        assert_eq!(switch.level(), 0);
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn drag_must_begin_inside_the_container() {
        let mut switch = LevelSwitch::new(LevelSwitchArgs::default());
        assert_eq!(
            switch.begin_drag(DpPosition::from([200.0, 10.0])),
            SwitchResponse::Ignored
        );
        assert!(!switch.is_tracking());
    }

    #[test]
    fn drag_lifecycle_arms_fires_and_disarms_feedback() {
        let haptics = Arc::new(Haptics::default());
        let mut switch = LevelSwitch::new(LevelSwitchArgs::default().feedback(haptics.clone()));

        switch.handle_event(PointerEvent::drag_began([10.0, 280.0]));
        assert!(switch.is_tracking());
        // Bottom row maps onto the current level 0.
        assert_eq!(
            switch.handle_event(PointerEvent::drag_moved([10.0, 280.0])),
            SwitchResponse::Unchanged
        );
        switch.handle_event(PointerEvent::drag_moved([10.0, 200.0]));
        switch.handle_event(PointerEvent::drag_moved([10.0, 210.0]));
        switch.handle_event(PointerEvent::drag_moved([10.0, 10.0]));
        assert_eq!(
            switch.handle_event(PointerEvent::drag(DragPhase::Cancelled, [10.0, 10.0])),
            SwitchResponse::DragEnded
        );
        assert!(!switch.is_tracking());
        assert_eq!(switch.level(), 3);

        assert_eq!(
            *haptics.calls.lock(),
            vec!["prepare", "tick", "prepare", "tick", "prepare", "release"]
        );

        // No further mapping once idle.
        assert_eq!(
            switch.handle_event(PointerEvent::drag_moved([10.0, 280.0])),
            SwitchResponse::Ignored
        );
        assert_eq!(switch.level(), 3);
    }

    #[rstest]
    #[case(DragPhase::Ended)]
    #[case(DragPhase::Cancelled)]
    #[case(DragPhase::Failed)]
    fn every_terminal_phase_ends_tracking(#[case] phase: DragPhase) {
        let mut switch = LevelSwitch::new(LevelSwitchArgs::default());
        switch.begin_drag(DpPosition::from([10.0, 10.0]));
        assert_eq!(
            switch.handle_event(PointerEvent::drag(phase, [10.0, 10.0])),
            SwitchResponse::DragEnded
        );
        assert!(!switch.is_tracking());
    }

    #[test]
    fn tap_on_segment_selects_its_level() {
        let haptics = Arc::new(Haptics::default());
        let (mut switch, recorder) =
            switch_with_recorder(LevelSwitchArgs::default().feedback(haptics.clone()));
        assert_eq!(
            switch.handle_event(PointerEvent::tap([50.0, 150.0])),
            SwitchResponse::LevelChanged(1)
        );
        assert_eq!(
            switch.handle_event(PointerEvent::tap([50.0, 150.0])),
            SwitchResponse::Unchanged
        );
        assert_eq!(recorder.take(), vec![Event::Changed(1)]);
        assert_eq!(
            *haptics.calls.lock(),
            vec!["prepare", "tick", "prepare", "release", "prepare", "release"]
        );
    }

    #[test]
    fn tap_and_drag_agree_on_fractional_heights() {
        let mut switch = LevelSwitch::new(LevelSwitchArgs::default().segment_height(5.6).level(2));
        assert_eq!(
            switch.handle_event(PointerEvent::tap([10.0, 20.0])),
            SwitchResponse::LevelChanged(0)
        );
        assert_eq!(
            switch.handle_event(PointerEvent::drag_began([10.0, 20.0])),
            SwitchResponse::DragStarted
        );
        assert_eq!(
            switch.handle_event(PointerEvent::drag_moved([10.0, 20.0])),
            SwitchResponse::Unchanged
        );
    }

    #[test]
    fn tap_outside_requests_dismissal() {
        let (mut switch, recorder) =
            switch_with_recorder(LevelSwitchArgs::default().origin([100.0, 100.0]).level(2));
        assert_eq!(
            switch.handle_event(PointerEvent::tap([20.0, 20.0])),
            SwitchResponse::Dismissed
        );
        assert!(switch.is_dismissed());
        assert_eq!(switch.level(), 2);
        assert_eq!(recorder.take(), vec![Event::Dismissed]);

        // The interaction is over.
        assert_eq!(
            switch.handle_event(PointerEvent::tap([150.0, 150.0])),
            SwitchResponse::Ignored
        );
        assert_eq!(
            switch.handle_event(PointerEvent::drag_began([150.0, 150.0])),
            SwitchResponse::Ignored
        );
        assert!(recorder.take().is_empty());
    }

    #[test]
    fn dismissal_disarms_an_active_drag() {
        let haptics = Arc::new(Haptics::default());
        let mut switch = LevelSwitch::new(LevelSwitchArgs::default().feedback(haptics.clone()));
        switch.begin_drag(DpPosition::from([10.0, 10.0]));
        switch.tap(DpPosition::from([500.0, 10.0]));
        assert!(!switch.is_tracking());
        assert_eq!(*haptics.calls.lock(), vec!["prepare", "release"]);
    }

    #[test]
    fn off_stop_selects_level_zero() {
        let (mut switch, recorder) =
            switch_with_recorder(LevelSwitchArgs::default().level(3).off_stop(true));
        assert_eq!(switch.working_height(), Dp(360.0));
        assert_eq!(
            switch.tap(DpPosition::from([10.0, 300.0])),
            SwitchResponse::LevelChanged(0)
        );
        assert_eq!(
            switch.tap(DpPosition::from([10.0, 10.0])),
            SwitchResponse::LevelChanged(4)
        );
        assert_eq!(recorder.take(), vec![Event::Changed(0), Event::Changed(4)]);
    }

    #[test]
    fn dropped_delegate_is_skipped() {
        let (mut switch, recorder) = switch_with_recorder(LevelSwitchArgs::default());
        drop(recorder);
        assert_eq!(
            switch.tap(DpPosition::from([10.0, 10.0])),
            SwitchResponse::LevelChanged(3)
        );
    }

    #[test]
    fn callbacks_delegate_forwards_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let on_change = Arc::clone(&seen);
        let on_dismiss = Arc::clone(&seen);
        let callbacks = Arc::new(
            LevelSwitchCallbacks::new()
                .on_change(move |level| on_change.lock().push(Event::Changed(level)))
                .on_dismiss(move || on_dismiss.lock().push(Event::Dismissed)),
        );
        let mut switch = LevelSwitch::new(LevelSwitchArgs::default().levels(2));
        switch.set_delegate(&callbacks);

        switch.tap(DpPosition::from([10.0, 10.0]));
        switch.tap(DpPosition::from([10.0, 500.0]));
        assert_eq!(*seen.lock(), vec![Event::Changed(1), Event::Dismissed]);
    }

    #[test]
    fn invalid_dimensions_fall_back_to_defaults() {
        let switch = LevelSwitch::new(
            LevelSwitchArgs::default()
                .segment_height(-3.0)
                .segment_width(f64::NAN),
        );
        assert_eq!(switch.segment_height(), DEFAULT_SEGMENT_HEIGHT);
        assert_eq!(switch.container_frame().size.width, DEFAULT_SEGMENT_WIDTH);
    }

    #[test]
    fn external_level_assignment_does_not_notify() {
        let (mut switch, recorder) = switch_with_recorder(LevelSwitchArgs::default());
        switch.set_level(3);
        assert_eq!(switch.level(), 3);
        assert!(recorder.take().is_empty());
    }
}
