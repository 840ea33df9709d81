use crate::color::Color;

use super::Segment;

const SEGMENT_ALPHA: f32 = 0.6;

/// Visual state of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentAppearance {
    /// The segment is within the bottom `level` segments.
    Highlighted,
    /// The segment is above the current level.
    Dim,
}

/// Colors used when painting segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentStyle {
    /// Fill of highlighted segments.
    pub active_color: Color,
    /// Fill of dim segments.
    pub inactive_color: Color,
}

impl Default for SegmentStyle {
    fn default() -> Self {
        Self {
            active_color: Color::WHITE.with_alpha(SEGMENT_ALPHA),
            inactive_color: Color::BLACK.with_alpha(SEGMENT_ALPHA),
        }
    }
}

impl SegmentStyle {
    /// Returns the fill for `appearance`.
    pub fn color_for(&self, appearance: SegmentAppearance) -> Color {
        match appearance {
            SegmentAppearance::Highlighted => self.active_color,
            SegmentAppearance::Dim => self.inactive_color,
        }
    }
}

/// Render target for segment fills.
///
/// The switch repaints every segment through this trait after each state
/// change. Hosts forward the fills to their drawing layer.
pub trait SegmentCanvas: Send {
    /// Paints `segment` with `color`.
    fn fill_segment(&mut self, segment: &Segment, appearance: SegmentAppearance, color: Color);
}

/// A canvas that discards all fills.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCanvas;

impl SegmentCanvas for NullCanvas {
    fn fill_segment(&mut self, _segment: &Segment, _appearance: SegmentAppearance, _color: Color) {}
}

pub(super) fn render_active_segment(
    canvas: &mut dyn SegmentCanvas,
    segment: &Segment,
    style: &SegmentStyle,
) {
    let appearance = SegmentAppearance::Highlighted;
    canvas.fill_segment(segment, appearance, style.color_for(appearance));
}

pub(super) fn render_inactive_segment(
    canvas: &mut dyn SegmentCanvas,
    segment: &Segment,
    style: &SegmentStyle,
) {
    let appearance = SegmentAppearance::Dim;
    canvas.fill_segment(segment, appearance, style.color_for(appearance));
}
