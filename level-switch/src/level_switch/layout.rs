use crate::dp::{Dp, DpPosition, DpRect, DpSize};

use super::{MAX_LEVELS, MIN_LEVELS};

/// Clamps a caller-supplied level count into `[MIN_LEVELS, MAX_LEVELS]`.
pub(super) fn clamp_level_count(requested: i32) -> usize {
    requested.clamp(MIN_LEVELS as i32, MAX_LEVELS as i32) as usize
}

/// Clamps a raw level into `[0, level_count]`.
pub(super) fn clamp_level(raw: i32, level_count: usize) -> usize {
    raw.clamp(0, level_count as i32) as usize
}

/// Geometry of the segment stack.
///
/// Rows are counted from the top of the container. The level segments fill
/// the first `level_count` rows; with `off_stop` one more row sits beneath
/// them and selects level 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct StackLayout {
    pub origin: DpPosition,
    pub segment_width: Dp,
    pub segment_height: Dp,
    pub level_count: usize,
    pub off_stop: bool,
}

impl StackLayout {
    pub fn row_count(&self) -> usize {
        self.level_count + usize::from(self.off_stop)
    }

    pub fn working_height(&self) -> Dp {
        self.segment_height * self.row_count() as f64
    }

    /// Container bounds in host-view coordinates.
    pub fn container_frame(&self) -> DpRect {
        DpRect::new(
            self.origin,
            DpSize::new(self.segment_width, self.working_height()),
        )
    }

    pub fn to_local(&self, position: DpPosition) -> DpPosition {
        position.relative_to(self.origin)
    }

    /// Frame of the row at `top_index`, in container coordinates.
    pub fn row_frame(&self, top_index: usize) -> DpRect {
        DpRect::new(
            DpPosition::new(Dp::ZERO, self.segment_height * top_index as f64),
            DpSize::new(self.segment_width, self.segment_height),
        )
    }

    /// Frame of the segment at `index` (0 = bottom segment).
    pub fn segment_frame(&self, index: usize) -> DpRect {
        self.row_frame(self.level_count - 1 - index)
    }

    /// Row under a drag position, or `None` when `local_y` leaves the
    /// working area. The bottom edge is inclusive and belongs to the last
    /// row.
    pub fn drag_row(&self, local_y: Dp) -> Option<usize> {
        if !(Dp::ZERO <= local_y && local_y <= self.working_height()) {
            return None;
        }
        let top_index = (local_y / self.segment_height).floor() as usize;
        Some(top_index.min(self.row_count() - 1))
    }

    /// Row whose frame contains a tap, in container coordinates.
    pub fn hit_row(&self, local: DpPosition) -> Option<usize> {
        (0..self.row_count()).find(|&top_index| self.row_frame(top_index).contains(local))
    }

    /// Level selected by pointing at a row: the number of rows beneath it.
    pub fn level_for_row(&self, top_index: usize) -> usize {
        self.row_count() - (top_index + 1)
    }
}
