use std::sync::Arc;

use level_switch::{Color, FeedbackGenerator, Segment, SegmentAppearance, SegmentCanvas};
use parking_lot::Mutex;
use tracing::{debug, info};

/// Keeps the last painted appearance of every segment so the stack can be
/// drawn as text.
#[derive(Clone, Default)]
pub struct TextCanvas {
    rows: Arc<Mutex<Vec<SegmentAppearance>>>,
}

impl TextCanvas {
    /// Appearances ordered bottom first.
    pub fn snapshot(&self) -> Vec<SegmentAppearance> {
        self.rows.lock().clone()
    }
}

impl SegmentCanvas for TextCanvas {
    fn fill_segment(&mut self, segment: &Segment, appearance: SegmentAppearance, color: Color) {
        let mut rows = self.rows.lock();
        if rows.len() <= segment.index {
            rows.resize(segment.index + 1, SegmentAppearance::Dim);
        }
        rows[segment.index] = appearance;
        debug!(
            segment = segment.index,
            ?appearance,
            luminance = color.luminance(),
            "segment painted"
        );
    }
}

/// Writes selection ticks to the log in place of haptics.
#[derive(Debug, Default)]
pub struct LogFeedback;

impl FeedbackGenerator for LogFeedback {
    fn prepare(&self) {
        debug!("feedback prepared");
    }

    fn selection_changed(&self) {
        info!("tick");
    }

    fn release(&self) {
        debug!("feedback released");
    }
}
