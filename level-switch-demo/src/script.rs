//! Pointer event scripts.
//!
//! A script is a TOML file with one `[[events]]` table per pointer event:
//!
//! ```toml
//! [[events]]
//! kind = "drag_began"
//! at = [56.0, 10.0]
//!
//! [[events]]
//! kind = "drag_moved"
//! at = [56.0, 100.0]
//! ```

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result};
use level_switch::{DragPhase, LevelSwitchConfig, PointerEvent};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Tap,
    DragBegan,
    DragMoved,
    DragEnded,
    DragCancelled,
    DragFailed,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptEvent {
    pub kind: EventKind,
    #[serde(default)]
    pub at: [f64; 2],
}

impl ScriptEvent {
    pub fn new(kind: EventKind, at: [f64; 2]) -> Self {
        Self { kind, at }
    }

    pub fn to_pointer_event(&self) -> PointerEvent {
        let phase = match self.kind {
            EventKind::Tap => return PointerEvent::tap(self.at),
            EventKind::DragBegan => DragPhase::Began,
            EventKind::DragMoved => DragPhase::Changed,
            EventKind::DragEnded => DragPhase::Ended,
            EventKind::DragCancelled => DragPhase::Cancelled,
            EventKind::DragFailed => DragPhase::Failed,
        };
        PointerEvent::drag(phase, self.at)
    }
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y] = self.at;
        write!(f, "{:?} at ({x:.1}, {y:.1})", self.kind)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse pointer script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&source)
    }

    /// Drag from the top of the stack to the bottom in half-segment steps,
    /// tap the top row, then tap outside to dismiss.
    pub fn sweep(config: &LevelSwitchConfig) -> Self {
        let [origin_x, origin_y] = config.origin;
        let x = origin_x + config.segment_width / 2.0;
        let rows = config.levels.clamp(
            level_switch::MIN_LEVELS as i32,
            level_switch::MAX_LEVELS as i32,
        ) + i32::from(config.off_stop);
        let bottom = origin_y + config.segment_height * f64::from(rows);
        let step = config.segment_height / 2.0;

        let mut events = vec![ScriptEvent::new(EventKind::DragBegan, [x, origin_y + 1.0])];
        events.extend((0..rows * 2).map(|sample| {
            let y = origin_y + 1.0 + step * f64::from(sample);
            ScriptEvent::new(EventKind::DragMoved, [x, y])
        }));
        events.push(ScriptEvent::new(EventKind::DragEnded, [x, bottom - 1.0]));
        events.push(ScriptEvent::new(EventKind::Tap, [x, origin_y + 1.0]));
        events.push(ScriptEvent::new(
            EventKind::Tap,
            [origin_x + config.segment_width * 2.0, origin_y - 1.0],
        ));
        Self { events }
    }
}
