use console::style;
use level_switch::SegmentAppearance;

const STATUS_WIDTH: usize = 12;
const SEGMENT_GLYPHS: usize = 12;

pub fn status(label: &str, message: impl AsRef<str>) {
    eprintln!(
        "{:>width$} {}",
        style(label).green().bold(),
        message.as_ref(),
        width = STATUS_WIDTH
    );
}

pub fn note(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("note").blue().bold(), message.as_ref());
}

pub fn step(message: impl AsRef<str>) {
    eprintln!("    {}", message.as_ref());
}

/// Draws the stack top row first. `appearances` is ordered bottom first, as
/// the switch indexes segments.
pub fn stack(appearances: &[SegmentAppearance], off_stop: bool) {
    for appearance in appearances.iter().rev() {
        let row = match appearance {
            SegmentAppearance::Highlighted => style("█".repeat(SEGMENT_GLYPHS)).white().bold(),
            SegmentAppearance::Dim => style("░".repeat(SEGMENT_GLYPHS)).dim(),
        };
        step(format!("{row}"));
    }
    if off_stop {
        let label = format!("{:^width$}", "off", width = SEGMENT_GLYPHS);
        step(format!("{}", style(label).dim()));
    }
}
