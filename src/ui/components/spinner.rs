use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

const FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Small indeterminate spinner; the caller advances `frame` on its own
/// tick so rendering stays a pure function of its inputs.
#[derive(Default)]
pub struct Spinner {
    style: Style,
    label: String,
    frame: usize,
}

impl Spinner {
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: String) -> Self {
        self.label = label;
        self
    }

    pub fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let glyph = FRAMES[self.frame % FRAMES.len()];
        let line = Line::styled(format!("{glyph} {}", self.label), self.style);
        Paragraph::new(line).centered().render(area, buf);
    }
}
