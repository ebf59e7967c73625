use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::core::binding::Binding;
use crate::tui::component::Component;

/// A single line of text, fixed or read through a binding each frame.
pub struct Text {
    content: Binding<String>,
    style: Style,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self::bound(Binding::constant(content.into()))
    }

    pub fn bound(content: Binding<String>) -> Self {
        Self {
            content,
            style: Style::new(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Component for Text {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::styled(self.content.get(), self.style);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn desired_height(&self) -> Option<u16> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_line;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_bound_text_reads_each_frame() {
        let source = Binding::local("before".to_string());
        let mut text = Text::bound(source.clone());
        let mut terminal = Terminal::new(TestBackend::new(10, 1)).unwrap();

        terminal.draw(|f| text.render(f, f.area())).unwrap();
        assert_eq!(buffer_line(terminal.backend().buffer(), 0).trim_end(), "before");

        source.set("after".to_string());
        terminal.draw(|f| text.render(f, f.area())).unwrap();
        assert_eq!(buffer_line(terminal.backend().buffer(), 0).trim_end(), "after");
    }
}
