use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::util::colors;

pub struct SearchBox<'a> {
    input: &'a str,
    editing: bool,
}

impl<'a> SearchBox<'a> {
    pub fn new(input: &'a str, editing: bool) -> Self {
        Self { input, editing }
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style)
            .title("Search (/)");

        let line = if self.input.is_empty() && !self.editing {
            Line::from("Search by title or artist".fg(colors::NEUTRAL))
        } else if self.editing {
            Line::from(vec![self.input.fg(colors::TEXT), "▏".fg(colors::PRIMARY)])
        } else {
            Line::from(self.input.fg(colors::TEXT))
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}
