use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols::border,
    text::ToSpan,
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::{ui::layout::AppLayout, util::colors};

/// Previous / play-pause / next buttons.
pub struct PlayerControlsWidget<'a> {
    layout: &'a AppLayout,
    is_playing: bool,
    has_track: bool,
}

impl<'a> PlayerControlsWidget<'a> {
    pub fn new(layout: &'a AppLayout, is_playing: bool, has_track: bool) -> Self {
        Self {
            layout,
            is_playing,
            has_track,
        }
    }
}

impl Widget for PlayerControlsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .render(area, buf);

        let color = if self.has_track {
            colors::TEXT
        } else {
            colors::NEUTRAL
        };
        let play_pause = if self.is_playing { "⏸" } else { "▶" };

        let [previous, toggle, next] = self.layout.control_buttons();
        for (icon, button) in [("⏮", previous), (play_pause, toggle), ("⏭", next)] {
            Paragraph::new(icon.fg(color)).centered().render(button, buf);
        }
    }
}

/// Volume slider; clicking inside it sets the volume.
pub struct VolumeWidget {
    volume: u8,
}

impl VolumeWidget {
    pub fn new(volume: u8) -> Self {
        Self {
            volume: volume.min(100),
        }
    }
}

impl Widget for VolumeWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("Vol");

        let label = format!("{}%", self.volume);
        Gauge::default()
            .block(block)
            .gauge_style(Style::new().fg(colors::PRIMARY).bg(colors::NEUTRAL))
            .ratio(f64::from(self.volume) / 100.0)
            .label(label.to_span().fg(colors::TEXT))
            .render(area, buf);
    }
}
