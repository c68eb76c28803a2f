use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::{Line, ToSpan},
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::{
    audio::state::ProgressDisplay,
    catalog::{Catalog, Song},
    util::colors,
};

/// Seek bar with the current song's metadata in its border.
pub struct ProgressWidget<'a> {
    progress: &'a ProgressDisplay,
    song: Option<&'a Song>,
    catalog: &'a Catalog,
    is_playing: bool,
}

impl<'a> ProgressWidget<'a> {
    pub fn new(
        progress: &'a ProgressDisplay,
        song: Option<&'a Song>,
        catalog: &'a Catalog,
        is_playing: bool,
    ) -> Self {
        Self {
            progress,
            song,
            catalog,
            is_playing,
        }
    }
}

impl Widget for ProgressWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let track_info = match self.song {
            Some(song) => {
                let icon = if self.is_playing { "▶" } else { "⏸" };
                let mut info = format!("{icon} {} by {}", song.title, song.artist);
                if let Some(category) = self.catalog.category(&song.category) {
                    info = format!("{info} · {}", category.name);
                }
                info
            }
            None => "No track".to_string(),
        };

        let mut block = Block::default()
            .title_top(track_info)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(border::ROUNDED);
        if let Some(song) = self.song.filter(|song| !song.cover.is_empty()) {
            let cover = Line::from(song.cover.as_str().fg(colors::NEUTRAL)).right_aligned();
            block = block.title_bottom(cover);
        }

        let label = format!(
            "{} / {}",
            self.progress.elapsed_label(),
            self.progress.duration_label()
        );

        Gauge::default()
            .block(block)
            .gauge_style(Style::default().fg(colors::PRIMARY).bg(colors::BACKGROUND))
            .ratio(self.progress.ratio())
            .label(label.to_span().fg(colors::TEXT))
            .use_unicode(true)
            .render(area, buf);
    }
}
