use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::{
    audio::state::CatalogStatus,
    catalog::{Catalog, PlaylistView},
    ui::{components::spinner::Spinner, state::visible_offset, util::get_active_track_icon},
    util::colors,
};

pub const EMPTY_VIEW_MESSAGE: &str = "No songs found.";
pub const LOAD_FAILED_MESSAGE: &str = "Error loading songs. Please try again later.";

pub struct PlaylistWidget<'a> {
    catalog: &'a Catalog,
    view: &'a PlaylistView,
    status: &'a CatalogStatus,
    current_index: Option<usize>,
    is_playing: bool,
    selected: usize,
    focused: bool,
}

impl<'a> PlaylistWidget<'a> {
    pub fn new(catalog: &'a Catalog, view: &'a PlaylistView, status: &'a CatalogStatus) -> Self {
        Self {
            catalog,
            view,
            status,
            current_index: None,
            is_playing: false,
            selected: 0,
            focused: false,
        }
    }

    pub fn current(mut self, current_index: Option<usize>, is_playing: bool) -> Self {
        self.current_index = current_index;
        self.is_playing = is_playing;
        self
    }

    pub fn selected(mut self, selected: usize, focused: bool) -> Self {
        self.selected = selected;
        self.focused = focused;
        self
    }

    fn items(&self) -> Vec<ListItem<'a>> {
        let current_row = self.current_index.and_then(|index| self.view.row_of(index));
        self.view
            .songs(self.catalog)
            .enumerate()
            .map(|(row, song)| {
                let is_current = Some(row) == current_row;
                let prefix = if is_current {
                    format!("{} ", get_active_track_icon(self.is_playing))
                } else {
                    "  ".to_string()
                };

                let mut spans = vec![
                    Span::raw(prefix),
                    Span::raw(song.title.as_str()),
                    Span::raw(" - "),
                    Span::raw(song.artist.as_str()),
                ];
                if let Some(category) = self.catalog.category(&song.category) {
                    spans.push(format!("  [{}]", category.name).fg(colors::NEUTRAL));
                }

                let item = ListItem::new(Line::from(spans));
                if is_current {
                    item.style(
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    item.style(Style::default().fg(colors::TEXT))
                }
            })
            .collect()
    }
}

impl Widget for PlaylistWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(border_style)
            .title(format!("Songs ({})", self.view.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.status {
            CatalogStatus::Loading => {
                Spinner::default()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Loading catalog...")
                    .render(inner, buf);
                return;
            }
            CatalogStatus::Failed(_) => {
                Paragraph::new(LOAD_FAILED_MESSAGE)
                    .style(Style::default().fg(colors::ERROR))
                    .centered()
                    .render(inner, buf);
                return;
            }
            CatalogStatus::Ready => {}
        }

        if self.view.is_empty() {
            Paragraph::new(EMPTY_VIEW_MESSAGE)
                .style(Style::default().fg(colors::NEUTRAL))
                .centered()
                .render(inner, buf);
            return;
        }

        let highlight = if self.focused {
            Style::default().bg(colors::SECONDARY)
        } else {
            Style::default()
        };
        let list = List::new(self.items()).highlight_style(highlight);
        let mut state = ListState::default()
            .with_offset(visible_offset(self.selected, usize::from(inner.height)))
            .with_selected(Some(self.selected));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}
