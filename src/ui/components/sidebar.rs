use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::{
    catalog::{Category, ViewFilter},
    ui::state::visible_offset,
    util::colors,
};

pub const ALL_SONGS: &str = "All songs";

/// Category picker. Row 0 clears the filter; row `i + 1` is `categories[i]`.
pub struct CategoryList<'a> {
    categories: &'a [Category],
    filter: &'a ViewFilter,
    selected: usize,
    focused: bool,
}

impl<'a> CategoryList<'a> {
    pub fn new(
        categories: &'a [Category],
        filter: &'a ViewFilter,
        selected: usize,
        focused: bool,
    ) -> Self {
        Self {
            categories,
            filter,
            selected,
            focused,
        }
    }

    fn is_active(&self, row: usize) -> bool {
        match (row, self.filter) {
            (0, ViewFilter::All) => true,
            (0, _) => false,
            (row, ViewFilter::Category(id)) => self
                .categories
                .get(row - 1)
                .is_some_and(|category| &category.id == id),
            _ => false,
        }
    }
}

impl Widget for CategoryList<'_> {
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
            .title("playdeck")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let names = std::iter::once(ALL_SONGS)
            .chain(self.categories.iter().map(|c| c.name.as_str()));
        let items: Vec<ListItem> = names
            .enumerate()
            .map(|(row, name)| {
                let style = if self.is_active(row) {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::TEXT)
                };
                ListItem::new(format!("  {name}")).style(style)
            })
            .collect();

        let highlight = if self.focused {
            Style::default().bg(colors::SECONDARY)
        } else {
            Style::default()
        };
        let list = List::new(items).highlight_style(highlight);
        let mut state = ListState::default()
            .with_offset(visible_offset(self.selected, usize::from(inner.height)))
            .with_selected(Some(self.selected));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}
