use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::{
    audio::media::MediaBackend,
    ui::{
        app::App,
        components::{
            controls::{PlayerControlsWidget, VolumeWidget},
            playlist::PlaylistWidget,
            progress::ProgressWidget,
            search::SearchBox,
            sidebar::CategoryList,
        },
        layout::AppLayout,
        state::Focus,
    },
    util::colors,
};

impl<B: MediaBackend> Widget for &App<B> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let layout = AppLayout::new(area);
        let player = &self.player;
        let catalog = player.catalog();
        let is_playing = player.is_playing();

        CategoryList::new(
            &catalog.categories,
            player.view().filter(),
            self.ui.category_selected,
            self.ui.focus == Focus::Categories,
        )
        .render(layout.categories, buf);

        SearchBox::new(&self.ui.search_input, self.ui.is_editing()).render(layout.search, buf);

        PlaylistWidget::new(catalog, player.view(), player.catalog_status())
            .current(player.state().current_index, is_playing)
            .selected(self.ui.playlist_selected, self.ui.focus == Focus::Playlist)
            .render(layout.playlist, buf);

        PlayerControlsWidget::new(&layout, is_playing, player.current_song().is_some())
            .render(layout.controls, buf);

        ProgressWidget::new(player.progress(), player.current_song(), catalog, is_playing)
            .render(layout.progress, buf);

        VolumeWidget::new(player.state().volume_percent()).render(layout.volume, buf);
    }
}
