use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::Block,
};

/// Screen regions shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub categories: Rect,
    pub search: Rect,
    pub playlist: Rect,
    pub controls: Rect,
    pub progress: Rect,
    pub volume: Rect,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitTarget {
    Category(usize),
    Playlist(usize),
    Search,
    Previous,
    PlayPause,
    Next,
    /// Fraction of the seek bar's width left of the pointer.
    Seek(f64),
    /// Volume percent under the pointer.
    Volume(u8),
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [main, player] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .areas(area);

        let [categories, content] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(1)])
            .areas(main);

        let [search, playlist] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .areas(content);

        let [controls, progress, volume] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(13),
                Constraint::Min(1),
                Constraint::Length(12),
            ])
            .areas(player);

        Self {
            categories,
            search,
            playlist,
            controls,
            progress,
            volume,
        }
    }

    /// Thirds of the controls' inner area: previous, play/pause, next.
    pub fn control_buttons(&self) -> [Rect; 3] {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .areas(inner(self.controls))
    }

    /// Resolves a click. List rows account for the scroll offset of the
    /// current highlight.
    pub fn hit_test(
        &self,
        column: u16,
        row: u16,
        category_offset: usize,
        playlist_offset: usize,
    ) -> Option<HitTarget> {
        let pos = Position::new(column, row);

        let progress = inner(self.progress);
        if progress.contains(pos) {
            return Some(HitTarget::Seek(fraction_of(progress, column)));
        }

        let volume = inner(self.volume);
        if volume.contains(pos) {
            let percent = (level_of(volume, column) * 100.0).round() as u8;
            return Some(HitTarget::Volume(percent));
        }

        let [previous, play_pause, next] = self.control_buttons();
        if previous.contains(pos) {
            return Some(HitTarget::Previous);
        }
        if play_pause.contains(pos) {
            return Some(HitTarget::PlayPause);
        }
        if next.contains(pos) {
            return Some(HitTarget::Next);
        }

        if self.search.contains(pos) {
            return Some(HitTarget::Search);
        }

        let categories = inner(self.categories);
        if categories.contains(pos) {
            let index = category_offset + usize::from(row - categories.y);
            return Some(HitTarget::Category(index));
        }

        let playlist = inner(self.playlist);
        if playlist.contains(pos) {
            let index = playlist_offset + usize::from(row - playlist.y);
            return Some(HitTarget::Playlist(index));
        }

        None
    }
}

/// Inner area of a fully bordered block.
pub fn inner(area: Rect) -> Rect {
    Block::bordered().inner(area)
}

fn fraction_of(area: Rect, column: u16) -> f64 {
    if area.width == 0 {
        return 0.0;
    }
    let offset = f64::from(column.saturating_sub(area.x));
    (offset / f64::from(area.width)).clamp(0.0, 1.0)
}

/// Like [`fraction_of`], but the last column reads as 1.0.
fn level_of(area: Rect, column: u16) -> f64 {
    if area.width <= 1 {
        return 1.0;
    }
    let offset = f64::from(column.saturating_sub(area.x));
    (offset / f64::from(area.width - 1)).clamp(0.0, 1.0)
}
