#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Categories,
    #[default]
    Playlist,
    Search,
}

/// View-only state: what is focused, highlighted and typed. Playback state
/// lives in the controller.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    /// Focus to return to when search editing ends.
    pub previous_focus: Focus,
    /// Row in the category list; row 0 is "All songs".
    pub category_selected: usize,
    pub playlist_selected: usize,
    pub search_input: String,
    /// Input as it was when editing began, restored on cancel.
    search_backup: String,
}

impl UiState {
    pub fn is_editing(&self) -> bool {
        self.focus == Focus::Search
    }

    pub fn start_search(&mut self) {
        if self.focus != Focus::Search {
            self.previous_focus = self.focus;
            self.focus = Focus::Search;
            self.search_backup.clone_from(&self.search_input);
        }
    }

    /// Leaves the search box, discarding whatever was typed since
    /// [`UiState::start_search`].
    pub fn cancel_search(&mut self) {
        if self.focus == Focus::Search {
            std::mem::swap(&mut self.search_input, &mut self.search_backup);
            self.search_backup.clear();
            self.stop_search();
        }
    }

    pub fn stop_search(&mut self) {
        if self.focus == Focus::Search {
            self.focus = self.previous_focus;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Categories => Focus::Playlist,
            Focus::Playlist => Focus::Categories,
            Focus::Search => Focus::Search,
        };
    }

    /// Moves the highlight of the focused list by `delta`, staying in
    /// `0..len`.
    pub fn move_selection(&mut self, delta: isize, len: usize) {
        let Some(selected) = self.focused_selection_mut() else {
            return;
        };
        if len == 0 {
            *selected = 0;
            return;
        }
        let max = len - 1;
        *selected = selected.saturating_add_signed(delta).min(max);
    }

    pub fn select_edge(&mut self, last: bool, len: usize) {
        if let Some(selected) = self.focused_selection_mut() {
            *selected = if last { len.saturating_sub(1) } else { 0 };
        }
    }

    fn focused_selection_mut(&mut self) -> Option<&mut usize> {
        match self.focus {
            Focus::Categories => Some(&mut self.category_selected),
            Focus::Playlist => Some(&mut self.playlist_selected),
            Focus::Search => None,
        }
    }
}

/// First visible row of a list `height` rows tall that keeps `selected` on
/// screen.
pub fn visible_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        return selected;
    }
    (selected + 1).saturating_sub(height)
}
