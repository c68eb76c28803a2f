use crate::audio::commands::PlayerCommand;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,
    Player(PlayerCommand),

    // Stepped controls, sized from the config
    VolumeUp,
    VolumeDown,
    SeekForward,
    SeekBackward,

    // Navigation
    ToggleFocus,
    MoveSelection(isize),
    SelectFirst,
    SelectLast,
    /// Enter on the focused list: filter by category or play the song.
    Activate,
    ClearFilter,
    ActivateCategoryRow(usize),
    ActivatePlaylistRow(usize),

    // Search box
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,
    CancelSearch,
}
