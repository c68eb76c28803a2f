use crate::catalog::ItemId;

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    TogglePlayPause,
    Next,
    Previous,
    /// Load a catalog entry without starting it.
    Select(usize),
    /// Load a catalog entry and start it, as when a playlist entry is clicked.
    PlayIndex(usize),
    /// Seek to a fraction of the track, as reported by the seek bar.
    Seek(f64),
    SeekForward(u64),
    SeekBackward(u64),
    SetVolume(u8),
    VolumeUp(u8),
    VolumeDown(u8),
    FilterByCategory(ItemId),
    Search(String),
    ShowAll,
}
