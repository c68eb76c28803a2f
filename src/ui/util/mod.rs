pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

/// Marker for the current song; pulses while playing.
pub fn get_active_track_icon(is_playing: bool) -> &'static str {
    if !is_playing {
        return "•";
    }

    const FRAME_STEP_MS: u128 = 100;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    match (now / FRAME_STEP_MS) % 6 {
        1 | 4 => "•",
        2 | 3 => "●",
        _ => "·",
    }
}
