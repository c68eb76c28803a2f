use std::time::Duration;

use crate::util::time::format_duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// No catalog, or an empty one.
    #[default]
    Idle,
    /// A track is selected but has not been started.
    Loaded,
    Playing,
    Paused,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub current_index: Option<usize>,
    pub status: PlaybackStatus,
    /// Media volume in `[0, 1]`.
    pub volume: f32,
}

impl PlayerState {
    pub fn new(volume: f32) -> Self {
        Self {
            current_index: None,
            status: PlaybackStatus::Idle,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn volume_percent(&self) -> u8 {
        (self.volume * 100.0).round() as u8
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Elapsed/total time as last shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressDisplay {
    pub elapsed: Duration,
    pub duration: Option<Duration>,
}

impl ProgressDisplay {
    /// Elapsed divided by duration, in `[0, 1]`; zero while the duration is
    /// unknown or zero.
    pub fn ratio(&self) -> f64 {
        match self.duration {
            Some(total) if !total.is_zero() => {
                (self.elapsed.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    pub fn elapsed_label(&self) -> String {
        format_duration(self.elapsed)
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.duration.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_zero_without_duration() {
        let progress = ProgressDisplay {
            elapsed: Duration::from_secs(30),
            duration: None,
        };
        assert_eq!(progress.ratio(), 0.0);
        assert_eq!(progress.duration_label(), "0:00");
    }

    #[test]
    fn ratio_and_labels() {
        let progress = ProgressDisplay {
            elapsed: Duration::from_secs(75),
            duration: Some(Duration::from_secs(300)),
        };
        assert!((progress.ratio() - 0.25).abs() < 1e-9);
        assert_eq!(progress.elapsed_label(), "1:15");
        assert_eq!(progress.duration_label(), "5:00");
    }

    #[test]
    fn volume_is_clamped_on_construction() {
        assert_eq!(PlayerState::new(3.0).volume, 1.0);
        assert_eq!(PlayerState::new(0.42).volume_percent(), 42);
    }
}
