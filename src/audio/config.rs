#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    pub volume: u8,
    pub volume_step: u8,
    pub seek_step_secs: u64,
    pub monitor_interval_ms: u64,
}

impl AudioConfig {
    pub fn initial_volume(&self) -> f32 {
        f32::from(self.volume.min(100)) / 100.0
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: 100,
            volume_step: 5,
            seek_step_secs: 5,
            monitor_interval_ms: 250,
        }
    }
}
