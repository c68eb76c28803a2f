use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use rodio::{OutputStream, Sink, Source};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    audio::{
        config::AudioConfig,
        error::AudioError,
        media::{MediaBackend, MediaEventKind, MediaHandle, MediaObserver},
        progress::TrackProgress,
        util::{decode, open_output_stream, read_media, setup_device_config},
    },
    catalog::{CatalogSource, MediaLocation, Song},
};

/// One output stream shared by every track; each opened track gets its own
/// sink on the stream's mixer.
pub struct RodioBackend {
    stream: OutputStream,
    source: CatalogSource,
    monitor_interval: Duration,
}

impl RodioBackend {
    pub fn new(source: CatalogSource, config: &AudioConfig) -> Result<Self, AudioError> {
        let (device, stream_config, sample_format) = setup_device_config()?;
        let stream = open_output_stream(device, &stream_config, sample_format)?;

        Ok(Self {
            stream,
            source,
            monitor_interval: Duration::from_millis(config.monitor_interval_ms.max(10)),
        })
    }
}

impl MediaBackend for RodioBackend {
    type Handle = RodioMedia;

    fn open(&self, song: &Song) -> RodioMedia {
        let sink = Arc::new(Sink::connect_new(self.stream.mixer()));
        sink.pause();
        let progress = Arc::new(TrackProgress::new());

        match self.source.resolve(&song.audio_url) {
            Some(location) => spawn_loader(location, Arc::downgrade(&sink), progress.clone()),
            None => {
                let err = AudioError::Unresolved(song.audio_url.clone());
                warn!(error = %err, "media_unresolved");
                progress.mark_failed();
            }
        }

        RodioMedia {
            sink,
            progress,
            monitor: None,
            monitor_interval: self.monitor_interval,
        }
    }
}

/// Reads and decodes in the background. The sink is held weakly so a track
/// released before it finishes loading never starts making sound.
fn spawn_loader(location: MediaLocation, sink: Weak<Sink>, progress: Arc<TrackProgress>) {
    tokio::task::spawn_blocking(move || {
        let hint = location.extension();
        let decoded = read_media(&location).and_then(|bytes| {
            progress.set_loaded_bytes(bytes.len() as u64);
            decode(bytes, hint.as_deref())
        });

        let decoder = match decoded {
            Ok(decoder) => decoder,
            Err(e) => {
                warn!(location = ?location, error = %e, "media_load_failed");
                progress.mark_failed();
                return;
            }
        };

        if let Some(total) = decoder.total_duration() {
            progress.set_total_duration(total);
        }

        let Some(sink) = sink.upgrade() else {
            return;
        };
        sink.append(decoder);
        progress.mark_ready();
        info!(
            location = ?location,
            bytes = progress.loaded_bytes(),
            duration_ms = progress.total_duration().map(|d| d.as_millis() as u64),
            "media_ready"
        );
    });
}

pub struct RodioMedia {
    sink: Arc<Sink>,
    progress: Arc<TrackProgress>,
    monitor: Option<JoinHandle<()>>,
    monitor_interval: Duration,
}

impl MediaHandle for RodioMedia {
    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn set_volume(&mut self, volume: f32) {
        self.sink.set_volume(volume);
    }

    fn seek(&mut self, position: Duration) {
        if !self.progress.is_ready() {
            return;
        }
        if let Err(e) = self.sink.try_seek(position) {
            warn!(error = %e, "seek_failed");
        }
    }

    fn current_time(&self) -> Duration {
        self.sink.get_pos()
    }

    fn duration(&self) -> Option<Duration> {
        self.progress.total_duration()
    }

    fn observe(&mut self, observer: MediaObserver) {
        self.unobserve();

        let sink = Arc::downgrade(&self.sink);
        let progress = self.progress.clone();
        let period = self.monitor_interval;

        self.monitor = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;

                let Some(sink) = sink.upgrade() else {
                    break;
                };
                if progress.has_failed() {
                    break;
                }
                if !progress.is_ready() || sink.is_paused() {
                    continue;
                }

                if sink.empty() {
                    observer.notify(MediaEventKind::Ended);
                    break;
                }
                if !observer.notify(MediaEventKind::TimeUpdate) {
                    break;
                }
            }
        }));
    }

    fn unobserve(&mut self) {
        if let Some(task) = self.monitor.take() {
            task.abort();
        }
    }
}

impl Drop for RodioMedia {
    fn drop(&mut self) {
        self.unobserve();
        self.sink.stop();
    }
}
