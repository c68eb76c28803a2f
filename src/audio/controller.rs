use std::time::Duration;

use flume::Sender;
use tracing::{debug, error, info};

use crate::{
    audio::{
        commands::PlayerCommand,
        media::{
            MediaBackend, MediaEvent, MediaEventKind, MediaHandle, Subscription, SubscriptionId,
        },
        state::{CatalogStatus, PlaybackStatus, PlayerState, ProgressDisplay},
    },
    catalog::{Catalog, CatalogError, ItemId, PlaylistView, Song},
    event::events::Event,
};

struct ActiveTrack<H> {
    handle: H,
    subscription: Subscription,
}

/// Owns the catalog, the playback state and the one live media handle.
///
/// Every operation is synchronous and meant to run on the UI event loop.
/// Out-of-range indices and seeks before the duration is known are ignored
/// rather than reported.
pub struct PlayerController<B: MediaBackend> {
    backend: B,
    event_tx: Sender<Event>,
    catalog: Catalog,
    catalog_status: CatalogStatus,
    view: PlaylistView,
    state: PlayerState,
    progress: ProgressDisplay,
    active: Option<ActiveTrack<B::Handle>>,
    next_subscription: u64,
}

impl<B: MediaBackend> PlayerController<B> {
    pub fn new(backend: B, event_tx: Sender<Event>, volume: f32) -> Self {
        Self {
            backend,
            event_tx,
            catalog: Catalog::default(),
            catalog_status: CatalogStatus::Loading,
            view: PlaylistView::default(),
            state: PlayerState::new(volume),
            progress: ProgressDisplay::default(),
            active: None,
            next_subscription: 0,
        }
    }

    pub fn handle_command(&mut self, cmd: PlayerCommand) {
        match cmd {
            PlayerCommand::Play => self.play(),
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::TogglePlayPause => self.toggle_play_pause(),
            PlayerCommand::Next => self.next(),
            PlayerCommand::Previous => self.previous(),
            PlayerCommand::Select(index) => self.select_track(index),
            PlayerCommand::PlayIndex(index) => self.play_index(index),
            PlayerCommand::Seek(fraction) => self.seek(fraction),
            PlayerCommand::SeekForward(secs) => self.seek_forward(secs),
            PlayerCommand::SeekBackward(secs) => self.seek_backward(secs),
            PlayerCommand::SetVolume(percent) => self.set_volume(percent),
            PlayerCommand::VolumeUp(step) => self.volume_up(step),
            PlayerCommand::VolumeDown(step) => self.volume_down(step),
            PlayerCommand::FilterByCategory(id) => {
                self.filter_by_category(&id);
            }
            PlayerCommand::Search(term) => {
                self.search(&term);
            }
            PlayerCommand::ShowAll => self.show_all(),
        }
    }

    pub fn load(&mut self, catalog: Catalog) {
        self.release_active();
        self.catalog = catalog;
        self.catalog_status = CatalogStatus::Ready;
        self.view = PlaylistView::all(&self.catalog);
        self.state.current_index = None;
        self.state.status = PlaybackStatus::Idle;
        self.progress = ProgressDisplay::default();

        if !self.catalog.is_empty() {
            self.select_track(0);
        }
    }

    pub fn load_failed(&mut self, err: &CatalogError) {
        error!(error = %err, "catalog_load_failed");
        self.release_active();
        self.catalog = Catalog::default();
        self.catalog_status = CatalogStatus::Failed(err.to_string());
        self.view = PlaylistView::default();
        self.state.current_index = None;
        self.state.status = PlaybackStatus::Idle;
        self.progress = ProgressDisplay::default();
    }

    pub fn select_track(&mut self, index: usize) {
        if index >= self.catalog.len() {
            debug!(index, len = self.catalog.len(), "select_out_of_range");
            return;
        }

        self.release_active();

        let id = self.next_subscription_id();
        let song = &self.catalog.songs[index];
        info!(index, title = song.title.as_str(), "track_selected");

        let mut handle = self.backend.open(song);
        handle.set_volume(self.state.volume);
        let subscription = Subscription::attach(&mut handle, id, self.event_tx.clone());

        self.active = Some(ActiveTrack {
            handle,
            subscription,
        });
        self.state.current_index = Some(index);
        self.state.status = PlaybackStatus::Loaded;
        self.progress = ProgressDisplay::default();
    }

    /// Selects `index` and starts it.
    pub fn play_index(&mut self, index: usize) {
        if index >= self.catalog.len() {
            return;
        }
        self.select_track(index);
        self.play();
    }

    /// Starts the song shown at `row` of the current playlist view.
    pub fn play_row(&mut self, row: usize) {
        if let Some(index) = self.view.catalog_index(row) {
            self.play_index(index);
        }
    }

    pub fn play(&mut self) {
        if let Some(active) = &mut self.active {
            active.handle.play();
            self.state.status = PlaybackStatus::Playing;
        }
    }

    pub fn pause(&mut self) {
        if let Some(active) = &mut self.active {
            active.handle.pause();
            self.state.status = PlaybackStatus::Paused;
        }
    }

    pub fn toggle_play_pause(&mut self) {
        if self.state.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, direction: isize) {
        let len = self.catalog.len();
        let Some(current) = self.state.current_index else {
            return;
        };
        if len == 0 {
            return;
        }

        let was_playing = self.state.is_playing();
        let target = if direction >= 0 {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };

        self.select_track(target);
        if was_playing {
            self.play();
        }
    }

    /// Routes a media notification, dropping anything that does not belong to
    /// the live subscription.
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        let accepted = self
            .active
            .as_ref()
            .is_some_and(|active| active.subscription.accepts(&event));
        if !accepted {
            debug!(subscription = event.subscription.0, kind = ?event.kind, "stale_media_event");
            return;
        }

        match event.kind {
            MediaEventKind::TimeUpdate => self.on_time_update(),
            MediaEventKind::Ended => self.on_media_ended(),
        }
    }

    pub fn on_media_ended(&mut self) {
        self.next();
    }

    pub fn on_time_update(&mut self) {
        let Some(active) = &self.active else {
            return;
        };
        let Some(duration) = active.handle.duration() else {
            return;
        };

        self.progress = ProgressDisplay {
            elapsed: active.handle.current_time(),
            duration: Some(duration),
        };
    }

    /// Seeks to `fraction` of the track; `fraction` is clamped to `[0, 1]`.
    pub fn seek(&mut self, fraction: f64) {
        if !fraction.is_finite() {
            return;
        }
        let Some(duration) = self.known_duration() else {
            return;
        };
        self.seek_to(duration.mul_f64(fraction.clamp(0.0, 1.0)), duration);
    }

    /// Moves the playback position by `offset_secs`, staying inside the track.
    pub fn seek_relative(&mut self, offset_secs: i64) {
        if offset_secs >= 0 {
            self.seek_forward(offset_secs.unsigned_abs());
        } else {
            self.seek_backward(offset_secs.unsigned_abs());
        }
    }

    pub fn seek_forward(&mut self, secs: u64) {
        let Some(duration) = self.known_duration() else {
            return;
        };
        let Some(active) = &self.active else {
            return;
        };
        let target = active
            .handle
            .current_time()
            .saturating_add(Duration::from_secs(secs))
            .min(duration);
        self.seek_to(target, duration);
    }

    pub fn seek_backward(&mut self, secs: u64) {
        let Some(duration) = self.known_duration() else {
            return;
        };
        let Some(active) = &self.active else {
            return;
        };
        let target = active
            .handle
            .current_time()
            .saturating_sub(Duration::from_secs(secs));
        self.seek_to(target, duration);
    }

    fn seek_to(&mut self, target: Duration, duration: Duration) {
        if let Some(active) = &mut self.active {
            active.handle.seek(target);
            self.progress = ProgressDisplay {
                elapsed: target,
                duration: Some(duration),
            };
        }
    }

    fn known_duration(&self) -> Option<Duration> {
        self.active.as_ref()?.handle.duration()
    }

    /// Maps a `[0, 100]` slider value onto the media volume.
    pub fn set_volume(&mut self, percent: u8) {
        self.state.volume = f32::from(percent.min(100)) / 100.0;
        if let Some(active) = &mut self.active {
            active.handle.set_volume(self.state.volume);
        }
    }

    pub fn volume_up(&mut self, step: u8) {
        self.set_volume(self.state.volume_percent().saturating_add(step));
    }

    pub fn volume_down(&mut self, step: u8) {
        self.set_volume(self.state.volume_percent().saturating_sub(step));
    }

    pub fn filter_by_category(&mut self, category: &ItemId) -> &PlaylistView {
        self.view = PlaylistView::category(&self.catalog, category);
        &self.view
    }

    pub fn search(&mut self, term: &str) -> &PlaylistView {
        self.view = PlaylistView::search(&self.catalog, term);
        &self.view
    }

    pub fn show_all(&mut self) {
        self.view = PlaylistView::all(&self.catalog);
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_status(&self) -> &CatalogStatus {
        &self.catalog_status
    }

    pub fn view(&self) -> &PlaylistView {
        &self.view
    }

    pub fn progress(&self) -> &ProgressDisplay {
        &self.progress
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.catalog.song(self.state.current_index?)
    }

    pub fn active_subscription(&self) -> Option<SubscriptionId> {
        self.active.as_ref().map(|active| active.subscription.id())
    }

    fn next_subscription_id(&mut self) -> SubscriptionId {
        self.next_subscription += 1;
        SubscriptionId(self.next_subscription)
    }

    fn release_active(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.subscription.teardown(&mut active.handle);
            active.handle.pause();
        }
    }
}

impl<B: MediaBackend> Drop for PlayerController<B> {
    fn drop(&mut self) {
        self.release_active();
    }
}
