#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use flume::Receiver;
use playdeck::{
    audio::{
        controller::PlayerController,
        media::{MediaBackend, MediaHandle, MediaObserver, SubscriptionId},
    },
    catalog::{Catalog, Category, ItemId, Song},
    event::events::Event,
};

/// What a mock handle was asked to do; the first field is the handle's
/// open order.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Play(usize),
    Pause(usize),
    Volume(usize, f32),
    Seek(usize, Duration),
    Observe(usize, SubscriptionId),
    Unobserve(usize),
}

#[derive(Default)]
struct Shared {
    ops: Vec<Op>,
    opened: Vec<String>,
    observers: Vec<Option<MediaObserver>>,
    duration: Option<Duration>,
    current_time: Duration,
}

/// Records every call instead of producing sound.
#[derive(Clone, Default)]
pub struct MockBackend {
    shared: Arc<Mutex<Shared>>,
}

impl MockBackend {
    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.lock().ops.clone()
    }

    pub fn clear_ops(&self) {
        self.lock().ops.clear();
    }

    /// Titles of every opened song, in order.
    pub fn opened(&self) -> Vec<String> {
        self.lock().opened.clone()
    }

    pub fn set_duration(&self, duration: Option<Duration>) {
        self.lock().duration = duration;
    }

    pub fn set_current_time(&self, time: Duration) {
        self.lock().current_time = time;
    }

    /// Observer most recently given to handle `handle`, if still attached.
    pub fn observer(&self, handle: usize) -> Option<MediaObserver> {
        self.lock().observers.get(handle).cloned().flatten()
    }

    pub fn handles_opened(&self) -> usize {
        self.lock().opened.len()
    }
}

impl MediaBackend for MockBackend {
    type Handle = MockMedia;

    fn open(&self, song: &Song) -> MockMedia {
        let mut shared = self.lock();
        let index = shared.opened.len();
        shared.opened.push(song.title.clone());
        shared.observers.push(None);
        MockMedia {
            index,
            shared: self.shared.clone(),
        }
    }
}

pub struct MockMedia {
    index: usize,
    shared: Arc<Mutex<Shared>>,
}

impl MockMedia {
    fn record(&self, op: Op) {
        self.shared.lock().unwrap().ops.push(op);
    }
}

impl MediaHandle for MockMedia {
    fn play(&mut self) {
        self.record(Op::Play(self.index));
    }

    fn pause(&mut self) {
        self.record(Op::Pause(self.index));
    }

    fn set_volume(&mut self, volume: f32) {
        self.record(Op::Volume(self.index, volume));
    }

    fn seek(&mut self, position: Duration) {
        self.record(Op::Seek(self.index, position));
    }

    fn current_time(&self) -> Duration {
        self.shared.lock().unwrap().current_time
    }

    fn duration(&self) -> Option<Duration> {
        self.shared.lock().unwrap().duration
    }

    fn observe(&mut self, observer: MediaObserver) {
        let id = observer.id();
        self.shared.lock().unwrap().observers[self.index] = Some(observer);
        self.record(Op::Observe(self.index, id));
    }

    fn unobserve(&mut self) {
        self.shared.lock().unwrap().observers[self.index] = None;
        self.record(Op::Unobserve(self.index));
    }
}

pub fn song(id: u64, title: &str, artist: &str, category: u64) -> Song {
    Song {
        id: ItemId::from(id),
        title: title.to_string(),
        artist: artist.to_string(),
        cover: format!("covers/{id}.jpg"),
        audio_url: format!("audio/{id}.mp3"),
        category: ItemId::from(category),
    }
}

pub fn category(id: u64, name: &str) -> Category {
    Category {
        id: ItemId::from(id),
        name: name.to_string(),
        icon: "fas fa-music".to_string(),
    }
}

/// Four songs over two categories.
pub fn catalog() -> Catalog {
    Catalog::new(
        vec![
            song(1, "So What", "Miles Davis", 1),
            song(2, "Paranoid Android", "Radiohead", 2),
            song(3, "Blue in Green", "Miles Davis", 1),
            song(4, "Karma Police", "Radiohead", 2),
        ],
        vec![category(1, "Jazz"), category(2, "Rock")],
    )
}

pub fn controller() -> (PlayerController<MockBackend>, MockBackend, Receiver<Event>) {
    let backend = MockBackend::default();
    let (tx, rx) = flume::unbounded();
    let controller = PlayerController::new(backend.clone(), tx, 1.0);
    (controller, backend, rx)
}

/// Routes every queued media event into the controller.
pub fn pump(controller: &mut PlayerController<MockBackend>, rx: &Receiver<Event>) -> usize {
    let mut delivered = 0;
    while let Ok(evt) = rx.try_recv() {
        if let Event::Media(event) = evt {
            controller.handle_media_event(event);
            delivered += 1;
        }
    }
    delivered
}
