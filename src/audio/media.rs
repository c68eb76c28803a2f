use std::time::Duration;

use flume::Sender;

use crate::{catalog::Song, event::events::Event};

/// Identifies one attachment of the controller to one media handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEventKind {
    TimeUpdate,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaEvent {
    pub subscription: SubscriptionId,
    pub kind: MediaEventKind,
}

/// Sending half handed to a media handle; every notification it emits is
/// tagged with the subscription it was created for.
#[derive(Debug, Clone)]
pub struct MediaObserver {
    id: SubscriptionId,
    event_tx: Sender<Event>,
}

impl MediaObserver {
    pub fn new(id: SubscriptionId, event_tx: Sender<Event>) -> Self {
        Self { id, event_tx }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Returns false once the receiving side is gone.
    pub fn notify(&self, kind: MediaEventKind) -> bool {
        self.event_tx
            .send(Event::Media(MediaEvent {
                subscription: self.id,
                kind,
            }))
            .is_ok()
    }
}

/// One loaded, playable track.
pub trait MediaHandle: Send {
    fn play(&mut self);
    fn pause(&mut self);
    fn set_volume(&mut self, volume: f32);
    fn seek(&mut self, position: Duration);
    fn current_time(&self) -> Duration;
    /// `None` until the media's metadata is known.
    fn duration(&self) -> Option<Duration>;

    /// Starts delivering time-update and ended notifications to `observer`.
    fn observe(&mut self, observer: MediaObserver);
    /// Stops all notifications. Nothing may be delivered for the previous
    /// observer after this returns, except what is already queued.
    fn unobserve(&mut self);
}

/// Opens media handles for songs.
pub trait MediaBackend {
    type Handle: MediaHandle;

    fn open(&self, song: &Song) -> Self::Handle;
}

/// The live binding between a media handle and the controller.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    active: bool,
}

impl Subscription {
    pub fn attach<H: MediaHandle>(
        handle: &mut H,
        id: SubscriptionId,
        event_tx: Sender<Event>,
    ) -> Self {
        handle.observe(MediaObserver::new(id, event_tx));
        Self { id, active: true }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn accepts(&self, event: &MediaEvent) -> bool {
        self.active && event.subscription == self.id
    }

    pub fn teardown<H: MediaHandle>(&mut self, handle: &mut H) {
        if self.active {
            handle.unobserve();
            self.active = false;
        }
    }
}
