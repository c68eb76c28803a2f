use ratatui::crossterm::event::{
    KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{
    audio::{commands::PlayerCommand, media::MediaBackend},
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        layout::HitTarget,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events<B: MediaBackend>(
        app: &mut App<B>,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event<B: MediaBackend>(
        app: &mut App<B>,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => app.fetch_catalog(),
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Paste(text) => {
                if app.ui.is_editing() {
                    for c in text.chars().filter(|c| !c.is_control()) {
                        app.update(AppMessage::SearchInput(c));
                    }
                }
            }
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
            _ => {}
        }

        Ok(true)
    }

    /// Applies a background notification: catalog results and media events.
    pub fn handle_action<B: MediaBackend>(app: &mut App<B>, evt: Event) {
        match evt {
            Event::CatalogLoaded(catalog) => {
                app.player.load(catalog);
                app.on_catalog_loaded();
            }
            Event::CatalogFailed(err) => app.player.load_failed(&err),
            Event::Media(event) => app.player.handle_media_event(event),
        }
    }

    pub fn handle_key_event<B: MediaBackend>(app: &mut App<B>, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }
        if let Some(msg) = InputHandler::handle_key(evt, &app.ui) {
            app.update(msg);
        }
    }

    pub fn handle_mouse_event<B: MediaBackend>(app: &mut App<B>, evt: MouseEvent) {
        match (evt.kind, evt.modifiers) {
            (MouseEventKind::ScrollUp, KeyModifiers::SHIFT) => app.update(AppMessage::SeekForward),
            (MouseEventKind::ScrollUp, _) => app.update(AppMessage::VolumeUp),
            (MouseEventKind::ScrollDown, KeyModifiers::SHIFT) => {
                app.update(AppMessage::SeekBackward)
            }
            (MouseEventKind::ScrollDown, _) => app.update(AppMessage::VolumeDown),
            (MouseEventKind::Down(MouseButton::Left), _) => {
                if let Some(target) = app.hit_test(evt.column, evt.row) {
                    Self::handle_click(app, target);
                }
            }
            _ => {}
        }
    }

    fn handle_click<B: MediaBackend>(app: &mut App<B>, target: HitTarget) {
        let msg = match target {
            HitTarget::Category(row) => AppMessage::ActivateCategoryRow(row),
            HitTarget::Playlist(row) => AppMessage::ActivatePlaylistRow(row),
            HitTarget::Search => AppMessage::StartSearch,
            HitTarget::Previous => AppMessage::Player(PlayerCommand::Previous),
            HitTarget::PlayPause => AppMessage::Player(PlayerCommand::TogglePlayPause),
            HitTarget::Next => AppMessage::Player(PlayerCommand::Next),
            HitTarget::Seek(fraction) => AppMessage::Player(PlayerCommand::Seek(fraction)),
            HitTarget::Volume(percent) => AppMessage::Player(PlayerCommand::SetVolume(percent)),
        };
        app.update(msg);
    }
}
