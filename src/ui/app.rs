use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::{Frame, layout::Rect};
use tracing::info;

use crate::{
    audio::{controller::PlayerController, media::MediaBackend, playback::RodioBackend},
    catalog::CatalogSource,
    config::AppConfig,
    event::events::Event,
    ui::{
        layout::{AppLayout, HitTarget, inner},
        message::AppMessage,
        state::{Focus, UiState, visible_offset},
    },
    util::task::TaskManager,
};

use super::{
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App<B: MediaBackend = RodioBackend> {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub config: AppConfig,
    pub source: CatalogSource,
    pub player: PlayerController<B>,
    pub ui: UiState,
    pub layout: AppLayout,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App<RodioBackend> {
    pub fn new(config: AppConfig) -> color_eyre::Result<Self> {
        let source = CatalogSource::parse(&config.catalog)?;
        let backend = RodioBackend::new(source.clone(), &config.audio)?;
        Ok(Self::with_backend(config, source, backend))
    }
}

impl<B: MediaBackend> App<B> {
    pub fn with_backend(config: AppConfig, source: CatalogSource, backend: B) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let player =
            PlayerController::new(backend, event_tx.clone(), config.audio.initial_volume());

        Self {
            event_rx,
            event_tx,
            config,
            source,
            player,
            ui: UiState::default(),
            layout: AppLayout::default(),
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new(self.config.tick_rate_ms)?.mouse(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    /// Loads the catalog in the background; the result arrives as an
    /// [`Event`].
    pub fn fetch_catalog(&mut self) {
        let source = self.source.clone();
        let tx = self.event_tx.clone();
        info!(source = source.describe().as_str(), "catalog_fetch_started");

        self.task_manager.spawn(
            "catalog_fetch",
            tokio::spawn(async move {
                let event = match source.fetch().await {
                    Ok(catalog) => Event::CatalogLoaded(catalog),
                    Err(e) => Event::CatalogFailed(Arc::new(e)),
                };
                let _ = tx.send_async(event).await;
            }),
        );
    }

    pub fn resize(&mut self, area: Rect) {
        self.layout = AppLayout::new(area);
    }

    /// Rows in the focused list.
    fn focused_len(&self) -> usize {
        match self.ui.focus {
            Focus::Categories => self.player.catalog().categories.len() + 1,
            Focus::Playlist => self.player.view().len(),
            Focus::Search => 0,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let category_offset = visible_offset(
            self.ui.category_selected,
            usize::from(inner(self.layout.categories).height),
        );
        let playlist_offset = visible_offset(
            self.ui.playlist_selected,
            usize::from(inner(self.layout.playlist).height),
        );
        self.layout
            .hit_test(column, row, category_offset, playlist_offset)
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::Player(cmd) => self.player.handle_command(cmd),

            AppMessage::VolumeUp => self.player.volume_up(self.config.audio.volume_step),
            AppMessage::VolumeDown => self.player.volume_down(self.config.audio.volume_step),
            AppMessage::SeekForward => self.player.seek_forward(self.config.audio.seek_step_secs),
            AppMessage::SeekBackward => self.player.seek_backward(self.config.audio.seek_step_secs),

            AppMessage::ToggleFocus => self.ui.toggle_focus(),
            AppMessage::MoveSelection(delta) => {
                let len = self.focused_len();
                self.ui.move_selection(delta, len);
            }
            AppMessage::SelectFirst => {
                let len = self.focused_len();
                self.ui.select_edge(false, len);
            }
            AppMessage::SelectLast => {
                let len = self.focused_len();
                self.ui.select_edge(true, len);
            }
            AppMessage::Activate => match self.ui.focus {
                Focus::Categories => self.activate_category_row(self.ui.category_selected),
                Focus::Playlist => self.activate_playlist_row(self.ui.playlist_selected),
                Focus::Search => {}
            },
            AppMessage::ClearFilter => {
                self.ui.search_input.clear();
                self.activate_category_row(0);
            }
            AppMessage::ActivateCategoryRow(row) => {
                self.ui.cancel_search();
                self.ui.focus = Focus::Categories;
                self.activate_category_row(row);
            }
            AppMessage::ActivatePlaylistRow(row) => {
                self.ui.cancel_search();
                self.ui.focus = Focus::Playlist;
                self.activate_playlist_row(row);
            }

            AppMessage::StartSearch => self.ui.start_search(),
            AppMessage::SearchInput(c) => self.ui.search_input.push(c),
            AppMessage::SearchBackspace => {
                self.ui.search_input.pop();
            }
            AppMessage::SubmitSearch => {
                self.apply_search();
                self.ui.stop_search();
            }
            AppMessage::CancelSearch => self.ui.cancel_search(),
        }
    }

    /// Row 0 shows every song, row `i + 1` filters by the `i`-th category.
    fn activate_category_row(&mut self, row: usize) {
        if row == 0 {
            self.player.show_all();
        } else {
            let Some(id) = self
                .player
                .catalog()
                .categories
                .get(row - 1)
                .map(|category| category.id.clone())
            else {
                return;
            };
            self.player.filter_by_category(&id);
        }
        self.ui.search_input.clear();
        self.ui.category_selected = row;
        self.ui.playlist_selected = 0;
    }

    fn activate_playlist_row(&mut self, row: usize) {
        if row >= self.player.view().len() {
            return;
        }
        self.ui.playlist_selected = row;
        self.player.play_row(row);
    }

    fn apply_search(&mut self) {
        self.player.search(&self.ui.search_input);
        self.ui.category_selected = 0;
        self.ui.playlist_selected = 0;
    }

    pub fn on_catalog_loaded(&mut self) {
        self.ui.category_selected = 0;
        self.ui.playlist_selected = 0;
        self.ui.search_input.clear();
    }

    fn ui(&mut self, frame: &mut Frame) {
        self.resize(frame.area());
        if self.has_focus {
            frame.render_widget(&*self, frame.area());
        }
    }
}
