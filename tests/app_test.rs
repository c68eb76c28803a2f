mod common;

use std::{sync::Arc, time::Duration};

use common::{MockBackend, Op, catalog};
use playdeck::{
    audio::{media::MediaEventKind, state::CatalogStatus},
    catalog::{CatalogError, CatalogSource, ItemId, ViewFilter},
    config::AppConfig,
    event::events::Event,
    ui::{
        app::App,
        layout::inner,
        state::Focus,
        util::handler::EventHandler,
    },
};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    layout::Rect,
    widgets::Widget,
};

const SCREEN: Rect = Rect::new(0, 0, 100, 30);

fn app() -> (App<MockBackend>, MockBackend) {
    let backend = MockBackend::default();
    let source = CatalogSource::parse("db.json").unwrap();
    let mut app = App::with_backend(AppConfig::default(), source, backend.clone());
    app.resize(SCREEN);
    (app, backend)
}

fn loaded_app() -> (App<MockBackend>, MockBackend) {
    let (mut app, backend) = app();
    EventHandler::handle_action(&mut app, Event::CatalogLoaded(catalog()));
    (app, backend)
}

fn press(app: &mut App<MockBackend>, code: KeyCode) {
    EventHandler::handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<MockBackend>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn mouse(app: &mut App<MockBackend>, kind: MouseEventKind, column: u16, row: u16) {
    EventHandler::handle_mouse_event(
        app,
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
    );
}

fn click(app: &mut App<MockBackend>, column: u16, row: u16) {
    mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
}

fn screen(app: &App<MockBackend>) -> String {
    let mut buf = Buffer::empty(SCREEN);
    Widget::render(app, SCREEN, &mut buf);
    (0..SCREEN.height)
        .map(|y| {
            (0..SCREEN.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn catalog_events_drive_the_controller() {
    let (mut app, backend) = loaded_app();
    assert_eq!(app.player.state().current_index, Some(0));
    assert_eq!(backend.opened(), vec!["So What"]);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.player.is_playing());

    let observer = backend.observer(0).unwrap();
    observer.notify(MediaEventKind::Ended);
    while let Ok(evt) = app.event_rx.try_recv() {
        EventHandler::handle_action(&mut app, evt);
    }
    assert_eq!(app.player.state().current_index, Some(1));
}

#[test]
fn failed_catalog_shows_error_message() {
    let (mut app, _backend) = app();
    let err = CatalogError::InvalidLocation("nowhere".into());
    EventHandler::handle_action(&mut app, Event::CatalogFailed(Arc::new(err)));

    assert!(matches!(app.player.catalog_status(), CatalogStatus::Failed(_)));
    assert!(screen(&app).contains("Error loading songs. Please try again later."));
}

#[test]
fn keys_control_playback() {
    let (mut app, backend) = loaded_app();

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.player.state().current_index, Some(1));
    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.player.state().current_index, Some(3));

    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.player.state().volume_percent(), 95);
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.player.state().volume_percent(), 100);

    backend.set_duration(Some(Duration::from_secs(100)));
    backend.set_current_time(Duration::from_secs(50));
    press(&mut app, KeyCode::Char('L'));
    assert_eq!(backend.ops().last(), Some(&Op::Seek(3, Duration::from_secs(55))));

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn search_applies_on_enter_only() {
    let (mut app, _backend) = loaded_app();

    press(&mut app, KeyCode::Char('/'));
    assert!(app.ui.is_editing());
    type_text(&mut app, "androidx");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.ui.search_input, "android");
    assert_eq!(app.player.view().len(), 4);
    assert_eq!(app.player.view().filter(), &ViewFilter::All);

    press(&mut app, KeyCode::Enter);
    assert!(!app.ui.is_editing());
    assert_eq!(app.player.view().indices(), &[1]);
    assert_eq!(app.player.view().filter(), &ViewFilter::Search("android".into()));
    assert_eq!(app.player.state().current_index, Some(0));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.player.state().current_index, Some(1));
    assert!(app.player.is_playing());

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.player.view().len(), 4);
    assert!(app.ui.search_input.is_empty());
}

#[test]
fn cancelled_search_keeps_previous_view() {
    let (mut app, _backend) = loaded_app();

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "miles");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.player.view().indices(), &[0, 2]);

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, " zzz");
    press(&mut app, KeyCode::Esc);
    assert!(!app.ui.is_editing());
    assert_eq!(app.ui.search_input, "miles");
    assert_eq!(app.player.view().indices(), &[0, 2]);
    assert_eq!(app.player.view().filter(), &ViewFilter::Search("miles".into()));
}

#[test]
fn empty_search_result_shows_placeholder() {
    let (mut app, _backend) = loaded_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "zzz");
    assert!(!app.player.view().is_empty());

    press(&mut app, KeyCode::Enter);
    assert!(app.player.view().is_empty());
    assert!(screen(&app).contains("No songs found."));
}

#[test]
fn category_list_filters_by_enter() {
    let (mut app, _backend) = loaded_app();

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.ui.focus, Focus::Categories);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.player.view().filter(), &ViewFilter::Category(ItemId::from(2)));
    assert_eq!(app.player.view().indices(), &[1, 3]);

    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.player.view().filter(), &ViewFilter::All);
}

#[test]
fn clicking_a_playlist_row_plays_it() {
    let (mut app, _backend) = loaded_app();
    let list = inner(app.layout.playlist);

    click(&mut app, list.x + 2, list.y + 2);
    assert_eq!(app.player.state().current_index, Some(2));
    assert!(app.player.is_playing());
    assert_eq!(app.ui.focus, Focus::Playlist);

    click(&mut app, list.x + 2, list.y + 10);
    assert_eq!(app.player.state().current_index, Some(2));
}

#[test]
fn clicking_a_category_filters() {
    let (mut app, _backend) = loaded_app();
    let categories = inner(app.layout.categories);

    click(&mut app, categories.x + 1, categories.y + 1);
    assert_eq!(app.player.view().indices(), &[0, 2]);
    assert_eq!(app.ui.category_selected, 1);

    click(&mut app, categories.x + 1, categories.y);
    assert_eq!(app.player.view().len(), 4);
}

#[test]
fn clicking_the_seek_bar_seeks_by_fraction() {
    let (mut app, backend) = loaded_app();
    let bar = inner(app.layout.progress);

    click(&mut app, bar.x + bar.width / 2, bar.y);
    assert!(!backend.ops().iter().any(|op| matches!(op, Op::Seek(..))));

    backend.set_duration(Some(Duration::from_secs(300)));
    click(&mut app, bar.x, bar.y);
    assert_eq!(backend.ops().last(), Some(&Op::Seek(0, Duration::ZERO)));

    click(&mut app, bar.x + bar.width - 1, bar.y);
    let Some(Op::Seek(0, position)) = backend.ops().last().cloned() else {
        panic!("expected a seek");
    };
    assert!(position > Duration::from_secs(290) && position < Duration::from_secs(300));
}

#[test]
fn clicking_the_volume_gauge_sets_volume() {
    let (mut app, _backend) = loaded_app();
    let gauge = inner(app.layout.volume);

    click(&mut app, gauge.x, gauge.y);
    assert_eq!(app.player.state().volume_percent(), 0);

    click(&mut app, gauge.x + 3, gauge.y);
    assert_eq!(app.player.state().volume_percent(), 33);

    click(&mut app, gauge.x + gauge.width - 1, gauge.y);
    assert_eq!(app.player.state().volume_percent(), 100);
}

#[test]
fn control_buttons_respond_to_clicks() {
    let (mut app, _backend) = loaded_app();
    let [previous, play_pause, next] = app.layout.control_buttons();

    click(&mut app, play_pause.x, play_pause.y);
    assert!(app.player.is_playing());
    click(&mut app, next.x, next.y);
    assert_eq!(app.player.state().current_index, Some(1));
    click(&mut app, previous.x, previous.y);
    click(&mut app, previous.x, previous.y);
    assert_eq!(app.player.state().current_index, Some(3));
    assert!(app.player.is_playing());
}

#[test]
fn scrolling_adjusts_volume() {
    let (mut app, _backend) = loaded_app();
    mouse(&mut app, MouseEventKind::ScrollDown, 50, 10);
    mouse(&mut app, MouseEventKind::ScrollDown, 50, 10);
    assert_eq!(app.player.state().volume_percent(), 90);
    mouse(&mut app, MouseEventKind::ScrollUp, 50, 10);
    assert_eq!(app.player.state().volume_percent(), 95);
}

#[test]
fn screen_shows_now_playing_and_time() {
    let (mut app, backend) = loaded_app();
    backend.set_duration(Some(Duration::from_secs(245)));
    backend.set_current_time(Duration::from_secs(65));
    backend.observer(0).unwrap().notify(MediaEventKind::TimeUpdate);
    while let Ok(evt) = app.event_rx.try_recv() {
        EventHandler::handle_action(&mut app, evt);
    }

    let out = screen(&app);
    assert!(out.contains("So What by Miles Davis"));
    assert!(out.contains("1:05 / 4:05"));
    assert!(out.contains("All songs"));
    assert!(out.contains("Jazz"));
    assert!(out.contains("100%"));
}
