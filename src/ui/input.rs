use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    audio::commands::PlayerCommand,
    ui::{message::AppMessage, state::UiState},
};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, ui: &UiState) -> Option<AppMessage> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppMessage::Quit);
        }

        if ui.is_editing() {
            return match key.code {
                KeyCode::Enter => Some(AppMessage::SubmitSearch),
                KeyCode::Esc => Some(AppMessage::CancelSearch),
                KeyCode::Backspace => Some(AppMessage::SearchBackspace),
                KeyCode::Char(c) => Some(AppMessage::SearchInput(c)),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(AppMessage::Quit),
            KeyCode::Char(' ') => Some(AppMessage::Player(PlayerCommand::TogglePlayPause)),
            KeyCode::Char('n') => Some(AppMessage::Player(PlayerCommand::Next)),
            KeyCode::Char('p') => Some(AppMessage::Player(PlayerCommand::Previous)),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(AppMessage::VolumeUp),
            KeyCode::Char('-') => Some(AppMessage::VolumeDown),
            KeyCode::Char('H') | KeyCode::Left => Some(AppMessage::SeekBackward),
            KeyCode::Char('L') | KeyCode::Right => Some(AppMessage::SeekForward),
            KeyCode::Char('/') => Some(AppMessage::StartSearch),
            KeyCode::Tab | KeyCode::BackTab => Some(AppMessage::ToggleFocus),
            KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::MoveSelection(1)),
            KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::MoveSelection(-1)),
            KeyCode::Char('g') => Some(AppMessage::SelectFirst),
            KeyCode::Char('G') => Some(AppMessage::SelectLast),
            KeyCode::Enter => Some(AppMessage::Activate),
            KeyCode::Esc => Some(AppMessage::ClearFilter),
            _ => None,
        }
    }
}
