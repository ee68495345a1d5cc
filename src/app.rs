use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::{
    config::Config,
    data,
    errors::FoldlistResult,
    model::{Model, RunningState},
    msg::{Message, update::update},
    view::view,
};

const EVENT_POLL_TIMEOUT_MILLIS: u64 = 250;

pub fn run(data_path: Option<PathBuf>) -> FoldlistResult<()> {
    let terminal = ratatui::init();
    let result = run_loop(terminal, data_path);
    ratatui::restore();
    result
}

/// Main run loop which polls events (messages), transforms the model,
/// and renders the UI.
fn run_loop(mut terminal: DefaultTerminal, data_path: Option<PathBuf>) -> FoldlistResult<()> {
    // Load config and resolve theme
    let config = Config::load();
    let theme = config.resolve_theme();

    let list = match data_path {
        Some(path) => data::load_from_path(&path)?,
        None => data::sample(),
    };
    let mut model = Model::new(list, theme);

    while model.running_state != RunningState::Done {
        // Update viewport height for scrolling calculations (subtract 2 for borders)
        let terminal_height = terminal.size()?.height as usize;
        model.ui.viewport_height = terminal_height.saturating_sub(2);

        // Render view
        terminal.draw(|f| view(&model, f))?;

        // Handle event
        let mut current_msg = handle_event()?;

        // Process updates
        while let Some(msg) = current_msg {
            current_msg = update(&mut model, msg);
        }
    }
    Ok(())
}

/// Blocks for [`EVENT_POLL_TIMEOUT_MILLIS`] waiting for a key event.
/// If a key event occurred during this time, return what [`Message`]
/// it should trigger.
fn handle_event() -> FoldlistResult<Option<Message>> {
    if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MILLIS))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == event::KeyEventKind::Press {
                return Ok(handle_key(key));
            }
        }
    }
    Ok(None)
}

/// Maps a key event into a [`Message`].
/// If function returns [`None`], no action should be triggered.
fn handle_key(key: event::KeyEvent) -> Option<Message> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Message::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => Some(Message::HalfPageUp),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => Some(Message::HalfPageDown),
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => Some(Message::MoveToBottom),
        (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc) => Some(Message::Quit),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => Some(Message::MoveUp),
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => Some(Message::MoveDown),
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => Some(Message::MoveToTop),
        (KeyModifiers::NONE, KeyCode::End) => Some(Message::MoveToBottom),
        (KeyModifiers::NONE, KeyCode::Tab | KeyCode::Enter) => Some(Message::ToggleSection),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_handle_key_toggle() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(handle_key(key), Some(Message::ToggleSection));
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(handle_key(key), Some(Message::ToggleSection));
    }

    #[test]
    fn test_handle_key_movement() {
        let key = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(handle_key(key), Some(Message::MoveDown));
        let key = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert_eq!(handle_key(key), Some(Message::MoveUp));
        let key = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(handle_key(key), Some(Message::MoveToBottom));
    }

    #[test]
    fn test_handle_key_unmapped() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handle_key(key), None);
    }
}
