use crate::{
    model::{DisplayRow, Model, RunningState, UiModel},
    msg::Message,
};

/// Processes a [`Message`], modifying the passed model.
///
/// Returns a follow up [`Message`] for sequences of actions.
pub fn update(model: &mut Model, msg: Message) -> Option<Message> {
    match msg {
        Message::Quit => model.running_state = RunningState::Done,
        Message::MoveUp => {
            if model.ui.cursor_position > 0 {
                model.ui.cursor_position -= 1;
                scroll_up_to_cursor(&mut model.ui);
            }
        }
        Message::MoveDown => {
            let max_pos = model.visible_rows().len().saturating_sub(1);
            if model.ui.cursor_position < max_pos {
                model.ui.cursor_position += 1;
                scroll_down_to_cursor(&mut model.ui);
            }
        }
        Message::HalfPageUp => {
            let half_page = model.ui.viewport_height / 2;
            model.ui.cursor_position = model.ui.cursor_position.saturating_sub(half_page);
            scroll_up_to_cursor(&mut model.ui);
        }
        Message::HalfPageDown => {
            let half_page = model.ui.viewport_height / 2;
            let max_pos = model.visible_rows().len().saturating_sub(1);
            model.ui.cursor_position = (model.ui.cursor_position + half_page).min(max_pos);
            scroll_down_to_cursor(&mut model.ui);
        }
        Message::MoveToTop => {
            model.ui.cursor_position = 0;
            model.ui.scroll_offset = 0;
        }
        Message::MoveToBottom => {
            model.ui.cursor_position = model.visible_rows().len().saturating_sub(1);
            scroll_down_to_cursor(&mut model.ui);
        }
        Message::ToggleSection => {
            // Only a header row under the cursor toggles; an item row is a no-op
            let rows = model.visible_rows();
            if let Some(DisplayRow::SectionHeader(section)) =
                rows.get(model.ui.cursor_position).copied()
            {
                // The header keeps its row index after the toggle (only rows
                // below it appear or disappear), so the cursor stays put.
                let _ = model.list.toggle_section(section);
            }
        }
    };
    None
}

/// Scroll up if cursor moves above viewport
fn scroll_up_to_cursor(ui: &mut UiModel) {
    if ui.cursor_position < ui.scroll_offset {
        ui.scroll_offset = ui.cursor_position;
    }
}

/// Scroll down if cursor moves below viewport
fn scroll_down_to_cursor(ui: &mut UiModel) {
    if ui.viewport_height > 0 && ui.cursor_position >= ui.scroll_offset + ui.viewport_height {
        ui.scroll_offset = ui.cursor_position + 1 - ui.viewport_height;
    }
}
