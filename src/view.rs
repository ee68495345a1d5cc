use ratatui::{
    Frame,
    widgets::{Block, Borders, Paragraph},
};

use crate::model::{DisplayRow, Model};

mod item_row;
mod section_header;
mod util;

/// The view function draws the UI using the application state (Model).
///
/// ┌Foldlist─────────────────────────────────────────┐
/// |∨Mac (2)                                         |
/// |  MacBook        Apple's laptop                  |
/// |  MacBook Air    Thin laptop                     |
/// |>iPad (2)                                        |
/// |∨iPhone (3)                                      |
/// |  iPhone 6                                       |
/// |  iPhone 6s                                      |
/// |  iPhone 7                                       |
/// └─────────────────────────────────────────────────┘
///
/// Only visible rows are emitted: a collapsed section costs a single
/// header line no matter how many items it holds.
pub fn view(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let theme = &model.theme;
    let cursor_pos = model.ui.cursor_position;
    // Content width is area width minus 2 for borders
    let content_width = area.width.saturating_sub(2) as usize;

    let mut text = Vec::new();
    for (index, display_row) in model.visible_rows().iter().enumerate() {
        let line = match display_row {
            DisplayRow::SectionHeader(section) => match model.list.section(*section) {
                Ok(section) => section_header::get_line(
                    section.name(),
                    section.len(),
                    section.is_collapsed(),
                    theme,
                ),
                Err(_) => continue,
            },
            DisplayRow::Item { section, row } => match model.list.item(*section, *row) {
                Ok(item) => item_row::get_line(item, theme),
                Err(_) => continue,
            },
        };

        if index == cursor_pos {
            text.push(util::highlight_line(line, content_width, theme.selection_bg));
        } else {
            text.push(line);
        }
    }

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Foldlist"))
        .scroll((model.ui.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}
