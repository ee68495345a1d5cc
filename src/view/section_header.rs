use ratatui::{
    style::Style,
    text::{Line as TextLine, Span},
};

use crate::config::Theme;

/// Generate the view line for a section header
pub fn get_line(name: &str, count: usize, collapsed: bool, theme: &Theme) -> TextLine<'static> {
    // Use '>' when collapsed, '∨' when expanded
    let indicator = if collapsed { ">" } else { "∨" };

    TextLine::from(vec![
        Span::styled(
            format!("{}{}", indicator, name),
            Style::default().fg(theme.section_header),
        ),
        Span::styled(
            format!(" ({})", count),
            Style::default().fg(theme.item_count),
        ),
    ])
}
