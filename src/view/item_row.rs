use ratatui::{
    style::Style,
    text::{Line as TextLine, Span},
};

use crate::{config::Theme, model::list::Item};

/// Generate the view line for an item row, indented under its header
pub fn get_line(item: &Item, theme: &Theme) -> TextLine<'static> {
    let mut spans = vec![
        Span::raw("  "),
        Span::styled(
            item.name().to_string(),
            Style::default().fg(theme.item_name),
        ),
    ];

    if let Some(detail) = item.detail() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            detail.to_string(),
            Style::default().fg(theme.item_detail),
        ));
    }

    TextLine::from(spans)
}
