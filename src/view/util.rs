use ratatui::{
    style::{Color, Style},
    text::{Line as TextLine, Span},
};

/// Style applied to the row under the cursor
pub fn selection_style(bg: Color) -> Style {
    Style::default().bg(bg)
}

/// Applies the selection background to a line, padding it to the content
/// width so the highlight spans the whole row.
pub fn highlight_line(line: TextLine<'static>, content_width: usize, bg: Color) -> TextLine<'static> {
    let sel_style = selection_style(bg);
    let line_width: usize = line.spans.iter().map(|s| s.content.len()).sum();
    let padding = content_width.saturating_sub(line_width);

    let mut spans: Vec<Span> = line.spans;
    if padding > 0 {
        spans.push(Span::styled(" ".repeat(padding), sel_style));
    }
    TextLine::from(spans).style(sel_style)
}
