pub mod update;

/// Messages produced by input handling and processed by
/// [`update::update`].
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Message {
    /// Quit application
    Quit,
    /// Move one visible row up
    MoveUp,
    /// Move one visible row down
    MoveDown,
    /// Move half a page up
    HalfPageUp,
    /// Move half a page down
    HalfPageDown,
    /// Move cursor to the first visible row
    MoveToTop,
    /// Move cursor to the last visible row
    MoveToBottom,
    /// Toggle expand/collapse of the section under the cursor
    ToggleSection,
}
