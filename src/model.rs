use crate::config::Theme;

use list::ListModel;

pub mod list;

/// The whole state of the application.
pub struct Model {
    /// Running state of the application
    pub running_state: RunningState,
    /// The collapsible section/item data rendered by the view
    pub list: ListModel,
    /// Cursor and viewport state
    pub ui: UiModel,
    /// Color scheme constants
    pub theme: Theme,
}

impl Model {
    pub fn new(list: ListModel, theme: Theme) -> Self {
        Self {
            running_state: RunningState::Running,
            list,
            ui: UiModel::default(),
            theme,
        }
    }

    /// The rows currently on screen, in display order. A collapsed section
    /// contributes only its header row, so the cost of displaying it does
    /// not depend on how many items it holds.
    pub fn visible_rows(&self) -> Vec<DisplayRow> {
        visible_rows(&self.list)
    }
}

#[derive(Debug, Default, Clone)]
pub struct UiModel {
    /// Index into the visible row list
    pub cursor_position: usize,
    /// First visible row shown in the viewport
    pub scroll_offset: usize,
    pub viewport_height: usize,
}

/// A row of the rendered list: either a section header or an item at a
/// visible row position within its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRow {
    SectionHeader(usize),
    Item { section: usize, row: usize },
}

/// Derives the dense list of visible rows from the list model. Every
/// section gets a header row; expanded sections add one row per item.
pub fn visible_rows(list: &ListModel) -> Vec<DisplayRow> {
    let mut rows = Vec::new();
    for section in 0..list.section_count() {
        rows.push(DisplayRow::SectionHeader(section));
        if let Ok(count) = list.row_count(section) {
            for row in 0..count {
                rows.push(DisplayRow::Item { section, row });
            }
        }
    }
    rows
}

#[derive(Default, PartialEq, Eq, Debug)]
pub enum RunningState {
    #[default]
    Running,
    Done,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::list::{Item, Section};

    fn two_section_list() -> ListModel {
        ListModel::new(vec![
            Section::new("Mac", vec![Item::new("MacBook"), Item::new("MacBook Air")]),
            Section::new("iPad", vec![Item::new("iPad Pro")]),
        ])
    }

    #[test]
    fn test_visible_rows_expanded() {
        let rows = visible_rows(&two_section_list());
        assert_eq!(
            rows,
            vec![
                DisplayRow::SectionHeader(0),
                DisplayRow::Item { section: 0, row: 0 },
                DisplayRow::Item { section: 0, row: 1 },
                DisplayRow::SectionHeader(1),
                DisplayRow::Item { section: 1, row: 0 },
            ]
        );
    }

    #[test]
    fn test_visible_rows_collapsed_section_is_header_only() {
        let mut list = two_section_list();
        list.toggle_section(0).unwrap();
        let rows = visible_rows(&list);
        assert_eq!(
            rows,
            vec![
                DisplayRow::SectionHeader(0),
                DisplayRow::SectionHeader(1),
                DisplayRow::Item { section: 1, row: 0 },
            ]
        );
    }

    #[test]
    fn test_visible_rows_empty_list() {
        assert!(visible_rows(&ListModel::default()).is_empty());
    }
}
