use std::error::Error;
use std::fmt;

/// A single row's data within a section. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    detail: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
        }
    }

    pub fn with_detail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: Some(detail.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// A named, ordered group of items with an independent collapsed state.
///
/// Items are fixed at construction; the collapsed flag is the only state
/// that changes over the section's lifetime.
#[derive(Debug, Clone)]
pub struct Section {
    name: String,
    items: Vec<Item>,
    collapsed: bool,
}

impl Section {
    /// Creates an expanded section.
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
            collapsed: false,
        }
    }

    /// Sets the initial collapsed state (builder style).
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of items in the section, regardless of collapsed state.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// An index was outside its valid bounds.
///
/// This is a contract violation by the caller (asking for a row it was
/// never told about), so callers should propagate it rather than clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfRangeError {
    Section {
        index: usize,
        count: usize,
    },
    Row {
        section: usize,
        index: usize,
        count: usize,
    },
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutOfRangeError::Section { index, count } => {
                write!(f, "section index {} out of range (count {})", index, count)
            }
            OutOfRangeError::Row {
                section,
                index,
                count,
            } => write!(
                f,
                "row index {} out of range for section {} (visible rows {})",
                index, section, count
            ),
        }
    }
}

impl Error for OutOfRangeError {}

/// An ordered collection of sections. Insertion order is display order
/// and never changes; toggling a section only flips its collapsed flag.
///
/// A collapsed section reports zero visible rows no matter how many items
/// it holds, so the host renders it as a single header row.
#[derive(Debug, Clone, Default)]
pub struct ListModel {
    sections: Vec<Section>,
}

impl ListModel {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Result<&Section, OutOfRangeError> {
        self.sections.get(index).ok_or(OutOfRangeError::Section {
            index,
            count: self.sections.len(),
        })
    }

    pub fn is_collapsed(&self, index: usize) -> Result<bool, OutOfRangeError> {
        Ok(self.section(index)?.is_collapsed())
    }

    /// Number of visible rows in a section: 0 when collapsed, else the
    /// number of items.
    pub fn row_count(&self, index: usize) -> Result<usize, OutOfRangeError> {
        let section = self.section(index)?;
        if section.is_collapsed() {
            Ok(0)
        } else {
            Ok(section.len())
        }
    }

    /// Looks up the item at a visible row position. The row must be below
    /// `row_count(section)`, so any row of a collapsed section is out of
    /// range.
    pub fn item(&self, section: usize, row: usize) -> Result<&Item, OutOfRangeError> {
        let count = self.row_count(section)?;
        if row >= count {
            return Err(OutOfRangeError::Row {
                section,
                index: row,
                count,
            });
        }
        Ok(&self.sections[section].items[row])
    }

    /// Flips the collapsed flag of a section and returns the new state.
    /// Later `row_count`/`item` calls reflect the change immediately.
    pub fn toggle_section(&mut self, index: usize) -> Result<bool, OutOfRangeError> {
        let count = self.sections.len();
        let section = self
            .sections
            .get_mut(index)
            .ok_or(OutOfRangeError::Section { index, count })?;
        section.collapsed = !section.collapsed;
        Ok(section.collapsed)
    }
}
