use std::path::Path;

use serde::Deserialize;

use crate::model::list::{Item, ListModel, Section};

/// On-disk shape of a list data file:
///
/// ```toml
/// [[section]]
/// name = "Mac"
/// collapsed = false
///
/// [[section.item]]
/// name = "MacBook"
/// detail = "Apple's laptop"
/// ```
#[derive(Debug, Deserialize)]
struct DataFile {
    #[serde(default, rename = "section")]
    sections: Vec<SectionEntry>,
}

#[derive(Debug, Deserialize)]
struct SectionEntry {
    name: String,
    #[serde(default)]
    collapsed: bool,
    #[serde(default, rename = "item")]
    items: Vec<ItemEntry>,
}

#[derive(Debug, Deserialize)]
struct ItemEntry {
    name: String,
    detail: Option<String>,
}

impl From<SectionEntry> for Section {
    fn from(entry: SectionEntry) -> Self {
        let items = entry
            .items
            .into_iter()
            .map(|item| match item.detail {
                Some(detail) => Item::with_detail(item.name, detail),
                None => Item::new(item.name),
            })
            .collect();
        Section::new(entry.name, items).collapsed(entry.collapsed)
    }
}

/// Load a list model from a TOML data file
pub fn load_from_path(path: &Path) -> Result<ListModel, DataError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DataError::IoError(e.to_string()))?;
    parse(&contents)
}

fn parse(contents: &str) -> Result<ListModel, DataError> {
    let data: DataFile = toml::from_str(contents).map_err(|e| DataError::ParseError(e.to_string()))?;
    Ok(ListModel::new(
        data.sections.into_iter().map(Section::from).collect(),
    ))
}

/// Built-in data set shown when no data file is given
pub fn sample() -> ListModel {
    ListModel::new(vec![
        Section::new(
            "Mac",
            vec![
                Item::with_detail("MacBook", "Apple's laptop"),
                Item::with_detail("MacBook Air", "Thin laptop"),
                Item::with_detail("MacBook Pro", "Powerful laptop"),
                Item::with_detail("iMac", "All-in-one desktop"),
                Item::with_detail("Mac Mini", "Small desktop"),
                Item::with_detail("Mac Pro", "Desktop workstation"),
            ],
        ),
        Section::new(
            "iPad",
            vec![
                Item::with_detail("iPad Pro", "12.9 inch tablet"),
                Item::with_detail("iPad Air 2", "9.7 inch tablet"),
                Item::with_detail("iPad Mini 4", "7.9 inch tablet"),
            ],
        ),
        Section::new(
            "iPhone",
            vec![
                Item::with_detail("iPhone 6s", "4.7 inch phone"),
                Item::with_detail("iPhone 6s Plus", "5.5 inch phone"),
                Item::with_detail("iPhone SE", "4 inch phone"),
            ],
        ),
    ])
}

#[derive(Debug)]
pub enum DataError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::IoError(e) => write!(f, "IO error: {}", e),
            DataError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}
