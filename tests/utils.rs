#![allow(unused)]

use foldlist::{
    config::Theme,
    model::{
        Model, UiModel,
        list::{Item, ListModel, Section},
    },
};

///
/// ∨Mac (2)
///   MacBook
///   MacBook Air
/// ∨iPad (2)
///   iPad Pro
///   iPad Air 2
///
pub fn create_sample_list() -> ListModel {
    ListModel::new(vec![
        Section::new("Mac", vec![Item::new("MacBook"), Item::new("MacBook Air")]),
        Section::new("iPad", vec![Item::new("iPad Pro"), Item::new("iPad Air 2")]),
    ])
}

/// Creates a test model with the sample list and a 10 row viewport.
pub fn create_test_model() -> Model {
    let mut model = Model::new(create_sample_list(), Theme::default());
    model.ui.viewport_height = 10;
    model
}

/// Creates a model whose visible row list has exactly `rows` entries:
/// one section header followed by `rows - 1` items.
pub fn create_test_model_with_rows(rows: usize) -> Model {
    assert!(rows > 0, "a section always contributes a header row");
    let items = (0..rows - 1)
        .map(|i| Item::new(format!("item {}", i)))
        .collect();
    let list = ListModel::new(vec![Section::new("Section", items)]);
    let mut model = Model::new(list, Theme::default());
    model.ui.viewport_height = 10;
    model
}
