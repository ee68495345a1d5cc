use foldlist::msg::{Message, update::update};

mod utils;

use crate::utils::create_test_model_with_rows;

#[test]
fn test_move_down() {
    let mut model = create_test_model_with_rows(5);

    update(&mut model, Message::MoveDown);
    assert_eq!(model.ui.cursor_position, 1);

    update(&mut model, Message::MoveDown);
    assert_eq!(model.ui.cursor_position, 2);
}

#[test]
fn test_move_up() {
    let mut model = create_test_model_with_rows(5);
    model.ui.cursor_position = 2;

    update(&mut model, Message::MoveUp);
    assert_eq!(model.ui.cursor_position, 1);

    update(&mut model, Message::MoveUp);
    assert_eq!(model.ui.cursor_position, 0);
}

#[test]
fn test_move_up_at_top() {
    let mut model = create_test_model_with_rows(5);
    model.ui.cursor_position = 0;

    update(&mut model, Message::MoveUp);
    assert_eq!(model.ui.cursor_position, 0);
}

#[test]
fn test_move_down_at_bottom() {
    let mut model = create_test_model_with_rows(5);
    model.ui.cursor_position = 4;

    update(&mut model, Message::MoveDown);
    assert_eq!(model.ui.cursor_position, 4);
}

#[test]
fn test_move_to_top() {
    let mut model = create_test_model_with_rows(10);
    model.ui.cursor_position = 7;
    model.ui.scroll_offset = 3;

    update(&mut model, Message::MoveToTop);
    assert_eq!(model.ui.cursor_position, 0);
    assert_eq!(model.ui.scroll_offset, 0);
}

#[test]
fn test_move_to_bottom() {
    let mut model = create_test_model_with_rows(10);
    model.ui.viewport_height = 4;

    update(&mut model, Message::MoveToBottom);
    assert_eq!(model.ui.cursor_position, 9);
    // Cursor ends at the bottom of the viewport
    assert_eq!(model.ui.scroll_offset, 6);
}

#[test]
fn test_scroll_down_when_cursor_leaves_viewport() {
    let mut model = create_test_model_with_rows(10);
    model.ui.cursor_position = 2;
    model.ui.viewport_height = 3;

    // Move to position 3, which is outside viewport (0-2)
    update(&mut model, Message::MoveDown);
    assert_eq!(model.ui.cursor_position, 3);
    assert_eq!(model.ui.scroll_offset, 1);
}

#[test]
fn test_scroll_up_when_cursor_leaves_viewport() {
    let mut model = create_test_model_with_rows(10);
    model.ui.cursor_position = 5;
    model.ui.scroll_offset = 5;
    model.ui.viewport_height = 3;

    // Move to position 4, which is above scroll_offset
    update(&mut model, Message::MoveUp);
    assert_eq!(model.ui.cursor_position, 4);
    assert_eq!(model.ui.scroll_offset, 4);
}
