//! Tests for board positions.

use tictac_engine::{Board, Player, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_from_label_or_number() {
    assert_eq!(Position::from_label_or_number("0"), Some(Position::TopLeft));
    assert_eq!(Position::from_label_or_number(" 8 "), Some(Position::BottomRight));
    assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("Bottom-Left"), Some(Position::BottomLeft));
    assert_eq!(Position::from_label_or_number("9"), None);
    assert_eq!(Position::from_label_or_number("middle"), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    assert_eq!(Position::valid_moves(&board), Position::ALL.to_vec());
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Square::Occupied(Player::X));
    board.set(Position::Center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
