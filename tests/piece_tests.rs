//! Piece tests: spawning, movement and rotation against a board.

use tetrodrop::core::{template, Board, Piece, Point};
use tetrodrop::types::{Collision, Shape};

fn cells(piece: &Piece) -> Vec<(i32, i32)> {
    piece.cells().iter().map(|p| (p.row, p.col)).collect()
}

#[test]
fn test_i_piece_falls_to_floor() {
    let board = Board::new(16, 10);
    let mut piece = Piece::spawn(Shape::I, 1, 5);

    let mut drops = 0;
    while piece.translate(&board, 1, 0) {
        drops += 1;
    }

    assert_eq!(drops, 12);
    assert_eq!(piece.bounding_box().max_row, 15);
    assert_eq!(board.classify_piece(&piece.translated(1, 0)), Collision::Floor);
}

#[test]
fn test_move_left_at_wall_is_rejected() {
    let board = Board::new(16, 10);
    let mut piece = Piece::spawn(Shape::J, 5, 0);
    assert_eq!(piece.bounding_box().min_col, 0);

    let before = cells(&piece);
    assert!(!piece.translate(&board, 0, -1));
    assert_eq!(cells(&piece), before);
    assert_eq!(piece.center(), Point::new(5, 0));
}

#[test]
fn test_spawn_offsets_template() {
    for shape in Shape::ALL {
        let piece = Piece::spawn(shape, 4, 6);
        let expected: Vec<(i32, i32)> = template(shape)
            .iter()
            .map(|p| (p.row + 4, p.col + 6))
            .collect();
        assert_eq!(cells(&piece), expected, "{:?}", shape);
        assert_eq!(piece.rotation_state(), 0);
    }
}

#[test]
fn test_t_rotation_cycle() {
    let board = Board::new(16, 10);
    let mut piece = Piece::spawn(Shape::T, 8, 5);
    let start = cells(&piece);

    assert!(piece.rotate(&board));
    // Clockwise: the nub above the pivot swings to the right.
    assert_eq!(cells(&piece), vec![(7, 5), (8, 5), (9, 5), (8, 6)]);
    assert_eq!(piece.rotation_state(), 1);

    for _ in 0..3 {
        assert!(piece.rotate(&board));
    }
    assert_eq!(piece.rotation_state(), 0);
    assert_eq!(cells(&piece), start);
}

#[test]
fn test_s_piece_toggles_between_two_orientations() {
    let board = Board::new(16, 10);
    let mut piece = Piece::spawn(Shape::S, 8, 5);
    let start = cells(&piece);

    assert!(piece.rotate(&board));
    let turned = cells(&piece);
    assert_ne!(turned, start);
    assert!(piece.rotate(&board));
    assert_eq!(cells(&piece), start);
    assert!(piece.rotate(&board));
    assert_eq!(cells(&piece), turned);
}

#[test]
fn test_blocked_rotation_changes_nothing() {
    let mut board = Board::new(16, 10);
    let mut piece = Piece::spawn(Shape::I, 5, 5);
    // The horizontal I would need (5, 3).
    board.set(5, 3, true);

    let before = piece;
    assert!(!piece.rotate(&board));
    assert_eq!(piece, before);
}

#[test]
fn test_rotation_into_wall_is_rejected() {
    let board = Board::new(16, 10);
    let mut piece = Piece::spawn(Shape::I, 5, 9);
    let before = piece;
    assert!(!piece.rotate(&board));
    assert_eq!(piece, before);
}

#[test]
fn test_o_rotation_is_noop_even_when_boxed_in() {
    let mut board = Board::new(16, 10);
    for row in 0..16 {
        for col in 0..10 {
            board.set(row, col, true);
        }
    }
    let mut piece = Piece::spawn(Shape::O, 5, 5);
    let before = piece;
    assert!(piece.rotate(&board));
    assert_eq!(piece, before);
}

#[test]
fn test_reposition_ignores_board() {
    let mut piece = Piece::spawn(Shape::L, 2, 3);
    piece.reposition(1, 5);
    assert_eq!(piece.center(), Point::new(1, 5));
    let bbox = piece.bounding_box();
    assert_eq!((bbox.min_row, bbox.max_row), (0, 2));
    assert_eq!((bbox.min_col, bbox.max_col), (4, 5));
}
