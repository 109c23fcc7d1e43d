//! Tests for the game engine lifecycle and move validation.

use strictly_gomoku::{GameEngine, GameStatus, MoveError, Player, Position};

#[test]
fn test_new_game_starts_black_in_progress() {
    let game = GameEngine::new();
    assert_eq!(game.current_player(), Player::Black);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winner(), None);
    assert!(game.win_result().is_none());
    assert!(game.history().is_empty());
    assert_eq!(game.board().occupied(), 0);
}

#[test]
fn test_accepted_move_flips_turn() {
    let mut game = GameEngine::new();

    let status = game.apply_move(7, 7).expect("empty cell");
    assert_eq!(status, GameStatus::InProgress);
    assert_eq!(game.current_player(), Player::White);
    assert_eq!(game.history().len(), 1);

    game.apply_move(0, 14).expect("empty cell");
    assert_eq!(game.current_player(), Player::Black);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_any_in_bounds_cell_playable_on_empty_board() {
    for (row, col) in [(0, 0), (0, 14), (14, 0), (14, 14), (7, 7)] {
        let mut game = GameEngine::new();
        assert!(game.apply_move(row, col).is_ok(), "({row}, {col})");
        assert_eq!(game.current_player(), Player::White);
    }
}

#[test]
fn test_occupied_cell_rejected_without_state_change() {
    let mut game = GameEngine::new();
    game.apply_move(5, 5).unwrap();

    let before = game.clone();
    let result = game.apply_move(5, 5);

    assert_eq!(
        result,
        Err(MoveError::CellOccupied(Position::new(5, 5).unwrap()))
    );
    assert_eq!(game, before);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_player(), Player::White);
}

#[test]
fn test_out_of_bounds_rejected_without_state_change() {
    let mut game = GameEngine::new();
    let before = game.clone();

    assert_eq!(
        game.apply_move(15, 0),
        Err(MoveError::OutOfBounds { row: 15, col: 0 })
    );
    assert_eq!(
        game.apply_move(0, 15),
        Err(MoveError::OutOfBounds { row: 0, col: 15 })
    );
    assert_eq!(
        game.apply_move(200, 200),
        Err(MoveError::OutOfBounds { row: 200, col: 200 })
    );
    assert_eq!(game, before);
}

/// BLACK plays (7,0)..(7,4) while WHITE answers on a distant row.
#[test]
fn test_black_horizontal_five_wins_on_fifth_move() {
    let mut game = GameEngine::new();

    for col in 0..5 {
        let status = game.apply_move(7, col).unwrap();
        if col < 4 {
            assert_eq!(status, GameStatus::InProgress);
            assert_eq!(game.winner(), None);
            // White answers on a distant row; never interferes.
            game.apply_move(12, col).unwrap();
        } else {
            assert_eq!(status, GameStatus::Won(Player::Black));
        }
    }

    assert_eq!(game.winner(), Some(Player::Black));
    let line = game.win_result().expect("winning line");
    let expected: Vec<Position> = (0..5).map(|c| Position::new(7, c).unwrap()).collect();
    assert_eq!(line.cells(), expected.as_slice());
}

#[test]
fn test_vertical_five_wins() {
    let mut game = GameEngine::new();
    for row in 3..7 {
        game.apply_move(row, 4).unwrap();
        game.apply_move(row, 10).unwrap();
    }
    let status = game.apply_move(7, 4).unwrap();
    assert_eq!(status, GameStatus::Won(Player::Black));
    assert_eq!(game.win_result().unwrap().cells().len(), 5);
}

#[test]
fn test_diagonal_down_five_wins() {
    let mut game = GameEngine::new();
    for i in 0..4 {
        game.apply_move(2 + i, 2 + i).unwrap();
        game.apply_move(14, i).unwrap();
    }
    assert_eq!(game.apply_move(6, 6).unwrap(), GameStatus::Won(Player::Black));
}

#[test]
fn test_diagonal_up_five_wins() {
    let mut game = GameEngine::new();
    for i in 0..4 {
        game.apply_move(10 - i, 2 + i).unwrap();
        game.apply_move(14, i).unwrap();
    }
    assert_eq!(game.apply_move(6, 6).unwrap(), GameStatus::Won(Player::Black));
}

#[test]
fn test_four_in_a_row_is_not_a_win() {
    let mut game = GameEngine::new();
    for col in 0..4 {
        game.apply_move(7, col).unwrap();
        game.apply_move(12, col).unwrap();
    }
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winner(), None);

    // The fifth aligned stone wins.
    assert_eq!(game.apply_move(7, 4).unwrap(), GameStatus::Won(Player::Black));
}

#[test]
fn test_white_can_win_too() {
    let mut game = GameEngine::new();
    // Black wanders, white builds a column at col 8.
    for row in 0..4 {
        game.apply_move(row, 0).unwrap();
        game.apply_move(row, 8).unwrap();
    }
    game.apply_move(14, 14).unwrap();
    assert_eq!(game.apply_move(4, 8).unwrap(), GameStatus::Won(Player::White));
    assert_eq!(game.winner(), Some(Player::White));
}

#[test]
fn test_no_moves_accepted_after_win() {
    let mut game = GameEngine::new();
    for col in 0..5 {
        game.apply_move(7, col).unwrap();
        if col < 4 {
            game.apply_move(12, col).unwrap();
        }
    }
    assert_eq!(game.winner(), Some(Player::Black));
    let before = game.clone();

    // Rejected regardless of target cell, occupied or empty.
    assert_eq!(
        game.apply_move(0, 0),
        Err(MoveError::GameAlreadyWon(Player::Black))
    );
    assert_eq!(
        game.apply_move(7, 0),
        Err(MoveError::GameAlreadyWon(Player::Black))
    );
    assert_eq!(game, before);
}

#[test]
fn test_turn_flips_even_on_winning_move() {
    let mut game = GameEngine::new();
    for col in 0..5 {
        game.apply_move(7, col).unwrap();
        if col < 4 {
            game.apply_move(12, col).unwrap();
        }
    }
    // Black just won, but the turn marker points at white: the flip
    // happens on every accepted move, winning ones included.
    assert_eq!(game.winner(), Some(Player::Black));
    assert_eq!(game.current_player(), Player::White);
}

#[test]
fn test_is_winning_cell_exact_membership() {
    let mut game = GameEngine::new();
    for col in 0..5 {
        game.apply_move(7, col).unwrap();
        if col < 4 {
            game.apply_move(12, col).unwrap();
        }
    }

    for col in 0..5 {
        assert!(game.is_winning_cell(7, col));
    }
    // White's stones and empty cells are not part of the line.
    assert!(!game.is_winning_cell(12, 0));
    assert!(!game.is_winning_cell(7, 5));
    assert!(!game.is_winning_cell(7, 12));
    // Out of bounds is simply false.
    assert!(!game.is_winning_cell(15, 0));
}

#[test]
fn test_is_winning_cell_false_while_in_progress() {
    let mut game = GameEngine::new();
    game.apply_move(7, 7).unwrap();
    assert!(!game.is_winning_cell(7, 7));
}

#[test]
fn test_reset_from_won_game() {
    let mut game = GameEngine::new();
    for col in 0..5 {
        game.apply_move(7, col).unwrap();
        if col < 4 {
            game.apply_move(12, col).unwrap();
        }
    }
    assert_eq!(game.winner(), Some(Player::Black));

    game.reset();

    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winner(), None);
    assert!(game.win_result().is_none());
    assert!(game.history().is_empty());
    assert_eq!(game.board().occupied(), 0);
    assert_eq!(game.current_player(), Player::Black);

    // The fresh game accepts moves again.
    assert!(game.apply_move(7, 0).is_ok());
}

#[test]
fn test_reset_mid_game() {
    let mut game = GameEngine::new();
    game.apply_move(3, 3).unwrap();
    game.apply_move(4, 4).unwrap();

    game.reset();
    assert_eq!(game, GameEngine::new());
}

#[test]
fn test_history_tracks_occupied_count() {
    let mut game = GameEngine::new();
    for (i, (row, col)) in [(7, 7), (8, 8), (6, 7), (8, 6), (5, 7)].iter().enumerate() {
        game.apply_move(*row, *col).unwrap();
        assert_eq!(game.history().len(), i + 1);
        assert_eq!(game.board().occupied(), i + 1);
    }
}

#[test]
fn test_place_with_typed_position() {
    let mut game = GameEngine::new();
    let pos = Position::new(7, 7).unwrap();
    game.place(pos).unwrap();
    assert_eq!(
        game.place(pos),
        Err(MoveError::CellOccupied(pos))
    );
}
