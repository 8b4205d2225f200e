//! Win detection tests for both variants.

use gamestation::core::{Board, Symbol};
use gamestation::games::{ConnectFour, Sos};
use gamestation::rules::BoardGame;

const RED: Symbol = Symbol::new('+');
const BLUE: Symbol = Symbol::new('-');
const S: Symbol = Symbol::new('S');
const O: Symbol = Symbol::new('O');

fn connect_four_with(cells: &[(i32, i32)], symbol: Symbol) -> ConnectFour {
    let mut board = Board::new(6, 7).unwrap();
    for &(row, column) in cells {
        board.set_cell(row, column, symbol);
    }
    let mut game = ConnectFour::new().unwrap();
    game.replace_board(board).unwrap();
    game
}

fn sos_with(cells: &[(i32, i32, Symbol)]) -> Sos {
    let mut game = Sos::new().unwrap();
    for &(row, column, symbol) in cells {
        game.make_move(row, column, symbol);
    }
    game
}

// =============================================================================
// Connect Four
// =============================================================================

/// Every run shape wins, and removing any one piece of it does not.
#[test]
fn test_connect_four_runs_and_broken_runs() {
    let runs: [[(i32, i32); 4]; 4] = [
        [(5, 0), (5, 1), (5, 2), (5, 3)], // horizontal
        [(2, 6), (3, 6), (4, 6), (5, 6)], // vertical
        [(0, 0), (1, 1), (2, 2), (3, 3)], // down-right
        [(1, 4), (2, 3), (3, 2), (4, 1)], // down-left
    ];

    for run in runs {
        let game = connect_four_with(&run, RED);
        assert!(game.check_for_winner(RED), "run {run:?} should win");
        assert!(!game.check_for_winner(BLUE));

        for skip in 0..4 {
            let broken: Vec<_> = run
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &cell)| cell)
                .collect();
            let game = connect_four_with(&broken, RED);
            assert!(!game.check_for_winner(RED), "broken run {broken:?} should not win");
        }
    }
}

/// Runs touching the board edges are found; runs never wrap around rows.
#[test]
fn test_connect_four_edges() {
    let game = connect_four_with(&[(0, 3), (0, 4), (0, 5), (0, 6)], BLUE);
    assert!(game.check_for_winner(BLUE));

    let game = connect_four_with(&[(0, 5), (0, 6), (1, 0), (1, 1)], BLUE);
    assert!(!game.check_for_winner(BLUE));
}

/// A mixed run of two symbols wins for neither.
#[test]
fn test_connect_four_mixed_run() {
    let mut game = connect_four_with(&[(5, 0), (5, 1), (5, 2)], RED);
    game.make_move(0, 3, BLUE);

    assert!(!game.check_for_winner(RED));
    assert!(!game.check_for_winner(BLUE));
}

// =============================================================================
// SOS
// =============================================================================

/// S-O-S in every scanned direction wins for any symbol asked about.
#[test]
fn test_sos_every_direction() {
    let patterns = [
        [(1, 0, S), (1, 1, O), (1, 2, S)], // row
        [(0, 2, S), (1, 2, O), (2, 2, S)], // column
        [(0, 0, S), (1, 1, O), (2, 2, S)], // down-right
        [(0, 2, S), (1, 1, O), (2, 0, S)], // down-left
    ];

    for pattern in patterns {
        let game = sos_with(&pattern);
        for symbol in [S, O, RED] {
            assert!(game.check_for_winner(symbol), "{pattern:?} asked for {symbol}");
        }
    }
}

/// The literal pattern only counts read left-to-right or top-to-bottom.
#[test]
fn test_sos_pattern_is_literal() {
    let game = sos_with(&[(0, 0, S), (0, 1, S), (0, 2, S)]);
    assert!(!game.check_for_winner(S));

    let game = sos_with(&[(0, 0, S), (1, 0, O)]);
    assert!(!game.check_for_winner(S));
}

/// A full board with no S-O-S anywhere wins for nobody.
#[test]
fn test_sos_full_board_without_pattern() {
    let mut game = Sos::new().unwrap();
    for row in 0..3 {
        for column in 0..3 {
            game.make_move(row, column, O);
        }
    }

    assert!(!game.has_legal_move(S));
    assert!(!game.check_for_winner(S));
    assert!(!game.check_for_winner(O));
}

/// Start from an empty board: the scenario pattern along the top row wins.
#[test]
fn test_sos_top_row_scenario() {
    let game = Sos::new().unwrap();
    assert!(!game.check_for_winner(S));
    assert!(!game.check_for_winner(O));

    let game = sos_with(&[(0, 0, S), (0, 1, O), (0, 2, S)]);
    assert!(game.check_for_winner(S));
    assert!(game.check_for_winner(O));
}
