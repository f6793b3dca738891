// tests/engine_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property tests for run detection, evaluation and move selection.
 *
 * Invariants covered:
 * - `detect_runs` agrees with an independent count that starts every run at
 *   its first stone, for all lengths and both colors.
 * - Exchanging colors on the board exchanges the counts.
 * - `evaluate` only returns the sentinels or a score strictly between the
 *   near-loss sentinel and `MAX_SCORE`, and returns `MAX_SCORE` exactly when
 *   Black has a counted five.
 * - `select_move` returns an empty cell and leaves the board as it was.
 * - `terminal_result` is `Draw` exactly when the board is full.
 */
use gomoku::eval::{detect_runs, evaluate, MAX_SCORE, NEAR_LOSS_SCORE};
use gomoku::{select_move, terminal_result, Board, Direction, Pos, RunCounts, Stone, TerminalResult};
use proptest::prelude::*;

fn arb_stone() -> impl Strategy<Value = Stone> {
    prop_oneof![
        3 => Just(Stone::Empty),
        1 => Just(Stone::Black),
        1 => Just(Stone::White),
    ]
}

fn arb_board() -> impl Strategy<Value = Board> {
    (5usize..=8).prop_flat_map(|size| {
        prop::collection::vec(arb_stone(), size * size).prop_map(move |cells| {
            let mut board = Board::new(size).unwrap();
            for (idx, stone) in cells.into_iter().enumerate() {
                if stone != Stone::Empty {
                    board.place(Pos::new(idx / size, idx % size), stone).unwrap();
                }
            }
            board
        })
    })
}

/// Count runs by locating each run's first stone directly.
fn reference_counts(board: &Board, color: Stone, length: usize) -> RunCounts {
    let size = board.size();
    let free = |p: Option<Pos>| p.is_some_and(|p| board.get(p) == Some(Stone::Empty));
    let mut counts = RunCounts::default();

    for dir in Direction::ALL {
        for pos in board.positions() {
            if board.get(pos) != Some(color) {
                continue;
            }
            let before = pos.offset(dir, -1, size);
            if before.is_some_and(|p| board.get(p) == Some(color)) {
                continue;
            }

            let mut run = 1usize;
            while pos
                .offset(dir, run as isize, size)
                .is_some_and(|p| board.get(p) == Some(color))
            {
                run += 1;
            }
            if run != length {
                continue;
            }

            let after = pos.offset(dir, run as isize, size);
            match (free(before), free(after)) {
                (true, true) => counts.open += 1,
                (true, false) | (false, true) => counts.semi_open += 1,
                (false, false) => {}
            }
        }
    }
    counts
}

#[test]
fn exact_length_matching_on_long_runs() {
    let mut board = Board::new(9).unwrap();
    for c in 0..7 {
        board.place(Pos::new(4, c), Stone::Black).unwrap();
    }
    for length in 1..=9 {
        let expected = if length == 7 { RunCounts::new(0, 1) } else { RunCounts::default() };
        let counts = detect_runs(&board, Stone::Black, length);
        if length == 1 {
            // Each stone is a single along the other three directions; the
            // column-0 stone touches the edge on both diagonals.
            assert_eq!(counts, RunCounts::new(7 + 6 + 6, 2));
        } else {
            assert_eq!(counts, expected, "length {length}");
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn detect_runs_matches_reference(board in arb_board(), length in 1usize..=6) {
        for color in [Stone::Black, Stone::White] {
            prop_assert_eq!(
                detect_runs(&board, color, length),
                reference_counts(&board, color, length)
            );
        }
    }

    #[test]
    fn color_swap_symmetry(board in arb_board(), length in 2usize..=5) {
        let swapped = board.swap_colors();
        prop_assert_eq!(
            detect_runs(&board, Stone::Black, length),
            detect_runs(&swapped, Stone::White, length)
        );
        prop_assert_eq!(
            detect_runs(&board, Stone::White, length),
            detect_runs(&swapped, Stone::Black, length)
        );
    }

    #[test]
    fn evaluate_stays_in_bounds(board in arb_board()) {
        let score = evaluate(&board);
        let is_sentinel = score == MAX_SCORE || score == -MAX_SCORE || score == NEAR_LOSS_SCORE;
        prop_assert!(is_sentinel || (score > NEAR_LOSS_SCORE && score < MAX_SCORE));
        prop_assert_eq!(score == MAX_SCORE, detect_runs(&board, Stone::Black, 5).any());
    }

    #[test]
    fn select_move_is_legal_and_pure(board in arb_board()) {
        let mut probe = board.clone();
        match select_move(&mut probe) {
            Ok(pos) => {
                prop_assert!(board.contains(pos));
                prop_assert!(board.is_empty(pos));
            }
            Err(_) => prop_assert!(board.is_full()),
        }
        prop_assert_eq!(probe, board);
    }

    #[test]
    fn draw_only_on_full_board(board in arb_board()) {
        let result = terminal_result(&board);
        prop_assert_eq!(result == TerminalResult::Draw, board.is_full());
    }
}
