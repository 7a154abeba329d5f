//! Integration tests for the C4ARENA strategy arena
//!
//! Tests the full stack: board rules, search, rollouts and tournaments

use c4arena_core::{
    has_four_in_row, score, search, winner, Board, GameResult, SearchConfig, SearchEngine, Side,
    COLS, ROWS,
};
use c4arena_rollout::{select_random_move, RolloutConfig, RolloutEvaluator};
use c4arena_tournament::{
    play_game, run_tournament, Seat, StartPolicy, StrategyConfig, TournamentConfig,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Random non-terminal positions reached by random play
fn random_positions(count: usize, seed: u64) -> Vec<(Board, Side)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut positions = Vec::new();

    while positions.len() < count {
        let mut board = Board::new();
        let mut side = Side::Red;
        loop {
            if GameResult::of(&board).is_over() {
                break;
            }
            positions.push((board, side));
            let Some(col) = select_random_move(&board.legal_moves(), &mut rng) else {
                break;
            };
            board = board.drop(col, side).unwrap();
            side = side.opponent();
        }
    }

    positions.truncate(count);
    positions
}

/// Red to move with a vertical win available in column 3
fn red_threat() -> Board {
    Board::replay(&[3, 0, 3, 5, 3, 6], Side::Red).unwrap()
}

// ============================================================================
// BOARD PROPERTIES
// ============================================================================

#[test]
fn test_legal_moves_ascending_and_counted() {
    for (board, _) in random_positions(200, 1) {
        let moves = board.legal_moves();
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
        let open = (0..COLS).filter(|&c| board.height(c) < ROWS).count();
        assert_eq!(moves.len(), open);
    }
}

#[test]
fn test_drop_lands_on_lowest_empty_row() {
    for (board, side) in random_positions(100, 2) {
        for col in board.legal_moves() {
            let row = board.height(col);
            let next = board.drop(col, side).unwrap();
            assert_eq!(next.get(row, col), Some(side));
            assert_eq!(next.height(col), row + 1);
            assert_eq!(next.piece_count(), board.piece_count() + 1);
        }
    }
}

#[test]
fn test_wins_are_mutually_exclusive() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..200 {
        let mut board = Board::new();
        let mut side = Side::Red;
        while let Some(col) = select_random_move(&board.legal_moves(), &mut rng) {
            board = board.drop(col, side).unwrap();
            if GameResult::of(&board).is_over() {
                break;
            }
            side = side.opponent();
        }
        assert!(!(has_four_in_row(&board, Side::Red) && has_four_in_row(&board, Side::Yellow)));
        if let Some(w) = winner(&board) {
            assert_eq!(w, side);
        }
    }
}

#[test]
fn test_score_is_idempotent() {
    for (board, side) in random_positions(50, 4) {
        assert_eq!(score(&board, side), score(&board, side));
    }
}

// ============================================================================
// SEARCH
// ============================================================================

#[test]
fn test_pruning_preserves_score_on_random_positions() {
    for (i, (board, side)) in random_positions(40, 5).into_iter().enumerate() {
        let depth = 1 + (i as u32 % 4);
        let mut rng_a = ChaCha8Rng::seed_from_u64(i as u64);
        let mut rng_b = ChaCha8Rng::seed_from_u64(i as u64);

        let plain = search(&board, side, &SearchConfig::minimax(depth), &mut rng_a);
        let pruned = search(&board, side, &SearchConfig::alpha_beta(depth), &mut rng_b);

        assert_eq!(plain.score, pruned.score, "position {} depth {}", i, depth);
        assert!(pruned.nodes <= plain.nodes);
    }
}

#[test]
fn test_search_finds_immediate_win() {
    for depth in 1..=5 {
        let mut engine = SearchEngine::with_seed(SearchConfig::alpha_beta(depth), 42);
        assert_eq!(engine.best_move(&red_threat(), Side::Red), Some(3));
    }
}

#[test]
fn test_alpha_beta_performance() {
    let mut engine = SearchEngine::with_seed(SearchConfig::alpha_beta(6), 42);
    let start = Instant::now();
    let outcome = engine.search(&Board::new(), Side::Red);
    let elapsed = start.elapsed();

    println!("alpha-beta depth 6 from empty: {} nodes in {:?}", outcome.nodes, elapsed);
    assert!(outcome.best_move.is_some());
}

// ============================================================================
// ROLLOUT
// ============================================================================

#[test]
fn test_rollout_finds_immediate_win() {
    let mut evaluator = RolloutEvaluator::with_seed(RolloutConfig::new(100), 42);
    assert_eq!(evaluator.best_move(&red_threat(), Side::Red), Some(3));
}

#[test]
fn test_rollout_blocks_obvious_threat() {
    // Yellow to move; Red threatens column 3
    let board = Board::replay(&[3, 0, 3, 5, 3], Side::Red).unwrap();
    let mut evaluator = RolloutEvaluator::with_seed(RolloutConfig::new(1000), 7);
    assert_eq!(evaluator.best_move(&board, Side::Yellow), Some(3));
}

// ============================================================================
// TOURNAMENT
// ============================================================================

#[test]
fn test_deterministic_tournament_repeats() {
    let a = StrategyConfig::alpha_beta(3);
    let b = StrategyConfig::minimax(2);
    let config = TournamentConfig::new(6).with_seed(12345);

    let first = run_tournament(&a, &b, &config).unwrap();
    let second = run_tournament(&a, &b, &config).unwrap();

    assert_eq!(first.a.wins, second.a.wins);
    assert_eq!(first.b.wins, second.b.wins);
    assert_eq!(first.a.wins_as_starter, second.a.wins_as_starter);
    assert_eq!(first.b.wins_as_starter, second.b.wins_as_starter);
    assert_eq!(first.draws, second.draws);
}

#[test]
fn test_search_dominates_random() {
    let config = TournamentConfig::new(10)
        .with_seed(99)
        .with_start_policy(StartPolicy::Alternate);
    let result = run_tournament(&StrategyConfig::alpha_beta(4), &StrategyConfig::random(), &config).unwrap();

    assert_eq!(result.games_played, 10);
    assert!(result.a.wins >= 9, "alpha-beta won {} of 10", result.a.wins);
}

#[test]
fn test_full_game_search_vs_rollout() {
    let a = StrategyConfig::alpha_beta(4);
    let b = StrategyConfig::rollout(50);
    let outcome = play_game(&a, &b, Seat::B, 2024, None);

    assert!(GameResult::of(&outcome.final_board).is_over());
    assert_eq!(
        Board::replay(&outcome.moves, Side::Yellow).unwrap(),
        outcome.final_board
    );
    assert!(outcome.decisions(Seat::A) > 0);
    assert!(outcome.decisions(Seat::B) > 0);
}
