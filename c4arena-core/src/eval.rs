//! Positional heuristic over sliding 4-cell windows

use serde::{Deserialize, Serialize};

use crate::board::{Board, Side, CENTER_COL, ROWS};
use crate::win::{WINDOWS, WINDOW_LEN};

/// Search and heuristic score
pub type Score = i64;

/// Terminal win value; far outside the range any heuristic total can reach
pub const WIN_SCORE: Score = 1_000_000_000;

/// Largest absolute weight a configured `Heuristics` may carry
///
/// 69 windows plus 6 center pieces at this weight stay below `WIN_SCORE / 10`.
pub const MAX_WEIGHT: Score = 1_000_000;

/// Largest leaf jitter a search may be configured with
pub const MAX_JITTER: Score = 1_000_000;

/// Heuristic weights for position evaluation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heuristics {
    /// Per piece of the scoring side in the center column
    pub center_weight: Score,
    /// Window fully owned by the scoring side
    pub four: Score,
    /// Three own pieces and one empty cell
    pub three: Score,
    /// Two own pieces and two empty cells
    pub two: Score,
    /// Three opponent pieces and one empty cell (negative)
    pub opponent_three: Score,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            center_weight: 3,
            four: 100,
            three: 5,
            two: 2,
            opponent_three: -4,
        }
    }
}

impl Heuristics {
    /// Largest absolute weight in the set
    pub fn max_weight(&self) -> Score {
        [
            self.center_weight,
            self.four,
            self.three,
            self.two,
            self.opponent_three,
        ]
        .iter()
        .map(|w| w.saturating_abs())
        .max()
        .unwrap_or(0)
    }

    /// Whether every weight is within `MAX_WEIGHT`
    pub fn is_bounded(&self) -> bool {
        self.max_weight() <= MAX_WEIGHT
    }

    /// Score a single window of cells for `side`
    pub fn window(&self, window: &[Option<Side>; WINDOW_LEN], side: Side) -> Score {
        let own = window.iter().filter(|&&c| c == Some(side)).count();
        let opp = window.iter().filter(|&&c| c == Some(side.opponent())).count();
        let empty = WINDOW_LEN - own - opp;

        match (own, opp, empty) {
            (4, _, _) => self.four,
            (3, _, 1) => self.three,
            (2, _, 2) => self.two,
            (_, 3, 1) => self.opponent_three,
            _ => 0,
        }
    }
}

/// Window score with the default weights
pub fn window_score(window: &[Option<Side>; WINDOW_LEN], side: Side) -> Score {
    Heuristics::default().window(window, side)
}

/// Evaluate `board` from `side`'s perspective with the given weights
///
/// Additive and non-normalized: center-column bias plus the sum of every
/// horizontal, vertical and diagonal window.
pub fn evaluate(board: &Board, side: Side, heuristics: &Heuristics) -> Score {
    let center = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == Some(side))
        .count() as Score;

    let windows: Score = WINDOWS
        .iter()
        .map(|cells| {
            let window = cells.map(|(r, c)| board.get(r, c));
            heuristics.window(&window, side)
        })
        .fold(0, Score::saturating_add);

    center
        .saturating_mul(heuristics.center_weight)
        .saturating_add(windows)
}

/// Evaluate with the default weights
pub fn score(board: &Board, side: Side) -> Score {
    evaluate(board, side, &Heuristics::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Option<Side> = Some(Side::Red);
    const Y: Option<Side> = Some(Side::Yellow);
    const E: Option<Side> = None;

    #[test]
    fn test_weight_bounds() {
        assert!(Heuristics::default().is_bounded());
        assert_eq!(Heuristics::default().max_weight(), 100);

        let heavy = Heuristics {
            opponent_three: -(MAX_WEIGHT + 1),
            ..Default::default()
        };
        assert!(!heavy.is_bounded());
        assert_eq!(heavy.max_weight(), MAX_WEIGHT + 1);
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let extreme = Heuristics {
            center_weight: Score::MAX,
            four: Score::MAX,
            three: Score::MAX,
            two: Score::MAX,
            opponent_three: Score::MIN,
        };
        let board = Board::replay(&[3, 3, 3, 2, 4], Side::Red).unwrap();
        assert_eq!(evaluate(&board, Side::Red, &extreme), Score::MAX);
    }

    #[test]
    fn test_window_scores() {
        assert_eq!(window_score(&[R, R, R, R], Side::Red), 100);
        assert_eq!(window_score(&[R, R, E, R], Side::Red), 5);
        assert_eq!(window_score(&[E, R, R, E], Side::Red), 2);
        assert_eq!(window_score(&[Y, Y, E, Y], Side::Red), -4);
        assert_eq!(window_score(&[R, Y, R, E], Side::Red), 0);
        assert_eq!(window_score(&[R, R, R, Y], Side::Red), 0);
        assert_eq!(window_score(&[E, E, E, E], Side::Red), 0);
        assert_eq!(window_score(&[Y, Y, Y, Y], Side::Red), 0);
    }

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(score(&Board::new(), Side::Red), 0);
        assert_eq!(score(&Board::new(), Side::Yellow), 0);
    }

    #[test]
    fn test_center_bias() {
        let center = Board::new().drop(CENTER_COL, Side::Red).unwrap();
        let edge = Board::new().drop(0, Side::Red).unwrap();
        assert!(score(&center, Side::Red) > score(&edge, Side::Red));
        // A single piece forms no 2-of-4 window, so only the center weight counts
        assert_eq!(score(&center, Side::Red), 3);
    }

    #[test]
    fn test_open_three_worth_at_least_five_more() {
        // Yellow stacks column 6 identically on both boards
        let with_three = Board::replay(&[0, 6, 1, 6, 2, 6], Side::Red).unwrap();
        let without = Board::replay(&[0, 6, 1, 6, 5, 6], Side::Red).unwrap();
        let diff = score(&with_three, Side::Red) - score(&without, Side::Red);
        assert!(diff >= 5, "open three should add at least 5, got {}", diff);
    }

    #[test]
    fn test_opponent_three_penalized() {
        let board = Board::replay(&[0, 6, 1, 6, 2], Side::Yellow).unwrap();
        // Yellow: (0,0) (0,1) (0,2); Red: (0,6) (1,6)
        assert!(score(&board, Side::Red) < 0);
    }

    #[test]
    fn test_score_is_idempotent() {
        let board = Board::replay(&[3, 2, 3, 4, 1, 1, 5], Side::Red).unwrap();
        assert_eq!(score(&board, Side::Red), score(&board, Side::Red));
        assert_eq!(score(&board, Side::Yellow), score(&board, Side::Yellow));
    }

    #[test]
    fn test_custom_weights() {
        let board = Board::new().drop(CENTER_COL, Side::Yellow).unwrap();
        let heuristics = Heuristics {
            center_weight: 10,
            ..Heuristics::default()
        };
        assert_eq!(evaluate(&board, Side::Yellow, &heuristics), 10);
        assert_eq!(evaluate(&board, Side::Red, &heuristics), 0);
    }
}
