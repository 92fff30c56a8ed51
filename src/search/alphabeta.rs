//! Minimax search with alpha-beta pruning
//!
//! Plain recursive depth-first search over the rules engine. Each child
//! node gets its own copy of the board, so siblings never see each other's
//! moves and the caller's board is never touched.
//!
//! Light maximizes and Dark minimizes the piece-count evaluation. Moves are
//! tried in row-major order and only a strictly better score replaces the
//! current best, so the first best move wins ties.
//!
//! A side with no legal move ends the line: the node is scored as a leaf
//! instead of passing the turn and searching on.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Player, Pos};
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Player::Dark, 3);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {best_move}");
//! }
//! ```

use tracing::{debug, instrument};

use crate::board::{Board, Player, Pos};
use crate::eval::evaluate;
use crate::rules::{execute_flips, legal_moves};

/// Window bound standing in for infinity; larger than any evaluation
pub const SCORE_INF: i32 = i32::MAX;

/// Which way a node pushes the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Maximizer,
    Minimizer,
}

impl Role {
    /// Light maximizes, Dark minimizes
    #[inline]
    pub fn of(player: Player) -> Role {
        match player {
            Player::Light => Role::Maximizer,
            Player::Dark => Role::Minimizer,
        }
    }

    /// Starting value for the running best; any real score beats it
    #[inline]
    fn worst(self) -> i32 {
        match self {
            Role::Maximizer => -SCORE_INF,
            Role::Minimizer => SCORE_INF,
        }
    }

    /// Strict comparison: equal scores never replace the current best
    #[inline]
    fn improves(self, score: i32, best: i32) -> bool {
        match self {
            Role::Maximizer => score > best,
            Role::Minimizer => score < best,
        }
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Nodes scored by the evaluation (depth exhausted or no move)
    pub leaves: u64,
    /// Times the remaining siblings were skipped because `beta <= alpha`
    pub cutoffs: u64,
}

/// Score and recommended move of a searched node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Evaluation under best play to the searched depth
    pub score: i32,
    /// `None` only for nodes cut off without expanding
    pub best_move: Option<Pos>,
}

impl SearchResult {
    #[inline]
    fn leaf(board: &Board) -> Self {
        Self {
            score: evaluate(board),
            best_move: None,
        }
    }
}

/// Stateless minimax over `board` with the given window.
///
/// Returns `(evaluate(board), None)` when `depth <= 0` or `player` has no
/// legal move; otherwise the best score and the first move reaching it.
pub fn minimax(board: &Board, depth: i8, alpha: i32, beta: i32, player: Player) -> SearchResult {
    Searcher::new().search_window(board, depth, alpha, beta, player)
}

/// Alpha-beta searcher that also reports statistics for the last call.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    stats: SearchStats,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search from `board` with `player` to move and a full window.
    #[must_use]
    #[instrument(level = "debug", skip(self, board))]
    pub fn search(&mut self, board: &Board, player: Player, depth: i8) -> SearchResult {
        let result = self.search_window(board, depth, -SCORE_INF, SCORE_INF, player);
        debug!(
            score = result.score,
            best_move = ?result.best_move,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );
        result
    }

    /// Search with an explicit `(alpha, beta)` window.
    #[must_use]
    pub fn search_window(
        &mut self,
        board: &Board,
        depth: i8,
        alpha: i32,
        beta: i32,
        player: Player,
    ) -> SearchResult {
        self.stats = SearchStats::default();
        self.alpha_beta(board, depth, alpha, beta, player)
    }

    /// Statistics of the most recent search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: i8,
        mut alpha: i32,
        mut beta: i32,
        player: Player,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if depth <= 0 {
            self.stats.leaves += 1;
            return SearchResult::leaf(board);
        }

        let moves = legal_moves(board, player);
        if moves.is_empty() {
            self.stats.leaves += 1;
            return SearchResult::leaf(board);
        }

        let role = Role::of(player);
        let mut best_score = role.worst();
        let mut best_move = None;

        for pos in moves {
            let mut child = *board;
            let flipped = execute_flips(&mut child, pos, player);
            debug_assert!(!flipped.is_empty(), "generated move must flip");

            let score = self
                .alpha_beta(&child, depth - 1, alpha, beta, player.opponent())
                .score;

            if role.improves(score, best_score) {
                best_score = score;
                best_move = Some(pos);
            }

            match role {
                Role::Maximizer => alpha = alpha.max(score),
                Role::Minimizer => beta = beta.min(score),
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        SearchResult {
            score: best_score,
            best_move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{apply_move, is_terminal};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Full minimax without pruning, same ordering and tie-break.
    fn unpruned(board: &Board, depth: i8, player: Player, nodes: &mut u64) -> SearchResult {
        *nodes += 1;
        let moves = legal_moves(board, player);
        if depth <= 0 || moves.is_empty() {
            return SearchResult::leaf(board);
        }
        let role = Role::of(player);
        let mut best = SearchResult {
            score: role.worst(),
            best_move: None,
        };
        for pos in moves {
            let mut child = *board;
            apply_move(&mut child, pos, player).unwrap();
            let score = unpruned(&child, depth - 1, player.opponent(), nodes).score;
            if role.improves(score, best.score) {
                best = SearchResult {
                    score,
                    best_move: Some(pos),
                };
            }
        }
        best
    }

    fn random_midgame(rng: &mut StdRng, plies: usize) -> (Board, Player) {
        let mut board = Board::new();
        let mut player = Player::Dark;
        for _ in 0..plies {
            if is_terminal(&board) {
                break;
            }
            let moves = legal_moves(&board, player);
            if !moves.is_empty() {
                let pos = moves[rng.random_range(0..moves.len())];
                apply_move(&mut board, pos, player).unwrap();
            }
            player = player.opponent();
        }
        (board, player)
    }

    #[test]
    fn test_role_from_player() {
        assert_eq!(Role::of(Player::Light), Role::Maximizer);
        assert_eq!(Role::of(Player::Dark), Role::Minimizer);
    }

    #[test]
    fn test_search_opening_dark_depth_one() {
        let mut searcher = Searcher::new();
        let result = searcher.search(&Board::new(), Player::Dark, 1);

        // Every opening move leaves Dark ahead; first in row-major order wins
        assert_eq!(result.score, -1);
        assert_eq!(result.best_move, Some(Pos::new(2, 3)));
        assert_eq!(searcher.stats().nodes, 1 + 4);
    }

    #[test]
    fn test_depth_zero_is_leaf() {
        let board = Board::new();
        let result = minimax(&board, 0, -SCORE_INF, SCORE_INF, Player::Dark);
        assert_eq!(result, SearchResult { score: 0, best_move: None });
    }

    #[test]
    fn test_negative_depth_is_leaf() {
        let mut board = Board::new();
        apply_move(&mut board, Pos::new(2, 3), Player::Dark).unwrap();
        let result = minimax(&board, -3, -SCORE_INF, SCORE_INF, Player::Light);
        assert_eq!(result, SearchResult { score: -1, best_move: None });
    }

    #[test]
    fn test_no_move_is_leaf() {
        // Light cannot flip a lone corner; the line stops even though Dark could move
        let board: Board = "
            XO......
            OO......
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let result = minimax(&board, 4, -SCORE_INF, SCORE_INF, Player::Light);
        assert_eq!(result, SearchResult { score: 1, best_move: None });
    }

    #[test]
    fn test_terminal_board_is_leaf() {
        let board = Board::empty();
        let result = minimax(&board, 5, -SCORE_INF, SCORE_INF, Player::Dark);
        assert_eq!(result, SearchResult { score: 0, best_move: None });
    }

    #[test]
    fn test_single_move_depth_one_light() {
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Player::Light);
        board.place(Pos::new(0, 1), Player::Dark);
        assert_eq!(legal_moves(&board, Player::Light), vec![Pos::new(0, 2)]);

        let mut after = board;
        apply_move(&mut after, Pos::new(0, 2), Player::Light).unwrap();

        let result = minimax(&board, 1, -SCORE_INF, SCORE_INF, Player::Light);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, evaluate(&after));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_search_does_not_touch_board() {
        let board = Board::new();
        let copy = board;
        let _ = minimax(&board, 4, -SCORE_INF, SCORE_INF, Player::Dark);
        assert_eq!(board, copy);
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..5 {
            let (board, player) = random_midgame(&mut rng, 12);
            let first = minimax(&board, 3, -SCORE_INF, SCORE_INF, player);
            let second = minimax(&board, 3, -SCORE_INF, SCORE_INF, player);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_pruning_matches_full_minimax() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut searcher = Searcher::new();

        for game in 0..12 {
            let (board, player) = random_midgame(&mut rng, 4 + game * 4);
            for depth in 1..=4 {
                let mut full_nodes = 0;
                let expected = unpruned(&board, depth, player, &mut full_nodes);
                let got = searcher.search(&board, player, depth);

                assert_eq!(got, expected, "depth {depth}\n{board}");
                assert!(searcher.stats().nodes <= full_nodes);
            }
        }
    }

    #[test]
    fn test_returns_move_when_moves_exist() {
        let mut rng = StdRng::seed_from_u64(5);
        for plies in [0, 10, 20, 30, 40] {
            let (board, player) = random_midgame(&mut rng, plies);
            if legal_moves(&board, player).is_empty() {
                continue;
            }
            let result = minimax(&board, 2, -SCORE_INF, SCORE_INF, player);
            let best = result.best_move.expect("root with moves returns a move");
            assert!(legal_moves(&board, player).contains(&best));
        }
    }
}
