//! Game session: the single owner of the live board
//!
//! Holds the board, the side to move and the history, validates human
//! moves through the rules engine, asks the AI engine for computer moves and
//! handles passes and the end of the game.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use crate::rules::{apply_move, count_pieces, has_legal_move, legal_moves, must_pass, outcome, Outcome};
use crate::{AIEngine, Board, Difficulty, MoveResult, OthelloError, Player, Pos};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE {
        human: Player,
        difficulty: Difficulty,
    },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human: Player::Dark,
            difficulty: Difficulty::default(),
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Clock for the turn in progress and the last finished turns
pub struct TurnClock {
    turn_start: Instant,
    last_human: Option<Duration>,
    last_ai: Option<Duration>,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self {
            turn_start: Instant::now(),
            last_human: None,
            last_ai: None,
        }
    }
}

impl TurnClock {
    /// Time spent on the turn in progress
    pub fn elapsed(&self) -> Duration {
        self.turn_start.elapsed()
    }

    /// How long the human took over their last move
    pub fn last_human(&self) -> Option<Duration> {
        self.last_human
    }

    /// Search time of the last computer move
    pub fn last_ai(&self) -> Option<Duration> {
        self.last_ai
    }

    fn restart(&mut self) {
        self.turn_start = Instant::now();
    }

    fn record_human(&mut self) -> Duration {
        let took = self.elapsed();
        self.last_human = Some(took);
        self.restart();
        took
    }

    fn record_ai(&mut self, searched: Duration) {
        self.last_ai = Some(searched);
        self.restart();
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Player,
    pub game_over: Option<Outcome>,
    pub last_move: Option<Pos>,
    /// Pieces flipped by the last move
    pub last_flipped: Vec<Pos>,
    pub move_history: Vec<(Pos, Player)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub clock: TurnClock,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        info!(?mode, "new game");
        Self {
            board: Board::new(),
            mode,
            current_turn: Player::Dark,
            game_over: None,
            last_move: None,
            last_flipped: Vec::new(),
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            clock: TurnClock::default(),
            suggested_move: None,
            message: None,
        }
    }

    /// Back to the opening, same mode
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    /// Current `(dark, light)` piece count
    pub fn score(&self) -> (u32, u32) {
        count_pieces(&self.board)
    }

    /// Legal moves for the side to move (empty once the game is over)
    pub fn legal_moves(&self) -> Vec<Pos> {
        if self.game_over.is_some() {
            return Vec::new();
        }
        legal_moves(&self.board, self.current_turn)
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human, .. } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human, .. } => self.current_turn != human,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    fn difficulty(&self) -> Difficulty {
        match self.mode {
            GameMode::PvE { difficulty, .. } => difficulty,
            GameMode::PvP => Difficulty::Easy,
        }
    }

    /// Place a piece for the human from raw grid coordinates.
    pub fn try_place_at(&mut self, row: i32, col: i32) -> Result<(), OthelloError> {
        let pos = Pos::try_new(row, col)?;
        self.try_place(pos)
    }

    /// Attempt a human move. On error nothing changes and the same player
    /// keeps the turn.
    #[instrument(skip(self), fields(player = %self.current_turn))]
    pub fn try_place(&mut self, pos: Pos) -> Result<(), OthelloError> {
        if self.game_over.is_some() {
            return Err(OthelloError::GameOver);
        }

        if self.is_ai_thinking() {
            return Err(OthelloError::AiThinking);
        }

        if !self.is_human_turn() {
            return Err(OthelloError::NotYourTurn);
        }

        self.execute_move(pos)?;
        let took = self.clock.record_human();
        debug!(took_ms = took.as_millis() as u64, "human move timed");
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), OthelloError> {
        let player = self.current_turn;
        let flipped = apply_move(&mut self.board, pos, player)?;
        debug!(%player, %pos, flipped = flipped.len(), "move applied");

        self.move_history.push((pos, player));
        self.last_move = Some(pos);
        self.last_flipped = flipped;
        self.suggested_move = None;
        self.message = None;

        self.advance_turn(player);
        Ok(())
    }

    /// Hand the turn over after `mover` played, skipping a side that cannot
    /// move and ending the game when neither can.
    fn advance_turn(&mut self, mover: Player) {
        let next = mover.opponent();

        if has_legal_move(&self.board, next) {
            self.current_turn = next;
        } else if must_pass(&self.board, next) {
            info!(player = %next, "no legal move, turn passes");
            self.current_turn = mover;
            self.message = Some(format!("{next} has no legal move and passes"));
        } else {
            let result = outcome(&self.board);
            info!(dark = result.dark, light = result.light, winner = ?result.winner, "game over");
            self.game_over = Some(result);
        }
    }

    /// Run the computer's move on this thread and apply it.
    pub fn play_ai_turn(&mut self) -> Result<(), OthelloError> {
        if self.game_over.is_some() {
            return Err(OthelloError::GameOver);
        }
        if !self.is_ai_turn() {
            return Err(OthelloError::NotYourTurn);
        }

        let start = Instant::now();
        let mut engine = AIEngine::from_difficulty(self.difficulty());
        let result = engine.get_move_with_stats(&self.board, self.current_turn);
        self.apply_ai_result(result, start.elapsed())
    }

    fn apply_ai_result(&mut self, result: MoveResult, elapsed: Duration) -> Result<(), OthelloError> {
        self.clock.record_ai(elapsed);
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(pos) => self.execute_move(pos),
            None => {
                // advance_turn never leaves a side without moves to play
                warn!(player = %self.current_turn, "AI returned no move");
                self.message = Some("AI could not find a move".to_string());
                Ok(())
            }
        }
    }

    /// Start AI thinking on a worker thread over a copy of the board
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let player = self.current_turn;
        let difficulty = self.difficulty();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::from_difficulty(difficulty);
            let result = engine.get_move_with_stats(&board, player);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker disconnected");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            if let Err(err) = self.apply_ai_result(move_result, elapsed) {
                warn!(%err, "AI move rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let mut engine = AIEngine::from_difficulty(Difficulty::Easy);
        let result = engine.get_move_with_stats(&self.board, self.current_turn);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last move. In PvE, also undo the computer's reply so the
    /// human is to move again.
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let mut moves = std::mem::take(&mut self.move_history);
        match self.mode {
            GameMode::PvE { human, .. } => {
                while let Some((_, player)) = moves.pop() {
                    if player == human {
                        break;
                    }
                }
            }
            GameMode::PvP => {
                moves.pop();
            }
        }

        // Simple undo: reset and replay
        self.board = Board::new();
        self.current_turn = Player::Dark;
        self.game_over = None;
        self.last_move = None;
        self.last_flipped.clear();
        self.suggested_move = None;
        self.message = None;

        for (pos, player) in moves {
            if player != self.current_turn {
                warn!(%pos, %player, expected = %self.current_turn, "history out of turn order, replay stopped");
                break;
            }
            if let Err(err) = self.execute_move(pos) {
                // History only ever holds applied moves
                warn!(%err, %pos, %player, "replay failed");
                break;
            }
        }

        self.clock.restart();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn pvp() -> GameState {
        GameState::new(GameMode::PvP)
    }

    fn pve(human: Player) -> GameState {
        GameState::new(GameMode::PvE {
            human,
            difficulty: Difficulty::Easy,
        })
    }

    /// Dark to move; after Dark plays d1 Light is stuck but Dark is not.
    fn pass_position() -> Board {
        "
        XOO.....
        ........
        ........
        ........
        ........
        ........
        ......OO
        ......OX"
            .parse()
            .unwrap()
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(GameMode::default());
        assert_eq!(state.current_turn, Player::Dark);
        assert_eq!(state.score(), (2, 2));
        assert_eq!(state.legal_moves().len(), 4);
        assert!(state.is_human_turn());
        assert!(state.game_over.is_none());
    }

    #[test]
    fn test_human_move_switches_turn() {
        let mut state = pvp();
        state.try_place(Pos::new(2, 3)).unwrap();

        assert_eq!(state.current_turn, Player::Light);
        assert_eq!(state.score(), (4, 1));
        assert_eq!(state.last_move, Some(Pos::new(2, 3)));
        assert_eq!(state.last_flipped, vec![Pos::new(3, 3)]);
        assert_eq!(state.move_history, vec![(Pos::new(2, 3), Player::Dark)]);
    }

    #[test]
    fn test_illegal_move_keeps_state() {
        let mut state = pvp();
        let before = state.board;

        assert_eq!(
            state.try_place(Pos::new(0, 0)),
            Err(OthelloError::IllegalMove {
                pos: Pos::new(0, 0),
                player: Player::Dark
            })
        );
        assert_eq!(
            state.try_place(Pos::new(3, 3)),
            Err(OthelloError::Occupied(Pos::new(3, 3)))
        );
        assert_eq!(
            state.try_place_at(8, 0),
            Err(OthelloError::OutOfBounds { row: 8, col: 0 })
        );

        assert_eq!(state.board, before);
        assert_eq!(state.current_turn, Player::Dark);
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_off_board_coordinates_rejected() {
        let mut state = pvp();
        state.board = "
        ........
        ........
        ....XOOO
        ........
        ........
        ........
        ........
        ........"
            .parse()
            .unwrap();
        let before = state.board;

        assert_eq!(
            state.try_place_at(2, 8),
            Err(OthelloError::OutOfBounds { row: 2, col: 8 })
        );
        assert_eq!(
            state.try_place_at(-1, 3),
            Err(OthelloError::OutOfBounds { row: -1, col: 3 })
        );

        assert_eq!(state.board, before);
        assert!(state.board.is_empty(Pos::new(3, 0)));
        assert_eq!(state.current_turn, Player::Dark);
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_clock_records_turns() {
        let mut state = pve(Player::Dark);
        assert!(state.clock.last_human().is_none());
        assert!(state.clock.last_ai().is_none());

        state.try_place(Pos::new(2, 3)).unwrap();
        assert!(state.clock.last_human().is_some());
        assert!(state.clock.last_ai().is_none());

        state.play_ai_turn().unwrap();
        assert!(state.clock.last_ai().is_some());
    }

    #[test]
    fn test_pass_keeps_mover() {
        let mut state = pvp();
        state.board = pass_position();

        state.try_place(Pos::new(0, 3)).unwrap();

        assert_eq!(state.current_turn, Player::Dark);
        assert!(state.game_over.is_none());
        assert!(state.message.as_deref().unwrap().contains("passes"));
        assert_eq!(state.legal_moves(), vec![Pos::new(5, 5), Pos::new(5, 7), Pos::new(7, 5)]);
    }

    #[test]
    fn test_game_over_when_both_blocked() {
        let mut state = pvp();
        let mut board = Board::empty();
        board.place(Pos::new(0, 0), Player::Dark);
        board.place(Pos::new(0, 1), Player::Light);
        board.place(Pos::new(0, 2), Player::Light);
        state.board = board;

        state.try_place(Pos::new(0, 3)).unwrap();

        let result = state.game_over.expect("game should be over");
        assert_eq!((result.dark, result.light), (4, 0));
        assert_eq!(result.winner, Some(Player::Dark));
        assert!(state.legal_moves().is_empty());
        assert_eq!(state.try_place(Pos::new(1, 1)), Err(OthelloError::GameOver));
    }

    #[test]
    fn test_not_your_turn_in_pve() {
        let mut state = pve(Player::Light);
        assert!(state.is_ai_turn());
        assert_eq!(state.try_place(Pos::new(2, 3)), Err(OthelloError::NotYourTurn));
        assert_eq!(state.board, Board::new());
    }

    #[test]
    fn test_ai_reply() {
        let mut state = pve(Player::Dark);
        state.try_place(Pos::new(2, 3)).unwrap();
        assert!(state.is_ai_turn());

        state.play_ai_turn().unwrap();

        assert_eq!(state.last_move, Some(Pos::new(2, 2)));
        assert_eq!(state.board.get(Pos::new(2, 2)), Cell::Light);
        assert_eq!(state.current_turn, Player::Dark);
        assert!(state.last_ai_result.is_some());
        assert_eq!(state.play_ai_turn(), Err(OthelloError::NotYourTurn));
    }

    #[test]
    fn test_ai_moves_first_as_dark() {
        let mut state = pve(Player::Light);
        state.play_ai_turn().unwrap();
        assert_eq!(state.move_history, vec![(Pos::new(2, 3), Player::Dark)]);
        assert!(state.is_human_turn());
    }

    #[test]
    fn test_threaded_ai_turn() {
        let mut state = pve(Player::Dark);
        state.try_place(Pos::new(2, 3)).unwrap();
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert_eq!(state.try_place(Pos::new(2, 2)), Err(OthelloError::AiThinking));

        let deadline = Instant::now() + Duration::from_secs(10);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }

        assert!(!state.is_ai_thinking());
        assert_eq!(state.move_history.len(), 2);
        assert_eq!(state.current_turn, Player::Dark);
    }

    #[test]
    fn test_undo_pvp() {
        let mut state = pvp();
        state.try_place(Pos::new(2, 3)).unwrap();
        state.try_place(Pos::new(2, 2)).unwrap();

        state.undo();

        assert_eq!(state.move_history.len(), 1);
        assert_eq!(state.current_turn, Player::Light);
        assert_eq!(state.score(), (4, 1));
    }

    #[test]
    fn test_undo_pve_restores_human_turn() {
        let mut state = pve(Player::Dark);
        state.try_place(Pos::new(2, 3)).unwrap();
        state.play_ai_turn().unwrap();

        state.undo();

        assert!(state.move_history.is_empty());
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_turn, Player::Dark);
        assert!(state.is_human_turn());
    }

    /// Random hotseat game from the opening that contains at least one pass.
    /// Also returns the `(board, side to move)` seen before every move and
    /// the history index of the move after which the opponent passed.
    fn random_game_with_pass() -> (GameState, Vec<(Board, Player)>, usize) {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = pvp();
            let mut before_each = Vec::new();

            while state.game_over.is_none() {
                let moves = state.legal_moves();
                before_each.push((state.board, state.current_turn));
                let pos = moves[rng.random_range(0..moves.len())];
                state.try_place(pos).unwrap();
            }

            let pass_at = state.move_history.windows(2).position(|w| w[0].1 == w[1].1);
            if let Some(idx) = pass_at {
                return (state, before_each, idx);
            }
        }
        panic!("no seeded game contained a pass");
    }

    #[test]
    fn test_undo_after_game_over_and_across_pass() {
        let (mut state, before_each, pass_at) = random_game_with_pass();
        let total = state.move_history.len();
        assert!(state.game_over.is_some());

        state.undo();
        assert!(state.game_over.is_none());
        assert_eq!(state.move_history.len(), total - 1);
        assert_eq!((state.board, state.current_turn), before_each[total - 1]);

        // Stop right after the move that left the opponent without a reply
        while state.move_history.len() > pass_at + 1 {
            state.undo();
        }
        let mover = state.move_history[pass_at].1;
        assert_eq!((state.board, state.current_turn), before_each[pass_at + 1]);
        assert_eq!(state.current_turn, mover);
        assert!(state.game_over.is_none());
        assert!(state.message.as_deref().unwrap_or_default().contains("passes"));

        // One more step back hands the turn to the side that made that move
        state.undo();
        assert_eq!((state.board, state.current_turn), before_each[pass_at]);
        assert_eq!(state.current_turn, mover);
    }

    #[test]
    fn test_reset() {
        let mut state = pve(Player::Dark);
        state.try_place(Pos::new(2, 3)).unwrap();
        state.reset();

        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_turn, Player::Dark);
        assert!(state.move_history.is_empty());
        assert_eq!(
            state.mode,
            GameMode::PvE {
                human: Player::Dark,
                difficulty: Difficulty::Easy
            }
        );
    }

    #[test]
    fn test_suggestion_is_legal() {
        let mut state = pvp();
        state.request_suggestion();
        let hint = state.suggested_move.expect("opening has moves");
        assert!(state.legal_moves().contains(&hint));
    }

    #[test]
    fn test_full_game_reaches_end() {
        let mut state = pve(Player::Dark);
        let mut plies = 0;
        while state.game_over.is_none() {
            if state.is_ai_turn() {
                state.play_ai_turn().unwrap();
            } else {
                let pos = state.legal_moves()[0];
                state.try_place(pos).unwrap();
            }
            plies += 1;
            assert!(plies <= 60, "more plies than empty cells");
        }

        let result = state.game_over.unwrap();
        assert!(result.dark + result.light <= 64);
        assert_eq!((result.dark, result.light), state.score());
    }
}
