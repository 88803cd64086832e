use super::{board, Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    EmptyPit,
    InvalidPit,
    GameOver,
}

/// Seeds gained during one turn, for user-facing messages: seeds the mover
/// captured, and seeds the opponent swept if the move starved a half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSummary {
    pub captured: u32,
    pub swept: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::South, // South starts
            outcome: None,
        }
    }

    /// Build a state from an arbitrary board position.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        let mut state = GameState {
            board,
            current_player,
            outcome: None,
        };
        state.outcome = state.check_outcome();
        state
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal pits (relative indices with seeds to sow)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..board::PITS_PER_SIDE)
            .filter(|&pit| self.board.pit_for(self.current_player, pit) > 0)
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, pit: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(pit)?;
        Ok(next)
    }

    /// Apply a full turn in place: sow, capture, settlement, then the
    /// termination check. Returns what the turn gained for messaging.
    pub fn apply_move_mut(&mut self, pit: usize) -> Result<TurnSummary, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let last = self.board.sow(mover, pit).map_err(|e| match e {
            board::MoveError::EmptyPit => MoveError::EmptyPit,
            board::MoveError::InvalidPit => MoveError::InvalidPit,
        })?;

        let captured = self.board.capture(mover, last);
        let swept = self.board.settle();

        self.outcome = self.check_outcome();
        self.current_player = mover.other();

        Ok(TurnSummary { captured, swept })
    }

    /// A score above half the seeds wins; an exact split draws. Settlement
    /// always produces one of the two, so it needs no case of its own.
    fn check_outcome(&self) -> Option<GameOutcome> {
        const TARGET: u32 = board::TOTAL_SEEDS / 2;
        let south = self.board.score(Player::South);
        let north = self.board.score(Player::North);

        if south > TARGET {
            Some(GameOutcome::Winner(Player::South))
        } else if north > TARGET {
            Some(GameOutcome::Winner(Player::North))
        } else if south == TARGET && north == TARGET {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(state: &GameState) -> u32 {
        state.board().pits().iter().sum::<u32>()
            + state.board().score(Player::South)
            + state.board().score(Player::North)
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::South);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_moves(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let next = state.apply_move(1).unwrap();

        assert_eq!(next.current_player(), Player::North);
        assert_eq!(next.board().pits(), &[4, 0, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4]);
        assert!(!next.is_terminal());
    }

    #[test]
    fn test_opening_move_captures_nothing() {
        let mut state = GameState::initial();
        let summary = state.apply_move_mut(1).unwrap();
        assert_eq!(summary, TurnSummary { captured: 0, swept: None });
    }

    #[test]
    fn test_empty_pit_rejected() {
        let board = Board::from_position([4, 0, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4], 0, 0);
        let state = GameState::from_board(board, Player::South);
        assert_eq!(state.apply_move(1), Err(MoveError::EmptyPit));
    }

    #[test]
    fn test_invalid_pit_rejected() {
        let state = GameState::initial();
        assert_eq!(state.apply_move(6), Err(MoveError::InvalidPit));
    }

    #[test]
    fn test_move_after_game_over_rejected() {
        let board = Board::from_position([0; 12], 26, 22);
        let state = GameState::from_board(board, Player::South);
        assert!(state.is_terminal());
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = GameState::initial();
        state.apply_move_mut(0).unwrap();
        assert_eq!(state.current_player(), Player::North);
        state.apply_move_mut(0).unwrap();
        assert_eq!(state.current_player(), Player::South);
    }

    #[test]
    fn test_capture_reflected_in_summary() {
        // South's sow from pit 5 lands two seeds on pits 6 and 7, making
        // pit 7 hold 3 and pit 6 hold 2: a 5-seed chain capture.
        let board = Board::from_position([4, 4, 4, 4, 0, 2, 1, 2, 4, 4, 4, 4], 8, 3);
        let mut state = GameState::from_board(board, Player::South);
        let summary = state.apply_move_mut(5).unwrap();
        assert_eq!(summary.captured, 5);
        assert_eq!(summary.swept, None);
        assert_eq!(state.board().score(Player::South), 13);
        assert_eq!(total(&state), board::TOTAL_SEEDS);
    }

    #[test]
    fn test_winning_score_ends_game() {
        // South sits at 24 and captures the 2-seed pit 6 to pass the post.
        let board = Board::from_position([0, 0, 0, 0, 0, 1, 1, 4, 0, 0, 0, 0], 24, 18);
        let mut state = GameState::from_board(board, Player::South);
        assert!(!state.is_terminal());
        let summary = state.apply_move_mut(5).unwrap();
        assert_eq!(summary.captured, 2);
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::South)));
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_starvation_settles_and_ends_game() {
        // South's only seed lands on pit 6. Capturing it would empty North's
        // half, so the grand-slam guard voids the capture; South's own half
        // is now empty, and North sweeps its two remaining seeds.
        let board = Board::from_position([0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0], 23, 23);
        let mut state = GameState::from_board(board, Player::South);
        let summary = state.apply_move_mut(5).unwrap();
        assert_eq!(summary.captured, 0);
        assert_eq!(summary.swept, Some(2));
        assert_eq!(state.board().score(Player::North), 25);
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::North)));
        assert_eq!(total(&state), board::TOTAL_SEEDS);
    }

    #[test]
    fn test_even_split_is_draw() {
        let board = Board::from_position([0; 12], 24, 24);
        let state = GameState::from_board(board, Player::North);
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_seed_conservation_over_scripted_game() {
        let mut state = GameState::initial();
        for pit in [2, 1, 0, 4, 5, 3, 1, 0, 2, 5, 4, 3, 0, 1] {
            if state.is_terminal() {
                break;
            }
            if state.apply_move(pit).is_ok() {
                state.apply_move_mut(pit).unwrap();
            }
            assert_eq!(total(&state), board::TOTAL_SEEDS);
        }
    }
}
