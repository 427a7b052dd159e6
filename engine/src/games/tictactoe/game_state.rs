use super::board::{BOARD_CELLS, Board};
use super::bot_controller::{BotInput, calculate_move};
use super::types::{Difficulty, GameStatus, Mark};
use super::win_detector::evaluate_outcome;
use crate::games::SessionRng;

/// Win/draw tallies that survive game resets for the lifetime of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub human_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
}

/// A single human-vs-AI session. The caller owns this object and drives it
/// through `play_human_move`; the AI answers within the same call, so from
/// the caller's point of view it is always the human's turn while the game
/// is in progress.
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub human_mark: Mark,
    pub ai_mark: Mark,
    pub current_mark: Mark,
    pub difficulty: Difficulty,
    pub status: GameStatus,
    pub scoreboard: Scoreboard,
}

impl TicTacToeGameState {
    pub fn new(
        human_mark: Mark,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> Result<Self, String> {
        let ai_mark = human_mark
            .opponent()
            .ok_or_else(|| "Human mark must be X or O".to_string())?;

        let mut state = Self {
            board: Board::new(),
            human_mark,
            ai_mark,
            current_mark: Mark::X,
            difficulty,
            status: GameStatus::InProgress,
            scoreboard: Scoreboard::default(),
        };
        state.ai_opening_move(rng);
        Ok(state)
    }

    /// Starts a fresh game with the same marks and difficulty. The
    /// scoreboard carries over.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.board = Board::new();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.ai_opening_move(rng);
    }

    pub fn switch_sides(&mut self, rng: &mut SessionRng) {
        std::mem::swap(&mut self.human_mark, &mut self.ai_mark);
        self.reset(rng);
    }

    pub fn toggle_difficulty(&mut self, rng: &mut SessionRng) {
        self.difficulty = self.difficulty.toggled();
        self.reset(rng);
    }

    /// Places the human mark, then lets the AI answer in the same call.
    /// Updates the scoreboard exactly once when the game finishes.
    pub fn play_human_move(&mut self, index: usize, rng: &mut SessionRng) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }
        if index >= BOARD_CELLS {
            return Err("Position out of bounds".to_string());
        }
        if self.current_mark != self.human_mark {
            return Err("Not your turn".to_string());
        }
        if self.board.get(index) != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.set(index, self.human_mark);
        self.current_mark = self.ai_mark;
        if self.check_game_over() {
            return Ok(());
        }

        let input = BotInput {
            board: self.board,
            ai_mark: self.ai_mark,
            human_mark: self.human_mark,
        };
        if let Some(reply) = calculate_move(self.difficulty, &input, rng) {
            self.board.set(reply, self.ai_mark);
            self.current_mark = self.human_mark;
        }
        self.check_game_over();

        Ok(())
    }

    // X always moves first; when the AI holds X it opens immediately.
    fn ai_opening_move(&mut self, rng: &mut SessionRng) {
        if self.ai_mark != Mark::X {
            return;
        }

        let input = BotInput {
            board: self.board,
            ai_mark: self.ai_mark,
            human_mark: self.human_mark,
        };
        if let Some(index) = calculate_move(self.difficulty, &input, rng) {
            self.board.set(index, self.ai_mark);
            self.current_mark = self.human_mark;
        }
    }

    fn check_game_over(&mut self) -> bool {
        let status = evaluate_outcome(&self.board);
        if status == GameStatus::InProgress {
            return false;
        }

        self.status = status;
        self.record_result();
        true
    }

    fn record_result(&mut self) {
        match self.status.winner() {
            Some(winner) if winner == self.human_mark => self.scoreboard.human_wins += 1,
            Some(_) => self.scoreboard.ai_wins += 1,
            None => self.scoreboard.draws += 1,
        }
    }
}
