mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, Board, get_available_moves};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move, minimax};
pub use game_state::{Scoreboard, TicTacToeGameState};
pub use types::{Difficulty, GameStatus, Mark};
pub use win_detector::{WIN_LINES, check_win, evaluate_outcome};
