mod session_rng;

pub mod idioms;
pub mod tictactoe;

pub use session_rng::SessionRng;
