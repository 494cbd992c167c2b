// Game engine modules

pub mod board;
pub mod generator;
pub mod locks;
pub mod session;
pub mod validator;
pub mod words;

pub use board::{Board, EngineError, BOARD_SIZE};
pub use generator::BoardGenerator;
pub use locks::LockResolver;
pub use session::{GameSession, MoveOutcome, Referee};
pub use validator::MoveValidator;
pub use words::WordIndex;
