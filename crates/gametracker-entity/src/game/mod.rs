//! Game library entities.

pub mod model;
pub mod status;

pub use model::{Game, GameChanges, NewGame};
pub use status::GameStatus;
