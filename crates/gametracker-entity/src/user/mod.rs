//! User domain entities.

pub mod model;
pub mod password;

pub use model::{Identity, NewUser, User, UserChanges, is_valid_email};
pub use password::PasswordField;
