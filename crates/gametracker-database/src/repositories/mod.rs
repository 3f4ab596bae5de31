//! PostgreSQL implementations of the store traits.

pub mod game;
pub mod review;
pub mod user;

pub use game::GameRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;

/// Name of the constraint a database error violated, if any.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}
