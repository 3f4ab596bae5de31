//! Review domain entities.

pub mod model;
pub mod rating;
pub mod view;

pub use model::{NewReview, Review, ReviewChanges, ReviewEdit};
pub use rating::Rating;
pub use view::{AuthorSummary, GameSummary, ReviewWithAuthor, ReviewWithGame};
