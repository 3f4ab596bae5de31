//! Game library service.

pub mod service;

pub use service::GameService;
