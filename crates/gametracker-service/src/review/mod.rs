//! Review lifecycle service.

pub mod service;

pub use service::ReviewService;
