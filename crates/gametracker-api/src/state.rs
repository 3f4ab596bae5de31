//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use gametracker_auth::jwt::{JwtDecoder, JwtEncoder};
use gametracker_auth::password::PasswordValidator;
use gametracker_core::config::AppConfig;
use gametracker_core::traits::CredentialHasher;
use gametracker_database::store::Stores;
use gametracker_service::{GameService, ReviewService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Backing stores
    pub stores: Stores,
    /// Bearer token validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Registration, login and profile service
    pub user_service: Arc<UserService>,
    /// Review lifecycle service
    pub review_service: Arc<ReviewService>,
    /// Game library service
    pub game_service: Arc<GameService>,
}

impl AppState {
    /// Wire services over the given stores.
    pub fn new(config: AppConfig, stores: Stores, hasher: Arc<dyn CredentialHasher>) -> Self {
        let user_service = UserService::new(
            Arc::clone(&stores.users),
            hasher,
            PasswordValidator::new(&config.auth),
            JwtEncoder::new(&config.auth),
        );
        let review_service = ReviewService::new(
            Arc::clone(&stores.reviews),
            Arc::clone(&stores.games),
            Arc::clone(&stores.users),
        );
        let game_service = GameService::new(Arc::clone(&stores.games));

        Self {
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            config: Arc::new(config),
            stores,
            user_service: Arc::new(user_service),
            review_service: Arc::new(review_service),
            game_service: Arc::new(game_service),
        }
    }
}
