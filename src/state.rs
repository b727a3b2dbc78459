//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::repositories::UserRepository;
use crate::infrastructure::persistence::PgUserRepository;

/// Services available to every handler.
///
/// The service is built over a trait object so tests can swap the
/// PostgreSQL repository for a mock.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<dyn UserRepository>>,
}

impl AppState {
    /// Wires the PostgreSQL repository and services over a connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::from_repository(Arc::new(PgUserRepository::new(pool)))
    }

    /// Wires services over an arbitrary repository implementation.
    pub fn from_repository(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: Arc::new(UserService::new(repository)),
        }
    }
}
