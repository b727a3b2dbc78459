//! Repository trait for user storage.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for users and their owned features and news.
///
/// Children are always read and written together with their user. Writes are
/// atomic per call: an implementation must never leave a user with a partially
/// replaced child collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users ordered by id, children included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<User>, AppError>;

    /// Finds a user by its database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Checks whether a user with this id exists without loading its children.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Inserts a user with its children and returns it with assigned ids.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the account or card number is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Overwrites every field of an existing user and replaces its children.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the account or card number is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, user: NewUser) -> Result<User, AppError>;

    /// Deletes a user. Features and news are removed with it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Checks whether any user other than `exclude_id` owns the account number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_account_number(
        &self,
        account_number: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError>;

    /// Checks whether any user other than `exclude_id` owns the card number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_card_number(
        &self,
        card_number: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError>;

    /// Counts stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
