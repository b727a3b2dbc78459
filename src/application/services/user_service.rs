//! User management service.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for managing bank customers.
///
/// Ensures that:
/// - Lookups, updates and deletes of unknown ids fail with [`AppError::NotFound`]
/// - Account and card numbers stay unique across users
/// - Updates replace the whole record, children included
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_by_id(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    /// Creates a new user with its features and news.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the account or card number is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        self.ensure_unique(&new_user, None).await?;

        let created = self.repository.create(new_user).await?;
        tracing::info!(user_id = created.id, "User created");

        Ok(created)
    }

    /// Replaces every field of an existing user.
    ///
    /// Children not present in `user` are removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if another user owns the account or card number.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(&self, id: i64, user: NewUser) -> Result<User, AppError> {
        self.ensure_exists(id).await?;
        self.ensure_unique(&user, Some(id)).await?;

        let updated = self.repository.update(id, user).await?;
        tracing::info!(user_id = id, "User updated");

        Ok(updated)
    }

    /// Deletes a user together with its features and news.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.ensure_exists(id).await?;

        self.repository.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");

        Ok(())
    }

    /// Counts stored users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    async fn ensure_exists(&self, id: i64) -> Result<(), AppError> {
        if self.repository.exists_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("User not found", json!({ "id": id })))
        }
    }

    /// Rejects account or card numbers owned by a user other than `current_id`.
    ///
    /// The database unique constraints back this check up when two writes race.
    async fn ensure_unique(&self, user: &NewUser, current_id: Option<i64>) -> Result<(), AppError> {
        if self
            .repository
            .exists_by_account_number(&user.account_number, current_id)
            .await?
        {
            tracing::debug!("Rejected duplicate account number");
            return Err(AppError::conflict(
                "accountNumber is already registered",
                json!({ "field": "accountNumber" }),
            ));
        }

        if self
            .repository
            .exists_by_card_number(&user.card_number, current_id)
            .await?
        {
            tracing::debug!("Rejected duplicate card number");
            return Err(AppError::conflict(
                "cardNumber is already registered",
                json!({ "field": "cardNumber" }),
            ));
        }

        Ok(())
    }
}
