//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - Users with their features and news

pub mod pg_user_repository;

pub use pg_user_repository::PgUserRepository;
