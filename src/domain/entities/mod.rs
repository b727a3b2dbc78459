//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. A [`User`] owns
//! its [`Feature`] and [`News`] collections: children never outlive their user
//! and are only written as part of a user create or update.
//!
//! # Design Pattern
//!
//! Persisted entities carry database-assigned ids. Write input uses separate
//! structs without ids:
//! - `NewUser`, `NewFeature`, `NewNews` - For creating or fully replacing records

pub mod feature;
pub mod news;
pub mod user;

pub use feature::{Feature, NewFeature};
pub use news::{NewNews, News};
pub use user::{NewUser, User};
