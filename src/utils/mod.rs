//! Utility functions shared across layers.
//!
//! - [`db_error`] - Database error classification

pub mod db_error;
