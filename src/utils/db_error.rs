//! Helpers for classifying PostgreSQL errors.

/// Maps a unique-violation error to the user field whose constraint it broke.
///
/// Returns `None` for any other error, including unique violations on
/// constraints this service does not know about.
pub fn unique_violation_field(e: &sqlx::Error) -> Option<&'static str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    match db_err.constraint() {
        Some("users_account_number_key") => Some("accountNumber"),
        Some("users_card_number_key") => Some("cardNumber"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert_eq!(unique_violation_field(&sqlx::Error::RowNotFound), None);
        assert_eq!(unique_violation_field(&sqlx::Error::PoolTimedOut), None);
    }
}
