//! User entity representing a bank customer.

use super::{Feature, NewFeature, NewNews, News};

/// A bank customer with its owned features and news.
///
/// `account_number` and `card_number` are unique across all users. The `id`
/// is assigned by the database on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub account_number: String,
    pub card_number: String,
    pub features: Vec<Feature>,
    pub news: Vec<News>,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let user = User::new(
    ///     1,
    ///     "Ana".to_string(),
    ///     "111".to_string(),
    ///     "222".to_string(),
    ///     vec![Feature::new(1, "star".to_string(), "VIP".to_string())],
    ///     vec![],
    /// );
    /// ```
    pub fn new(
        id: i64,
        name: String,
        account_number: String,
        card_number: String,
        features: Vec<Feature>,
        news: Vec<News>,
    ) -> Self {
        Self {
            id,
            name,
            account_number,
            card_number,
            features,
            news,
        }
    }
}

/// Input data for creating a user or fully replacing an existing one.
///
/// Every field overwrites the stored value on update, including the child
/// collections: an empty `features` list removes all features.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub account_number: String,
    pub card_number: String,
    pub features: Vec<NewFeature>,
    pub news: Vec<NewNews>,
}

impl From<User> for NewUser {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            account_number: user.account_number,
            card_number: user.card_number,
            features: user.features.into_iter().map(NewFeature::from).collect(),
            news: user.news.into_iter().map(NewNews::from).collect(),
        }
    }
}
