//! DTOs for user management.
//!
//! The same shape is used for requests and responses. On input every `id` is
//! optional and ignored: the user id comes from the path or the database, and
//! children are replaced wholesale.

use crate::domain::entities::{Feature, NewFeature, NewNews, NewUser, News, User};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Digits, optionally grouped with `-` or `.` (e.g. `00000000-0`).
static ACCOUNT_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+([.-][0-9]+)*$").unwrap());

/// Digits, optionally grouped with spaces, `-` or `.` (e.g. `xxxx xxxx xxxx 1111`).
static CARD_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+([ .-][0-9]+)*$").unwrap());

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    no_nul(value)
}

/// PostgreSQL text columns cannot store NUL.
fn no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character")
            .with_message("must not contain NUL characters".into()));
    }
    Ok(())
}

/// A bank customer as exchanged over the API.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Server-assigned id. Ignored on input.
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,

    /// Unique account number.
    #[validate(
        length(min = 1, max = 20),
        regex(path = *ACCOUNT_NUMBER_REGEX, message = "must contain digits separated by '-' or '.'")
    )]
    pub account_number: String,

    /// Unique card number.
    #[validate(
        length(min = 1, max = 25),
        regex(path = *CARD_NUMBER_REGEX, message = "must contain digits separated by spaces, '-' or '.'")
    )]
    pub card_number: String,

    #[serde(default)]
    #[validate(nested)]
    pub features: Vec<FeatureDto>,

    #[serde(default)]
    #[validate(nested)]
    pub news: Vec<NewsDto>,
}

/// A displayable feature owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FeatureDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255), custom(function = "no_nul"))]
    pub icon: String,

    #[validate(length(min = 1, max = 255), custom(function = "no_nul"))]
    pub description: String,
}

/// A news item owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewsDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255), custom(function = "no_nul"))]
    pub icon: String,

    #[validate(length(min = 1, max = 255), custom(function = "no_nul"))]
    pub description: String,
}

impl From<Feature> for FeatureDto {
    fn from(feature: Feature) -> Self {
        Self {
            id: Some(feature.id),
            icon: feature.icon,
            description: feature.description,
        }
    }
}

impl From<FeatureDto> for NewFeature {
    fn from(dto: FeatureDto) -> Self {
        Self {
            icon: dto.icon,
            description: dto.description,
        }
    }
}

impl From<News> for NewsDto {
    fn from(news: News) -> Self {
        Self {
            id: Some(news.id),
            icon: news.icon,
            description: news.description,
        }
    }
}

impl From<NewsDto> for NewNews {
    fn from(dto: NewsDto) -> Self {
        Self {
            icon: dto.icon,
            description: dto.description,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            name: user.name,
            account_number: user.account_number,
            card_number: user.card_number,
            features: user.features.into_iter().map(FeatureDto::from).collect(),
            news: user.news.into_iter().map(NewsDto::from).collect(),
        }
    }
}

impl From<UserDto> for NewUser {
    fn from(dto: UserDto) -> Self {
        Self {
            name: dto.name,
            account_number: dto.account_number,
            card_number: dto.card_number,
            features: dto.features.into_iter().map(NewFeature::from).collect(),
            news: dto.news.into_iter().map(NewNews::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_dto() -> UserDto {
        serde_json::from_value(json!({
            "name": "Ana",
            "accountNumber": "00000000-0",
            "cardNumber": "4111 1111 1111 1111",
            "features": [{ "icon": "star", "description": "VIP" }]
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let dto = valid_dto();

        assert_eq!(dto.id, None);
        assert_eq!(dto.account_number, "00000000-0");
        assert_eq!(dto.features[0].id, None);
        assert!(dto.news.is_empty());
    }

    #[test]
    fn test_valid_dto_passes_validation() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut dto = valid_dto();
        dto.name = "   ".to_string();

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_account_number_format_rejected() {
        let mut dto = valid_dto();
        dto.account_number = "12ab".to_string();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_card_number_too_long_rejected() {
        let mut dto = valid_dto();
        dto.card_number = "1".repeat(26);

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_nested_feature_validated() {
        let mut dto = valid_dto();
        dto.features[0].icon = String::new();

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_nul_character_rejected_in_free_text() {
        let mut dto = valid_dto();
        dto.name = "An\0a".to_string();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let mut dto = valid_dto();
        dto.features[0].description = "V\0IP".to_string();
        assert!(dto.validate().is_err());

        let mut dto = valid_dto();
        dto.news.push(NewsDto {
            id: None,
            icon: "\0".to_string(),
            description: "Hello".to_string(),
        });
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_model_to_dto_serializes_camel_case() {
        let user = User::new(
            9,
            "Ana".to_string(),
            "111".to_string(),
            "222".to_string(),
            vec![Feature::new(3, "star".to_string(), "VIP".to_string())],
            vec![News::new(4, "bell".to_string(), "Hello".to_string())],
        );

        let value = serde_json::to_value(UserDto::from(user)).unwrap();

        assert_eq!(value["id"], 9);
        assert_eq!(value["accountNumber"], "111");
        assert_eq!(value["cardNumber"], "222");
        assert_eq!(value["features"][0]["id"], 3);
        assert_eq!(value["news"][0]["description"], "Hello");
    }

    #[test]
    fn test_dto_to_model_ignores_ids() {
        let mut dto = valid_dto();
        dto.id = Some(77);
        dto.features[0].id = Some(88);

        let new_user = NewUser::from(dto);

        assert_eq!(new_user.name, "Ana");
        assert_eq!(
            new_user.features,
            vec![NewFeature {
                icon: "star".to_string(),
                description: "VIP".to_string(),
            }]
        );
    }
}
