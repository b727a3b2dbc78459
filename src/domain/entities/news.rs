//! News entity: a short announcement attached to a user.

/// A news item shown on a user's home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct News {
    pub id: i64,
    pub icon: String,
    pub description: String,
}

impl News {
    pub fn new(id: i64, icon: String, description: String) -> Self {
        Self {
            id,
            icon,
            description,
        }
    }
}

/// Input data for a news item written together with its owning user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNews {
    pub icon: String,
    pub description: String,
}

impl From<News> for NewNews {
    fn from(news: News) -> Self {
        Self {
            icon: news.icon,
            description: news.description,
        }
    }
}
