//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgConnection, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Feature, NewFeature, NewNews, NewUser, News, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    account_number: String,
    card_number: String,
}

/// Row shape shared by the `features` and `news` tables.
#[derive(Debug, FromRow)]
struct ChildRow {
    id: i64,
    user_id: i64,
    icon: String,
    description: String,
}

impl From<ChildRow> for Feature {
    fn from(row: ChildRow) -> Self {
        Feature::new(row.id, row.icon, row.description)
    }
}

impl From<ChildRow> for News {
    fn from(row: ChildRow) -> Self {
        News::new(row.id, row.icon, row.description)
    }
}

/// PostgreSQL repository for users.
///
/// Features and news live in their own tables with `ON DELETE CASCADE`
/// foreign keys. Writes touching several tables run in one transaction; a
/// transaction dropped on an error path rolls back.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Loads features and news for the given users, grouped by user id.
    async fn load_children(
        &self,
        user_ids: &[i64],
    ) -> Result<(HashMap<i64, Vec<Feature>>, HashMap<i64, Vec<News>>), AppError> {
        let feature_rows = sqlx::query_as::<_, ChildRow>(
            r#"
            SELECT id, user_id, icon, description
            FROM features
            WHERE user_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(user_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let news_rows = sqlx::query_as::<_, ChildRow>(
            r#"
            SELECT id, user_id, icon, description
            FROM news
            WHERE user_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(user_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok((group_by_user(feature_rows), group_by_user(news_rows)))
    }
}

fn group_by_user<T: From<ChildRow>>(rows: Vec<ChildRow>) -> HashMap<i64, Vec<T>> {
    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(row.user_id).or_default().push(T::from(row));
    }
    grouped
}

fn assemble(row: UserRow, features: Vec<Feature>, news: Vec<News>) -> User {
    User::new(
        row.id,
        row.name,
        row.account_number,
        row.card_number,
        features,
        news,
    )
}

async fn insert_features(
    conn: &mut PgConnection,
    user_id: i64,
    features: &[NewFeature],
) -> Result<Vec<Feature>, AppError> {
    let mut inserted = Vec::with_capacity(features.len());
    for feature in features {
        let row = sqlx::query_as::<_, ChildRow>(
            r#"
            INSERT INTO features (user_id, icon, description)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, icon, description
            "#,
        )
        .bind(user_id)
        .bind(&feature.icon)
        .bind(&feature.description)
        .fetch_one(&mut *conn)
        .await?;
        inserted.push(Feature::from(row));
    }
    Ok(inserted)
}

async fn insert_news(
    conn: &mut PgConnection,
    user_id: i64,
    news: &[NewNews],
) -> Result<Vec<News>, AppError> {
    let mut inserted = Vec::with_capacity(news.len());
    for item in news {
        let row = sqlx::query_as::<_, ChildRow>(
            r#"
            INSERT INTO news (user_id, icon, description)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, icon, description
            "#,
        )
        .bind(user_id)
        .bind(&item.icon)
        .bind(&item.description)
        .fetch_one(&mut *conn)
        .await?;
        inserted.push(News::from(row));
    }
    Ok(inserted)
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, account_number, card_number
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let (mut features, mut news) = self.load_children(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|r| {
                let user_features = features.remove(&r.id).unwrap_or_default();
                let user_news = news.remove(&r.id).unwrap_or_default();
                assemble(r, user_features, user_news)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, account_number, card_number
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let (mut features, mut news) = self.load_children(&[id]).await?;

        Ok(Some(assemble(
            row,
            features.remove(&id).unwrap_or_default(),
            news.remove(&id).unwrap_or_default(),
        )))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, account_number, card_number)
            VALUES ($1, $2, $3)
            RETURNING id, name, account_number, card_number
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.account_number)
        .bind(&new_user.card_number)
        .fetch_one(&mut *tx)
        .await?;

        let features = insert_features(&mut tx, row.id, &new_user.features).await?;
        let news = insert_news(&mut tx, row.id, &new_user.news).await?;

        tx.commit().await?;

        Ok(assemble(row, features, news))
    }

    async fn update(&self, id: i64, user: NewUser) -> Result<User, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users SET
                name           = $2,
                account_number = $3,
                card_number    = $4,
                updated_at     = NOW()
            WHERE id = $1
            RETURNING id, name, account_number, card_number
            "#,
        )
        .bind(id)
        .bind(&user.name)
        .bind(&user.account_number)
        .bind(&user.card_number)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))?;

        sqlx::query("DELETE FROM features WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM news WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let features = insert_features(&mut tx, id, &user.features).await?;
        let news = insert_news(&mut tx, id, &user.news).await?;

        tx.commit().await?;

        Ok(assemble(row, features, news))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found", json!({ "id": id })));
        }

        Ok(())
    }

    async fn exists_by_account_number(
        &self,
        account_number: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM users
                WHERE account_number = $1
                  AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(account_number)
        .bind(exclude_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn exists_by_card_number(
        &self,
        card_number: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM users
                WHERE card_number = $1
                  AND ($2::BIGINT IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(card_number)
        .bind(exclude_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
