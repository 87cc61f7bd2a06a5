use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Bookmark {
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> Result<Vec<Bookmark>, sqlx::Error> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, title, description, link, created_at, updated_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Read-path lookup: scoped to the owner, absent and foreign rows are
    /// indistinguishable.
    pub async fn find_by_id_for_user(
        db: &PgPool,
        user_id: i64,
        id: i64,
    ) -> Result<Option<Bookmark>, sqlx::Error> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, title, description, link, created_at, updated_at
            FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Unscoped lookup used by the mutation paths for the ownership check.
    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Bookmark>, sqlx::Error> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, user_id, title, description, link, created_at, updated_at
            FROM bookmarks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        user_id: i64,
        title: &str,
        description: Option<&str>,
        link: &str,
    ) -> Result<Bookmark, sqlx::Error> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (user_id, title, description, link)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, description, link, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .bind(link)
        .fetch_one(db)
        .await
    }

    /// Applies the provided fields; absent fields keep their current value.
    pub async fn update(
        db: &PgPool,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        link: Option<&str>,
    ) -> Result<Bookmark, sqlx::Error> {
        sqlx::query_as::<_, Bookmark>(
            r#"
            UPDATE bookmarks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                link = COALESCE($4, link),
                updated_at = now()
            WHERE id = $1
            RETURNING id, user_id, title, description, link, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(link)
        .fetch_one(db)
        .await
    }

    pub async fn delete(db: &PgPool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
