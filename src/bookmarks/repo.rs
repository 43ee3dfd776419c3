use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::bookmarks::dto::{CreateBookmarkRequest, EditBookmarkRequest};

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

const BOOKMARK_COLUMNS: &str = "id, user_id, title, description, link, created_at, updated_at";

pub async fn list_by_user(db: &PgPool, user_id: i64) -> anyhow::Result<Vec<Bookmark>> {
    let rows = sqlx::query_as::<_, Bookmark>(&format!(
        r#"
        SELECT {BOOKMARK_COLUMNS}
        FROM bookmarks
        WHERE user_id = $1
        ORDER BY id
        "#
    ))
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn find_owned(
    db: &PgPool,
    user_id: i64,
    bookmark_id: i64,
) -> anyhow::Result<Option<Bookmark>> {
    let row = sqlx::query_as::<_, Bookmark>(&format!(
        r#"
        SELECT {BOOKMARK_COLUMNS}
        FROM bookmarks
        WHERE id = $1 AND user_id = $2
        "#
    ))
    .bind(bookmark_id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn insert(
    db: &PgPool,
    user_id: i64,
    body: &CreateBookmarkRequest,
) -> anyhow::Result<Bookmark> {
    let row = sqlx::query_as::<_, Bookmark>(&format!(
        r#"
        INSERT INTO bookmarks (user_id, title, description, link)
        VALUES ($1, $2, $3, $4)
        RETURNING {BOOKMARK_COLUMNS}
        "#
    ))
    .bind(user_id)
    .bind(&body.title)
    .bind(body.description.as_deref())
    .bind(&body.link)
    .fetch_one(db)
    .await?;
    Ok(row)
}

/// Conditional update: the ownership check lives in the WHERE clause, so
/// there is no load-then-mutate gap. `None` means the row is missing or
/// owned by someone else.
pub async fn update_owned(
    db: &PgPool,
    user_id: i64,
    bookmark_id: i64,
    patch: &EditBookmarkRequest,
) -> anyhow::Result<Option<Bookmark>> {
    let row = sqlx::query_as::<_, Bookmark>(&format!(
        r#"
        UPDATE bookmarks SET
            title = COALESCE($3, title),
            description = COALESCE($4, description),
            link = COALESCE($5, link),
            updated_at = now()
        WHERE id = $1 AND user_id = $2
        RETURNING {BOOKMARK_COLUMNS}
        "#
    ))
    .bind(bookmark_id)
    .bind(user_id)
    .bind(patch.title.as_deref())
    .bind(patch.description.as_deref())
    .bind(patch.link.as_deref())
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Conditional delete with the same ownership predicate; returns whether a
/// row was actually removed.
pub async fn delete_owned(db: &PgPool, user_id: i64, bookmark_id: i64) -> anyhow::Result<bool> {
    let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1 AND user_id = $2")
        .bind(bookmark_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
