use sqlx::PgPool;
use tracing::{info, warn};

use crate::bookmarks::dto::{CreateBookmarkRequest, EditBookmarkRequest};
use crate::bookmarks::repo::{self, Bookmark};
use crate::error::ApiError;

/// All bookmarks owned by `user_id`, in insertion order.
pub async fn list(db: &PgPool, user_id: i64) -> Result<Vec<Bookmark>, ApiError> {
    Ok(repo::list_by_user(db, user_id).await?)
}

/// Read path: a missing bookmark and one owned by someone else are
/// indistinguishable to the caller.
pub async fn get_by_id(
    db: &PgPool,
    user_id: i64,
    bookmark_id: i64,
) -> Result<Option<Bookmark>, ApiError> {
    Ok(repo::find_owned(db, user_id, bookmark_id).await?)
}

/// The owner is always the authenticated requester; the payload carries no
/// owner field at all.
pub async fn create(
    db: &PgPool,
    user_id: i64,
    body: &CreateBookmarkRequest,
) -> Result<Bookmark, ApiError> {
    let bookmark = repo::insert(db, user_id, body).await?;
    info!(user_id, bookmark_id = bookmark.id, "bookmark created");
    Ok(bookmark)
}

/// Write path: missing-or-not-owned fails with an explicit Forbidden,
/// unlike the silent empty result on reads.
pub async fn edit_by_id(
    db: &PgPool,
    user_id: i64,
    bookmark_id: i64,
    patch: &EditBookmarkRequest,
) -> Result<Bookmark, ApiError> {
    match repo::update_owned(db, user_id, bookmark_id, patch).await? {
        Some(bookmark) => Ok(bookmark),
        None => {
            warn!(user_id, bookmark_id, "edit denied");
            Err(ApiError::Forbidden)
        }
    }
}

pub async fn delete_by_id(db: &PgPool, user_id: i64, bookmark_id: i64) -> Result<(), ApiError> {
    if !repo::delete_owned(db, user_id, bookmark_id).await? {
        warn!(user_id, bookmark_id, "delete denied");
        return Err(ApiError::Forbidden);
    }
    info!(user_id, bookmark_id, "bookmark deleted");
    Ok(())
}

#[cfg(test)]
mod db_tests {
    use super::*;
    use crate::auth::services::signup;

    async fn two_users(pool: &PgPool) -> (i64, i64) {
        let owner = signup(pool, "owner@test.com", "test12345678")
            .await
            .expect("owner signup")
            .id;
        let intruder = signup(pool, "intruder@test.com", "test12345678")
            .await
            .expect("intruder signup")
            .id;
        (owner, intruder)
    }

    fn sample() -> CreateBookmarkRequest {
        CreateBookmarkRequest {
            title: "Bookmark title".into(),
            description: None,
            link: "Bookmarklink.com".into(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn created_bookmark_is_owned_by_the_creator(pool: PgPool) {
        let (owner, _) = two_users(&pool).await;
        let bookmark = create(&pool, owner, &sample()).await.expect("create");
        assert_eq!(bookmark.user_id, owner);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn cross_user_get_is_not_found(pool: PgPool) {
        let (owner, intruder) = two_users(&pool).await;
        let bookmark = create(&pool, owner, &sample()).await.expect("create");

        let stolen = get_by_id(&pool, intruder, bookmark.id).await.expect("get");
        assert!(stolen.is_none());
        let own = get_by_id(&pool, owner, bookmark.id).await.expect("get");
        assert!(own.is_some());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn cross_user_edit_is_forbidden_and_leaves_row_unchanged(pool: PgPool) {
        let (owner, intruder) = two_users(&pool).await;
        let bookmark = create(&pool, owner, &sample()).await.expect("create");

        let patch = EditBookmarkRequest {
            description: Some("hijacked".into()),
            ..Default::default()
        };
        let err = edit_by_id(&pool, intruder, bookmark.id, &patch)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));

        let unchanged = get_by_id(&pool, owner, bookmark.id)
            .await
            .expect("get")
            .expect("row still present");
        assert_eq!(unchanged.title, "Bookmark title");
        assert!(unchanged.description.is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn cross_user_delete_is_forbidden_and_keeps_the_row(pool: PgPool) {
        let (owner, intruder) = two_users(&pool).await;
        let bookmark = create(&pool, owner, &sample()).await.expect("create");

        let err = delete_by_id(&pool, intruder, bookmark.id).await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));

        let still_there = get_by_id(&pool, owner, bookmark.id).await.expect("get");
        assert!(still_there.is_some());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn delete_removes_exactly_the_deleted_id(pool: PgPool) {
        let (owner, _) = two_users(&pool).await;
        let first = create(&pool, owner, &sample()).await.expect("create");
        let second = create(&pool, owner, &sample()).await.expect("create");

        delete_by_id(&pool, owner, first.id).await.expect("delete");

        let remaining = list(&pool, owner).await.expect("list");
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|b| b.id != first.id));
        assert_eq!(remaining[0].id, second.id);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn edit_applies_only_supplied_fields(pool: PgPool) {
        let (owner, _) = two_users(&pool).await;
        let bookmark = create(&pool, owner, &sample()).await.expect("create");

        let patch = EditBookmarkRequest {
            description: Some("Bueno bueno bueno".into()),
            ..Default::default()
        };
        let updated = edit_by_id(&pool, owner, bookmark.id, &patch)
            .await
            .expect("edit");
        assert_eq!(updated.description.as_deref(), Some("Bueno bueno bueno"));
        assert_eq!(updated.title, "Bookmark title");
        assert_eq!(updated.link, "Bookmarklink.com");
    }
}
