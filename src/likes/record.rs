use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::AppResult;

#[derive(Deserialize)]
pub(crate) struct LikeBody {
    liker_id: String,
    liked_id: String,
}

#[debug_handler]
pub(crate) async fn like(
    State(db_pool): State<SqlitePool>,
    Json(LikeBody { liker_id, liked_id }): Json<LikeBody>,
) -> AppResult<Json<Value>> {
    if liker_id.is_empty() || liked_id.is_empty() {
        return Err("liker_id and liked_id are required".into());
    }
    if liker_id == liked_id {
        return Err("cannot like yourself".into());
    }

    let is_match = record_like(&db_pool, &liker_id, &liked_id).await?;

    Ok(Json(json!({ "success": true, "is_match": is_match })))
}

// Records the like and reports whether a mutual match exists afterwards.
// Safe to call repeatedly for the same pair: the like and both match rows go
// in with OR IGNORE, and a pair that already matched keeps reporting true.
pub async fn record_like(db_pool: &SqlitePool, liker_id: &str, liked_id: &str) -> AppResult<bool> {
    let mut tx = db_pool.begin().await?;

    sqlx::query("INSERT OR IGNORE INTO likes (user_id,liked_id) VALUES (?,?)")
        .bind(liker_id)
        .bind(liked_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE profiles SET updated_at=datetime('now') WHERE user_id=?")
        .bind(liker_id)
        .execute(&mut *tx)
        .await?;

    let reciprocal = sqlx::query_as::<_, (i64,)>("SELECT 1 FROM likes WHERE user_id=? AND liked_id=?")
        .bind(liked_id)
        .bind(liker_id)
        .fetch_optional(&mut *tx)
        .await?
        .is_some();

    if reciprocal {
        // both match rows commit or roll back together
        sqlx::query("INSERT OR IGNORE INTO matches (user_id,matched_id) VALUES (?,?)")
            .bind(liker_id)
            .bind(liked_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("INSERT OR IGNORE INTO matches (user_id,matched_id) VALUES (?,?)")
            .bind(liked_id)
            .bind(liker_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE profiles SET updated_at=datetime('now') WHERE user_id IN (?,?)")
            .bind(liker_id)
            .bind(liked_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    Ok(reciprocal)
}
