use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::AppResult;

#[derive(Deserialize)]
pub(crate) struct UpsertProfileBody {
    user_id: String,
    name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    instagram_id: String,
    #[serde(default)]
    photo_url: String,
}

#[debug_handler]
pub(crate) async fn upsert_profile(
    State(db_pool): State<SqlitePool>,
    Json(body): Json<UpsertProfileBody>,
) -> AppResult<Json<Value>> {
    if body.user_id.is_empty() || body.name.is_empty() {
        return Err("user_id and name are required".into());
    }

    // display fields only; likes/matches/reveals/payments live in their own
    // tables, so re-submitting the form never touches them
    sqlx::query(
        "INSERT INTO profiles (user_id,name,last_name,phone,instagram_id,photo_url) \
         VALUES (?,?,?,?,?,?) \
         ON CONFLICT(user_id) DO UPDATE SET \
            name=excluded.name, \
            last_name=excluded.last_name, \
            phone=excluded.phone, \
            instagram_id=excluded.instagram_id, \
            photo_url=excluded.photo_url, \
            updated_at=datetime('now')",
    )
    .bind(&body.user_id)
    .bind(&body.name)
    .bind(&body.last_name)
    .bind(&body.phone)
    .bind(&body.instagram_id)
    .bind(&body.photo_url)
    .execute(&db_pool)
    .await?;

    Ok(Json(json!({ "success": true })))
}
