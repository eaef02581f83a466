use axum::{
    Json, debug_handler,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::AppResult;

#[derive(Deserialize)]
pub(crate) struct CheckQuery {
    user_id: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct ProfileDetails {
    name: String,
    last_name: String,
    phone: String,
    instagram_id: String,
    photo_url: String,
    likes: Vec<String>,
    matches: Vec<String>,
    revealed: Vec<String>,
}

#[debug_handler]
pub(crate) async fn check_profile(
    Query(CheckQuery { user_id }): Query<CheckQuery>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Value>> {
    let Some(user_id) = user_id else {
        return Err("user_id is required".into());
    };

    let row: Option<(String, String, String, String, String)> = sqlx::query_as(
        "SELECT name,last_name,phone,instagram_id,photo_url FROM profiles WHERE user_id=?",
    )
    .bind(&user_id)
    .fetch_optional(&db_pool)
    .await?;

    let Some((name, last_name, phone, instagram_id, photo_url)) = row else {
        return Ok(Json(json!({ "exists": false, "profile": null })));
    };

    let likes: Vec<(String,)> = sqlx::query_as("SELECT liked_id FROM likes WHERE user_id=?")
        .bind(&user_id)
        .fetch_all(&db_pool)
        .await?;
    let matches: Vec<(String,)> =
        sqlx::query_as("SELECT matched_id FROM matches WHERE user_id=? ORDER BY id")
            .bind(&user_id)
            .fetch_all(&db_pool)
            .await?;
    let revealed: Vec<(String,)> = sqlx::query_as("SELECT match_id FROM reveals WHERE user_id=?")
        .bind(&user_id)
        .fetch_all(&db_pool)
        .await?;

    let profile = ProfileDetails {
        name,
        last_name,
        phone,
        instagram_id,
        photo_url,
        likes: likes.into_iter().map(|(id,)| id).collect(),
        matches: matches.into_iter().map(|(id,)| id).collect(),
        revealed: revealed.into_iter().map(|(id,)| id).collect(),
    };

    Ok(Json(json!({ "exists": true, "profile": profile })))
}
