use axum::{
    Json, debug_handler,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::AppResult;

#[derive(Deserialize)]
pub(crate) struct ListQuery {
    viewer_id: Option<String>,
}

// browsing card: no contact fields here, those are reveal-gated
#[derive(Serialize)]
pub(crate) struct ProfileCard {
    user_id: String,
    name: String,
    last_name: String,
    photo_url: String,
}

#[debug_handler]
pub(crate) async fn list_profiles(
    Query(ListQuery { viewer_id }): Query<ListQuery>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Value>> {
    let Some(viewer_id) = viewer_id else {
        return Err("viewer_id is required".into());
    };

    let rows: Vec<(String, String, String, String)> = sqlx::query_as(
        "SELECT user_id,name,last_name,photo_url FROM profiles WHERE user_id != ?",
    )
    .bind(&viewer_id)
    .fetch_all(&db_pool)
    .await?;

    let users: Vec<ProfileCard> = rows
        .into_iter()
        .map(|(user_id, name, last_name, photo_url)| ProfileCard {
            user_id,
            name,
            last_name,
            photo_url,
        })
        .collect();

    Ok(Json(json!({ "users": users })))
}
