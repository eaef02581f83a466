use axum::{
    Json, debug_handler,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::AppResult;

#[derive(Deserialize)]
pub(crate) struct MatchesQuery {
    viewer_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchProfile {
    pub user_id: String,
    pub name: String,
    pub last_name: String,
    pub photo_url: String,
    pub phone: String,
    pub instagram_id: String,
}

// Locked entries carry just enough to start a checkout: the id and nothing else.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchEntry {
    Visible { profile: MatchProfile },
    Locked { match_id: String },
}

#[debug_handler]
pub(crate) async fn matches(
    Query(MatchesQuery { viewer_id }): Query<MatchesQuery>,
    State(db_pool): State<SqlitePool>,
) -> AppResult<Json<Value>> {
    let Some(viewer_id) = viewer_id else {
        return Err("viewer_id is required".into());
    };

    let entries = visible_matches(&db_pool, &viewer_id).await?;

    Ok(Json(json!({ "matches": entries })))
}

// The viewer's matches in the order they happened. The first match is always
// visible whether or not it was ever paid for; the rest only once revealed.
pub async fn visible_matches(db_pool: &SqlitePool, viewer_id: &str) -> AppResult<Vec<MatchEntry>> {
    let match_ids: Vec<(String,)> =
        sqlx::query_as("SELECT matched_id FROM matches WHERE user_id=? ORDER BY id")
            .bind(viewer_id)
            .fetch_all(db_pool)
            .await?;

    let mut entries = Vec::with_capacity(match_ids.len());
    for (position, (match_id,)) in match_ids.into_iter().enumerate() {
        let revealed = position == 0
            || sqlx::query_as::<_, (i64,)>("SELECT 1 FROM reveals WHERE user_id=? AND match_id=?")
                .bind(viewer_id)
                .bind(&match_id)
                .fetch_optional(db_pool)
                .await?
                .is_some();

        if !revealed {
            entries.push(MatchEntry::Locked { match_id });
            continue;
        }

        let profile: Option<(String, String, String, String, String)> = sqlx::query_as(
            "SELECT name,last_name,photo_url,phone,instagram_id FROM profiles WHERE user_id=?",
        )
        .bind(&match_id)
        .fetch_optional(db_pool)
        .await?;

        let Some((name, last_name, photo_url, phone, instagram_id)) = profile else {
            // matched id whose profile row is gone; keep the slot so the
            // ordering stays stable
            entries.push(MatchEntry::Locked { match_id });
            continue;
        };

        entries.push(MatchEntry::Visible {
            profile: MatchProfile {
                user_id: match_id,
                name,
                last_name,
                photo_url,
                phone,
                instagram_id,
            },
        });
    }

    Ok(entries)
}
