mod check;
mod list;
mod upsert;

use axum::{Router, routing::get};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_profiles).post(upsert::upsert_profile))
        .route("/check", get(check::check_profile))
}
