mod record;

pub use record::record_like;

use axum::{Router, routing::post};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(record::like))
}
