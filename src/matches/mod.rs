mod list;
mod reveal;

pub use list::{MatchEntry, MatchProfile, visible_matches};
pub use reveal::{PaymentRecord, unlock_match};

use axum::{Router, routing::get};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list::matches))
}
