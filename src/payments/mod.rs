mod callback;
mod gateways;
mod order;
pub mod signature;
mod verify;

pub use gateways::{Gateways, PhonepeKeys, RazorpayKeys};

use axum::{Router, routing::post};

use crate::AppState;

// price of one contact reveal, in the smallest currency unit (paise)
pub(crate) const REVEAL_PRICE_PAISE: i64 = 29_00;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/order", post(order::create_order))
        .route("/verify", post(verify::verify_checkout))
        .route("/callback", post(callback::gateway_callback))
}
