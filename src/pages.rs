use axum::{Router, debug_handler, response::IntoResponse, routing::get};

use crate::{AppState, Markdown};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/privacy-policy", get(privacy_policy))
        .route("/terms-and-conditions", get(terms_and_conditions))
        .route("/contact-us", get(contact_us))
        .route("/shipping-policy", get(shipping_policy))
        .route("/cancellation-refund", get(cancellation_refund))
}

#[debug_handler]
async fn index() -> impl IntoResponse {
    Markdown(include_res!(str, "/pages/index.md"))
}

#[debug_handler]
async fn privacy_policy() -> impl IntoResponse {
    Markdown(include_res!(str, "/pages/privacy-policy.md"))
}

#[debug_handler]
async fn terms_and_conditions() -> impl IntoResponse {
    Markdown(include_res!(str, "/pages/terms-and-conditions.md"))
}

#[debug_handler]
async fn contact_us() -> impl IntoResponse {
    Markdown(include_res!(str, "/pages/contact-us.md"))
}

#[debug_handler]
async fn shipping_policy() -> impl IntoResponse {
    Markdown(include_res!(str, "/pages/shipping-policy.md"))
}

#[debug_handler]
async fn cancellation_refund() -> impl IntoResponse {
    Markdown(include_res!(str, "/pages/cancellation-refund.md"))
}
