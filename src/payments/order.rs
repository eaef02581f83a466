use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{AppError, AppResult, AppState};

use super::Gateways;

#[derive(Deserialize)]
pub(crate) struct CreateOrderBody {
    amount: i64,
    currency: String,
    viewer_id: String,
    match_id: String,
}

#[derive(Deserialize)]
struct RazorpayOrder {
    id: String,
    amount: i64,
    currency: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn create_order(
    State(db_pool): State<SqlitePool>,
    State(gateways): State<Gateways>,
    Json(body): Json<CreateOrderBody>,
) -> AppResult<Json<Value>> {
    if body.viewer_id.is_empty() || body.match_id.is_empty() {
        return Err("viewer_id and match_id are required".into());
    }
    if body.amount <= 0 || body.currency.is_empty() {
        return Err("amount and currency are required".into());
    }

    // don't take money for an unlock that can never apply
    let owned =
        sqlx::query_as::<_, (i64,)>("SELECT 1 FROM matches WHERE user_id=? AND matched_id=?")
            .bind(&body.viewer_id)
            .bind(&body.match_id)
            .fetch_optional(&db_pool)
            .await?
            .is_some();
    if !owned {
        return Err(AppError::PaymentRejected(format!(
            "{} is not a match of {}",
            body.match_id, body.viewer_id
        )));
    }

    let keys = gateways.razorpay()?;
    let receipt = "rcpt".to_owned() + &Uuid::now_v7().simple().to_string();

    let http_client = reqwest::Client::new();
    let order: RazorpayOrder = http_client
        .post("https://api.razorpay.com/v1/orders")
        .basic_auth(&keys.key_id, Some(&keys.key_secret))
        .json(&json!({
            // the gateway counts in the smallest currency unit
            "amount": body.amount * 100,
            "currency": body.currency.to_uppercase(),
            "receipt": receipt,
            "notes": { "viewer_id": &body.viewer_id, "match_id": &body.match_id },
        }))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    tracing::debug!(order_id = %order.id, viewer_id = %body.viewer_id, "created checkout order");

    Ok(Json(json!({
        "order_id": order.id,
        "amount": order.amount,
        "currency": order.currency,
        "key": keys.key_id,
    })))
}
