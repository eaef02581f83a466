use axum::{Json, debug_handler, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::{
    AppError, AppResult, AppState,
    matches::{PaymentRecord, unlock_match},
};

use super::{Gateways, REVEAL_PRICE_PAISE, signature};

#[derive(Deserialize)]
pub(crate) struct VerifyBody {
    order_id: String,
    payment_id: String,
    signature: String,
    viewer_id: String,
    match_id: String,
}

#[debug_handler(state = AppState)]
pub(crate) async fn verify_checkout(
    State(db_pool): State<SqlitePool>,
    State(gateways): State<Gateways>,
    Json(body): Json<VerifyBody>,
) -> AppResult<Json<Value>> {
    if body.order_id.is_empty()
        || body.payment_id.is_empty()
        || body.signature.is_empty()
        || body.viewer_id.is_empty()
        || body.match_id.is_empty()
    {
        return Err("missing required payment details".into());
    }

    let keys = gateways.razorpay()?;
    if !signature::verify_checkout_signature(
        &body.order_id,
        &body.payment_id,
        &body.signature,
        &keys.key_secret,
    ) {
        return Err(AppError::PaymentRejected(
            "payment signature mismatch".to_owned(),
        ));
    }

    let payment = PaymentRecord {
        payment_ref: body.payment_id.clone(),
        order_ref: body.order_id.clone(),
        amount: REVEAL_PRICE_PAISE,
    };
    if let Err(err) = unlock_match(&db_pool, &body.viewer_id, &body.match_id, payment).await {
        if matches!(err, AppError::Store(_)) {
            // money has been captured but the reveal was not recorded
            tracing::error!(
                target: "billing",
                error = %err,
                viewer_id = %body.viewer_id,
                match_id = %body.match_id,
                payment_ref = %body.payment_id,
                "verified payment but the reveal write failed"
            );
        }
        return Err(err);
    }

    Ok(Json(json!({ "success": true })))
}
