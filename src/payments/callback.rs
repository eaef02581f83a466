use axum::{Json, debug_handler, extract::State, http::HeaderMap};
use base64::Engine;
use serde::Deserialize;
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::{
    AppError, AppResult, AppState, GetField,
    matches::{PaymentRecord, unlock_match},
};

use super::{Gateways, signature};

#[derive(Deserialize)]
pub(crate) struct CallbackBody {
    response: String,
}

// The gateway expects an acknowledgement whatever the business outcome, so
// rejections come back as 200 {success:false}. Only a store failure keeps its
// 500: the gateway retries, and a replayed payment_ref is a safe no-op.
#[debug_handler(state = AppState)]
pub(crate) async fn gateway_callback(
    State(db_pool): State<SqlitePool>,
    State(gateways): State<Gateways>,
    headers: HeaderMap,
    Json(CallbackBody { response }): Json<CallbackBody>,
) -> AppResult<Json<Value>> {
    match process_callback(&db_pool, &gateways, &headers, &response).await {
        Ok(()) => Ok(Json(json!({ "success": true }))),
        Err(err @ (AppError::Store(_) | AppError::Misconfigured(_))) => Err(err),
        Err(err) => {
            tracing::warn!(error = %err, "rejected gateway callback");
            Ok(Json(json!({ "success": false })))
        }
    }
}

async fn process_callback(
    db_pool: &SqlitePool,
    gateways: &Gateways,
    headers: &HeaderMap,
    response: &str,
) -> AppResult<()> {
    let keys = gateways.phonepe()?;

    let header = headers
        .get("x-verify")
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::PaymentRejected(
            "missing x-verify header".to_owned(),
        ))?;
    if !signature::verify_callback_signature(response, header, &keys.salt_key, &keys.salt_index) {
        return Err(AppError::PaymentRejected(
            "callback signature mismatch".to_owned(),
        ));
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(response)
        .map_err(|_| AppError::PaymentRejected("callback payload is not base64".to_owned()))?;
    let payload: Value = serde_json::from_slice(&decoded)
        .map_err(|_| AppError::PaymentRejected("callback payload is not json".to_owned()))?;

    let code = payload.get_str_field("code")?;
    if code != "PAYMENT_SUCCESS" {
        return Err(AppError::PaymentRejected(format!(
            "payment not successful: {code}"
        )));
    }

    let data = payload.get_obj_field("data")?;
    let order_ref = data.get_str_field("merchantTransactionId")?;
    let payment_ref = data.get_str_field("transactionId")?;
    let amount = data
        .get_obj_field("amount")?
        .as_i64()
        .ok_or(AppError::PaymentRejected(
            "amount missing from callback".to_owned(),
        ))?;

    let Some((viewer_id, match_id)) = signature::parse_reveal_reference(&order_ref) else {
        return Err(AppError::PaymentRejected(format!(
            "unrecognized transaction id {order_ref}"
        )));
    };

    let payment = PaymentRecord {
        payment_ref: payment_ref.clone(),
        order_ref,
        amount,
    };
    if let Err(err) = unlock_match(db_pool, &viewer_id, &match_id, payment).await {
        if matches!(err, AppError::Store(_)) {
            tracing::error!(
                target: "billing",
                error = %err,
                %viewer_id,
                %match_id,
                payment_ref = %payment_ref,
                "verified callback but the reveal write failed"
            );
        }
        return Err(err);
    }

    Ok(())
}
