use sqlx::SqlitePool;

use crate::{AppError, AppResult};

pub struct PaymentRecord {
    pub payment_ref: String,
    pub order_ref: String,
    // smallest currency unit
    pub amount: i64,
}

// Called only after the payment proof has been verified. Rejects ids that are
// not matches of the viewer before touching anything, however valid the
// payment was, then records the reveal and the audit row in one transaction.
// A replayed payment_ref re-acknowledges without duplicating the audit row.
pub async fn unlock_match(
    db_pool: &SqlitePool,
    viewer_id: &str,
    match_id: &str,
    payment: PaymentRecord,
) -> AppResult<()> {
    let owned =
        sqlx::query_as::<_, (i64,)>("SELECT 1 FROM matches WHERE user_id=? AND matched_id=?")
            .bind(viewer_id)
            .bind(match_id)
            .fetch_optional(db_pool)
            .await?
            .is_some();
    if !owned {
        return Err(AppError::PaymentRejected(format!(
            "{match_id} is not a match of {viewer_id}"
        )));
    }

    let mut tx = db_pool.begin().await?;

    let recorded = sqlx::query(
        "INSERT OR IGNORE INTO payments (payment_ref,order_ref,user_id,match_id,amount) \
         VALUES (?,?,?,?,?)",
    )
    .bind(&payment.payment_ref)
    .bind(&payment.order_ref)
    .bind(viewer_id)
    .bind(match_id)
    .bind(payment.amount)
    .execute(&mut *tx)
    .await?;
    if recorded.rows_affected() == 0 {
        tracing::info!(
            payment_ref = %payment.payment_ref,
            "replayed payment reference, audit row already present"
        );
    }

    sqlx::query("INSERT OR IGNORE INTO reveals (user_id,match_id) VALUES (?,?)")
        .bind(viewer_id)
        .bind(match_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("UPDATE profiles SET updated_at=datetime('now') WHERE user_id=?")
        .bind(viewer_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}
