use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

// Flow A: the checkout client hands back {order_id, payment_id, signature}
// where signature = hex(HMAC-SHA256(secret, "order_id|payment_id")).
pub fn verify_checkout_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> bool {
    let Ok(sig) = hex::decode(signature) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(format!("{order_id}|{payment_id}").as_bytes());

    // constant-time comparison
    mac.verify_slice(&sig).is_ok()
}

// Flow B: the gateway posts a base64 payload and signs it in the x-verify
// header as hex(sha256(payload + salt_key)) + "###" + salt_index.
pub fn verify_callback_signature(
    base64_payload: &str,
    header: &str,
    salt_key: &str,
    salt_index: &str,
) -> bool {
    let mut hasher = Sha256::new();
    hasher.update(base64_payload.as_bytes());
    hasher.update(salt_key.as_bytes());
    let expected = format!("{}###{salt_index}", hex::encode(hasher.finalize()));

    eq_ct(expected.as_bytes(), header.as_bytes())
}

const REVEAL_PREFIX: &str = "REVEAL";

// Merchant transaction ids embed who paid for what. '|' as the delimiter
// because identity-provider ids routinely contain '_'.
pub fn reveal_reference(viewer_id: &str, match_id: &str) -> String {
    format!("{REVEAL_PREFIX}|{viewer_id}|{match_id}")
}

pub fn parse_reveal_reference(tx_id: &str) -> Option<(String, String)> {
    let mut parts = tx_id.splitn(3, '|');
    if parts.next()? != REVEAL_PREFIX {
        return None;
    }
    let viewer_id = parts.next()?;
    let match_id = parts.next()?;
    if viewer_id.is_empty() || match_id.is_empty() {
        return None;
    }

    Some((viewer_id.to_owned(), match_id.to_owned()))
}

fn eq_ct(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
