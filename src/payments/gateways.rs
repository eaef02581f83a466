use crate::{AppError, AppResult};

#[derive(Clone)]
pub struct RazorpayKeys {
    pub key_id: String,
    pub key_secret: String,
}

#[derive(Clone)]
pub struct PhonepeKeys {
    pub salt_key: String,
    pub salt_index: String,
}

#[derive(Clone)]
pub struct Gateways {
    pub razorpay: Option<RazorpayKeys>,
    pub phonepe: Option<PhonepeKeys>,
}

impl Gateways {
    // either gateway may run without keys; the operations that need them
    // fail when attempted, not at startup
    pub fn from_env() -> Gateways {
        let razorpay = match (
            dotenv::var("RAZORPAY_KEY_ID"),
            dotenv::var("RAZORPAY_KEY_SECRET"),
        ) {
            (Ok(key_id), Ok(key_secret)) => Some(RazorpayKeys { key_id, key_secret }),
            _ => None,
        };
        let phonepe = match (
            dotenv::var("PHONEPE_SALT_KEY"),
            dotenv::var("PHONEPE_SALT_INDEX"),
        ) {
            (Ok(salt_key), Ok(salt_index)) => Some(PhonepeKeys {
                salt_key,
                salt_index,
            }),
            _ => None,
        };

        Gateways { razorpay, phonepe }
    }

    pub fn razorpay(&self) -> AppResult<&RazorpayKeys> {
        self.razorpay
            .as_ref()
            .ok_or(AppError::Misconfigured("razorpay"))
    }

    pub fn phonepe(&self) -> AppResult<&PhonepeKeys> {
        self.phonepe
            .as_ref()
            .ok_or(AppError::Misconfigured("phonepe"))
    }
}
