use crate::framework::Validate;
use crate::model::ensure_present;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Payment session created by `POST /api/checkout`.
///
/// The client only uses `bkash_url`: the browsing context is handed off to it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    #[serde(rename = "paymentId")]
    pub payment_id: String,
    #[serde(rename = "bkashURL")]
    pub bkash_url: String,
}

impl Validate for CheckoutSession {
    fn validate(&self) -> Result<(), String> {
        ensure_present("paymentId", &self.payment_id)?;
        ensure_present("bkashURL", &self.bkash_url)?;
        Url::parse(&self.bkash_url).map_err(|e| format!("bkashURL is not an absolute URL: {e}"))?;
        Ok(())
    }
}
