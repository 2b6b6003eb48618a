use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for `/payment-sheet`. Every field is optional; the client
/// sends whatever it has about the ride being paid for.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSheetRequest {
    /// Major units, as a number or numeric string.
    pub amount: Option<Value>,
    pub currency: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub driver_id: Option<Value>,
    pub ride_time: Option<Value>,
}

/// Tokens the mobile payment sheet needs to complete the charge.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSheetResponse {
    pub payment_intent: String,
    pub ephemeral_key: String,
    pub customer: String,
}
