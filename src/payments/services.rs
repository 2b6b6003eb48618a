use std::collections::BTreeMap;

use serde_json::Value;
use tracing::warn;

use super::dto::PaymentSheetRequest;
use super::gateway::{NewCustomer, NewPaymentIntent};

/// Charged when the client sends no usable amount (9.99 in major units).
pub const FALLBACK_AMOUNT_MINOR: i64 = 999;

/// Converts the client's major-unit amount into minor units.
///
/// Missing, unparsable, non-finite and non-positive amounts all fall back to
/// [`FALLBACK_AMOUNT_MINOR`].
pub fn resolve_amount_minor(amount: Option<&Value>) -> i64 {
    let major = match amount {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let minor = major
        .filter(|m| m.is_finite() && *m > 0.0)
        .map(|m| (m * 100.0).round())
        .filter(|minor| *minor >= 1.0 && *minor < i64::MAX as f64);

    match (minor, amount) {
        (Some(minor), _) => minor as i64,
        (None, None | Some(Value::Null)) => FALLBACK_AMOUNT_MINOR,
        (None, Some(raw)) => {
            warn!(amount = %raw, fallback = FALLBACK_AMOUNT_MINOR, "unusable amount, charging fallback");
            FALLBACK_AMOUNT_MINOR
        }
    }
}

fn metadata_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn ride_metadata(req: &PaymentSheetRequest) -> BTreeMap<String, String> {
    [
        ("driverId", metadata_value(req.driver_id.as_ref())),
        ("rideTime", metadata_value(req.ride_time.as_ref())),
    ]
    .into_iter()
    .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
    .collect()
}

pub fn new_customer(req: &PaymentSheetRequest) -> NewCustomer {
    NewCustomer {
        name: req.full_name.clone(),
        email: req.email.clone(),
        metadata: ride_metadata(req),
    }
}

pub fn new_payment_intent(
    req: &PaymentSheetRequest,
    customer_id: &str,
    default_currency: &str,
) -> NewPaymentIntent {
    let currency = req
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(default_currency)
        .to_lowercase();

    NewPaymentIntent {
        amount: resolve_amount_minor(req.amount.as_ref()),
        currency,
        customer: customer_id.to_string(),
        metadata: ride_metadata(req),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn amount_falls_back_to_999() {
        assert_eq!(resolve_amount_minor(None), 999);
        assert_eq!(resolve_amount_minor(Some(&json!(null))), 999);
        assert_eq!(resolve_amount_minor(Some(&json!(0))), 999);
        assert_eq!(resolve_amount_minor(Some(&json!(-5))), 999);
        assert_eq!(resolve_amount_minor(Some(&json!("abc"))), 999);
        assert_eq!(resolve_amount_minor(Some(&json!(""))), 999);
        assert_eq!(resolve_amount_minor(Some(&json!(true))), 999);
    }

    #[test]
    fn amount_is_rounded_to_minor_units() {
        assert_eq!(resolve_amount_minor(Some(&json!(12.5))), 1250);
        assert_eq!(resolve_amount_minor(Some(&json!("19.99"))), 1999);
        assert_eq!(resolve_amount_minor(Some(&json!(" 3 "))), 300);
        assert_eq!(resolve_amount_minor(Some(&json!(0.01))), 1);
    }

    #[test]
    fn out_of_range_amounts_fall_back() {
        assert_eq!(resolve_amount_minor(Some(&json!(1e17))), 999);
        assert_eq!(resolve_amount_minor(Some(&json!("1e300"))), 999);
        assert_eq!(resolve_amount_minor(Some(&json!(0.001))), 999);
        assert_eq!(resolve_amount_minor(Some(&json!("NaN"))), 999);
        assert_eq!(resolve_amount_minor(Some(&json!(1e15))), 100_000_000_000_000_000);
    }

    #[test]
    fn currency_defaults_and_metadata_is_stringified() {
        let req = PaymentSheetRequest {
            driver_id: Some(json!(7)),
            ride_time: Some(json!("2024-05-01T10:00:00Z")),
            ..Default::default()
        };
        let intent = new_payment_intent(&req, "cus_1", "usd");
        assert_eq!(intent.amount, 999);
        assert_eq!(intent.currency, "usd");
        assert_eq!(intent.customer, "cus_1");
        assert_eq!(intent.metadata["driverId"], "7");
        assert_eq!(intent.metadata["rideTime"], "2024-05-01T10:00:00Z");
    }

    #[test]
    fn absent_metadata_is_omitted() {
        let req = PaymentSheetRequest {
            full_name: Some("Ada".into()),
            currency: Some("EUR".into()),
            ..Default::default()
        };
        let customer = new_customer(&req);
        assert_eq!(customer.name.as_deref(), Some("Ada"));
        assert!(customer.metadata.is_empty());
        assert_eq!(new_payment_intent(&req, "cus_1", "usd").currency, "eur");
    }
}
