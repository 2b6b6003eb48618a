use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::payments::{
    dto::{PaymentSheetRequest, PaymentSheetResponse},
    services::{new_customer, new_payment_intent},
};
use crate::{error::AppError, state::AppState};

const PAYMENT_FAILED: &str = "Payment initialization failed";

pub fn payment_routes() -> Router<AppState> {
    Router::new().route("/payment-sheet", post(create_payment_sheet))
}

/// Creates customer, ephemeral key and payment intent, in that order.
/// A customer created before a later failure is left in place.
#[instrument(skip(state, payload))]
pub async fn create_payment_sheet(
    State(state): State<AppState>,
    payload: Result<Json<PaymentSheetRequest>, JsonRejection>,
) -> Result<Json<PaymentSheetResponse>, AppError> {
    let Json(req) = payload?;
    let Some(gateway) = state.payments.as_ref() else {
        return Err(AppError::internal(PAYMENT_FAILED)(anyhow::anyhow!(
            "payments not configured"
        )));
    };

    let customer = gateway
        .create_customer(&new_customer(&req))
        .await
        .map_err(AppError::internal(PAYMENT_FAILED))?;

    let ephemeral_key = gateway
        .create_ephemeral_key(&customer.id)
        .await
        .map_err(AppError::internal(PAYMENT_FAILED))?;

    let intent = new_payment_intent(&req, &customer.id, &state.config.default_currency);
    let payment_intent = gateway
        .create_payment_intent(&intent)
        .await
        .map_err(AppError::internal(PAYMENT_FAILED))?;

    info!(
        customer = %customer.id,
        payment_intent = %payment_intent.id,
        amount = intent.amount,
        currency = %intent.currency,
        "payment sheet initialized"
    );
    Ok(Json(PaymentSheetResponse {
        payment_intent: payment_intent.client_secret,
        ephemeral_key: ephemeral_key.secret,
        customer: customer.id,
    }))
}
