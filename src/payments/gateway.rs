use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;

/// Customer to register with the payment processor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

/// Charge attempt to open for a customer. `amount` is in minor units.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentIntent {
    pub amount: i64,
    pub currency: String,
    pub customer: String,
    pub metadata: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EphemeralKey {
    pub secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_customer(&self, customer: &NewCustomer) -> anyhow::Result<Customer>;
    async fn create_ephemeral_key(&self, customer_id: &str) -> anyhow::Result<EphemeralKey>;
    async fn create_payment_intent(
        &self,
        intent: &NewPaymentIntent,
    ) -> anyhow::Result<PaymentIntent>;
}
