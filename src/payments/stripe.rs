use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use super::gateway::{
    Customer, EphemeralKey, NewCustomer, NewPaymentIntent, PaymentGateway, PaymentIntent,
};
use crate::config::StripeConfig;

type Form = Vec<(String, String)>;

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Stripe REST client. Requests are form encoded and authenticated with the
/// secret key.
pub struct StripeClient {
    http: Client,
    config: StripeConfig,
}

impl StripeClient {
    pub fn new(config: StripeConfig, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("build stripe http client")?;
        Ok(Self { http, config })
    }

    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &Form,
        api_version: &str,
    ) -> anyhow::Result<T> {
        let url = format!("{}/v1/{}", self.config.api_base.trim_end_matches('/'), path);
        let res = self
            .http
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .header("Stripe-Version", api_version)
            .form(form)
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;

        let status = res.status();
        if !status.is_success() {
            let message = res
                .json::<ErrorEnvelope>()
                .await
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| "no error message".into());
            anyhow::bail!("stripe {path} returned {status}: {message}");
        }

        debug!(%path, %status, "stripe call ok");
        res.json::<T>()
            .await
            .with_context(|| format!("decode stripe {path} response"))
    }
}

#[async_trait]
impl PaymentGateway for StripeClient {
    async fn create_customer(&self, customer: &NewCustomer) -> anyhow::Result<Customer> {
        self.post_form("customers", &customer_form(customer), &self.config.api_version)
            .await
    }

    async fn create_ephemeral_key(&self, customer_id: &str) -> anyhow::Result<EphemeralKey> {
        let form = vec![("customer".to_string(), customer_id.to_string())];
        self.post_form("ephemeral_keys", &form, &self.config.ephemeral_key_version)
            .await
    }

    async fn create_payment_intent(
        &self,
        intent: &NewPaymentIntent,
    ) -> anyhow::Result<PaymentIntent> {
        self.post_form(
            "payment_intents",
            &payment_intent_form(intent),
            &self.config.api_version,
        )
        .await
    }
}

fn customer_form(customer: &NewCustomer) -> Form {
    let mut form = Form::new();
    if let Some(name) = &customer.name {
        form.push(("name".into(), name.clone()));
    }
    if let Some(email) = &customer.email {
        form.push(("email".into(), email.clone()));
    }
    push_metadata(&mut form, &customer.metadata);
    form
}

fn payment_intent_form(intent: &NewPaymentIntent) -> Form {
    let mut form = vec![
        ("amount".to_string(), intent.amount.to_string()),
        ("currency".to_string(), intent.currency.clone()),
        ("customer".to_string(), intent.customer.clone()),
        ("automatic_payment_methods[enabled]".to_string(), "true".to_string()),
    ];
    push_metadata(&mut form, &intent.metadata);
    form
}

fn push_metadata<'a>(form: &mut Form, metadata: impl IntoIterator<Item = (&'a String, &'a String)>) {
    form.extend(
        metadata
            .into_iter()
            .map(|(k, v)| (format!("metadata[{k}]"), v.clone())),
    );
}
