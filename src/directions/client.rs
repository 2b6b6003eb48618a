use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::de::IgnoredAny;
use tracing::{debug, warn};

use crate::config::MapsConfig;

/// Source of driving directions between two points.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Returns the provider's JSON body byte for byte.
    async fn directions(&self, origin: &str, destination: &str) -> anyhow::Result<Bytes>;
}

pub struct OlaMapsClient {
    http: Client,
    config: MapsConfig,
}

impl OlaMapsClient {
    pub fn new(config: MapsConfig, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("build maps http client")?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl DirectionsProvider for OlaMapsClient {
    async fn directions(&self, origin: &str, destination: &str) -> anyhow::Result<Bytes> {
        let url = format!(
            "{}/routing/v1/directions",
            self.config.api_base.trim_end_matches('/')
        );
        let res = self
            .http
            .post(&url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("alternatives", "false"),
                ("steps", "false"),
                ("overview", "full"),
                ("traffic_metadata", "false"),
                ("api_key", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;

        let status = res.status();
        if status.is_success() {
            debug!(%status, "directions fetched");
        } else {
            // Relayed anyway; the body carries the provider's error details.
            warn!(%status, "directions provider returned an error status");
        }

        let body = res.bytes().await.context("read directions response")?;
        serde_json::from_slice::<IgnoredAny>(&body).context("directions response is not JSON")?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        extract::Query,
        http::{header, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;

    async fn fake_ola(
        Query(q): Query<HashMap<String, String>>,
    ) -> (StatusCode, Json<Value>) {
        if q.get("api_key").map(String::as_str) != Some("maps-key") {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "status": "REQUEST_DENIED" })),
            );
        }
        (
            StatusCode::OK,
            Json(json!({
                "status": "SUCCESS",
                "echo": q,
                "routes": [{ "overview_polyline": "abc~d" }]
            })),
        )
    }

    async fn spawn(api_key: &str) -> OlaMapsClient {
        serve(Router::new().route("/routing/v1/directions", post(fake_ola)), api_key).await
    }

    /// Upstream that answers every request with `body` as JSON.
    async fn spawn_raw(body: &'static str) -> OlaMapsClient {
        let app = Router::new().route(
            "/routing/v1/directions",
            post(move || async move { ([(header::CONTENT_TYPE, "application/json")], body) }),
        );
        serve(app, "maps-key").await
    }

    async fn serve(app: Router, api_key: &str) -> OlaMapsClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        OlaMapsClient::new(
            MapsConfig {
                api_key: api_key.into(),
                api_base: format!("http://{addr}"),
            },
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn forwards_points_and_configured_key() {
        let client = spawn("maps-key").await;
        let raw = client
            .directions("12.93,77.61", "12.97,77.59")
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&raw).unwrap();

        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(body["echo"]["origin"], "12.93,77.61");
        assert_eq!(body["echo"]["destination"], "12.97,77.59");
        assert_eq!(body["echo"]["overview"], "full");
        assert_eq!(body["echo"]["alternatives"], "false");
        assert_eq!(body["routes"][0]["overview_polyline"], "abc~d");
    }

    #[tokio::test]
    async fn error_status_body_is_still_returned() {
        let client = spawn("wrong-key").await;
        let raw = client.directions("1,1", "2,2").await.unwrap();
        let body: Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(body, json!({ "status": "REQUEST_DENIED" }));
    }

    #[tokio::test]
    async fn body_is_returned_byte_for_byte() {
        let upstream = r#"{"status":"SUCCESS","routes":[{"overview_polyline":"x","legs":[]}],"geocoded_waypoints":[],"distance":12.345678901234567891}"#;
        let client = spawn_raw(upstream).await;
        let raw = client.directions("1,1", "2,2").await.unwrap();
        assert_eq!(raw.as_ref(), upstream.as_bytes());
    }

    #[tokio::test]
    async fn non_json_body_is_an_error() {
        let client = spawn_raw("<html>bad gateway</html>").await;
        assert!(client.directions("1,1", "2,2").await.is_err());
    }

    #[tokio::test]
    async fn unreachable_provider_is_an_error() {
        let client = OlaMapsClient::new(
            MapsConfig {
                api_key: "k".into(),
                api_base: "http://127.0.0.1:1".into(),
            },
            Duration::from_secs(2),
        )
        .unwrap();
        assert!(client.directions("1,1", "2,2").await.is_err());
    }
}
