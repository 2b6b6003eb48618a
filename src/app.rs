use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use crate::{directions, drivers, payments, rides, users};

pub fn build_app(state: AppState) -> Router {
    let mut api = Router::new()
        .merge(users::router())
        .merge(rides::router())
        .merge(drivers::router())
        .route("/health", get(|| async { "ok" }));

    // Minimal deployments run without the processor or maps credentials.
    if state.payments.is_some() {
        api = api.merge(payments::router());
    }
    if state.directions.is_some() {
        api = api.merge(directions::router());
    }

    api.with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        let latency_ms = latency.as_millis() as u64;
                        if status.is_server_error() {
                            tracing::error!(%status, latency_ms, "response");
                        } else {
                            tracing::info!(%status, latency_ms, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use bytes::Bytes;
    use serde_json::{json, Value};

    use super::*;
    use crate::directions::client::DirectionsProvider;

    struct Echo;

    #[async_trait]
    impl DirectionsProvider for Echo {
        async fn directions(&self, origin: &str, destination: &str) -> anyhow::Result<Bytes> {
            Ok(json!({ "origin": origin, "destination": destination })
                .to_string()
                .into())
        }
    }

    async fn spawn(state: AppState) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = build_app(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn optional_routes_follow_configuration() {
        let base = spawn(AppState::fake()).await;
        let client = reqwest::Client::new();

        let health = client.get(format!("{base}/health")).send().await.unwrap();
        assert_eq!(health.status(), 200);
        assert_eq!(health.text().await.unwrap(), "ok");

        let route = client
            .get(format!("{base}/api/route?origin=1,2&destination=3,4"))
            .send()
            .await
            .unwrap();
        assert_eq!(route.status(), 404);

        let sheet = client
            .post(format!("{base}/payment-sheet"))
            .json(&json!({}))
            .send()
            .await
            .unwrap();
        assert_eq!(sheet.status(), 404);
    }

    #[tokio::test]
    async fn route_proxy_is_mounted_when_configured() {
        let base = spawn(AppState::fake().with_directions(Arc::new(Echo))).await;
        let res = reqwest::get(format!("{base}/api/route?origin=1,2&destination=3,4"))
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "origin": "1,2", "destination": "3,4" }));
    }

    #[tokio::test]
    async fn malformed_json_is_400_with_envelope() {
        let base = spawn(AppState::fake()).await;
        let res = reqwest::Client::new()
            .post(format!("{base}/api/rides"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 400);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Invalid request body" }));
    }
}
