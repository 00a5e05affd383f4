use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub mod transaction;
pub mod wallet;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/wallet", get(wallet::info))
        .route("/wallet/status", get(wallet::status))
        .route("/wallet/save", post(wallet::save))
        .route("/wallet/integrated_address", post(wallet::integrated_address))
        .route(
            "/wallet/send_transaction",
            post(transaction::send_transaction),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::wallet::mock::MockWallet;
    use crate::wallet::SyncStatus;

    fn app_with(wallet: Arc<MockWallet>) -> Router {
        router(AppState { wallet })
    }

    fn app() -> Router {
        app_with(Arc::new(MockWallet::default()))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn wallet_info_returns_address_and_fee() {
        let (status, body) = get_json(app(), "/wallet").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "address": "ADDR1", "node_fee": 10 }));
    }

    #[tokio::test]
    async fn wallet_status_projects_live_state() {
        let (status, body) = get_json(app(), "/wallet/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "block": 100, "balance": 1000, "is_synced": true }));
    }

    #[tokio::test]
    async fn wallet_status_reports_lagging_wallet() {
        let wallet = Arc::new(MockWallet {
            status: SyncStatus {
                wallet_height: 90,
                network_height: 100,
            },
            ..MockWallet::default()
        });
        let (_, body) = get_json(app_with(wallet), "/wallet/status").await;
        assert_eq!(body, json!({ "block": 100, "balance": 1000, "is_synced": false }));
    }

    #[tokio::test]
    async fn save_persists_wallet_and_returns_empty_object() {
        let wallet = Arc::new(MockWallet::default());
        let (status, body) =
            post_json(app_with(wallet.clone()), "/wallet/save", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({}));
        assert_eq!(wallet.save_count(), 1);
    }

    #[tokio::test]
    async fn integrated_address_delegates_to_backend() {
        let (status, body) = post_json(
            app(),
            "/wallet/integrated_address",
            json!({ "payment_id": "xyz" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "integrated_address": "ADDR1+xyz" }));
    }

    #[tokio::test]
    async fn send_transaction_reports_ok_with_block() {
        let wallet = Arc::new(MockWallet::default());
        let (status, body) = post_json(
            app_with(wallet.clone()),
            "/wallet/send_transaction",
            json!({ "transfers": [{ "address": "ADDR2", "amount": 100 }] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok", "block": 100 }));
        // The wallet is saved after the attempt.
        assert_eq!(wallet.save_count(), 1);
    }

    #[tokio::test]
    async fn send_transaction_failure_is_coarse() {
        let wallet = Arc::new(MockWallet {
            fail_send: true,
            ..MockWallet::default()
        });
        let (status, body) = post_json(
            app_with(wallet.clone()),
            "/wallet/send_transaction",
            json!({ "transfers": [] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "error" }));
        assert_eq!(wallet.save_count(), 1);
    }
}
