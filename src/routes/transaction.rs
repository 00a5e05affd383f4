use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct SendRequest {
    pub transfers: serde_json::Value,
}

#[derive(Serialize)]
pub struct SendResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<u64>,
}

/// Submits a transaction through the wallet backend. The caller only learns
/// coarse ok/error; details stay in the logs. The wallet file is saved after
/// the attempt either way.
pub async fn send_transaction(
    State(state): State<AppState>,
    Json(payload): Json<SendRequest>,
) -> Json<SendResponse> {
    let response = match state.wallet.send_advanced(&payload.transfers).await {
        Ok(hash) => {
            tracing::info!("Submitted transaction {}", hash);
            let block = state
                .wallet
                .sync_status()
                .await
                .ok()
                .map(|s| s.network_height);
            SendResponse {
                status: "ok",
                block,
            }
        }
        Err(e) => {
            tracing::warn!("Send transaction failed: {}", e);
            SendResponse {
                status: "error",
                block: None,
            }
        }
    };

    if let Err(e) = state.wallet.save().await {
        tracing::warn!("Failed to save wallet after send: {}", e);
    }

    Json(response)
}
