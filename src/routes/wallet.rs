use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::state::AppState;
use crate::status;

#[derive(Serialize)]
pub struct WalletInfo {
    pub address: String,
    pub node_fee: u64,
}

#[derive(Deserialize)]
pub struct IntegratedAddressRequest {
    pub payment_id: String,
}

#[derive(Serialize)]
pub struct IntegratedAddressResponse {
    pub integrated_address: String,
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

pub async fn info(
    State(state): State<AppState>,
) -> Result<Json<WalletInfo>, (StatusCode, String)> {
    let address = state.wallet.primary_address().await.map_err(internal)?;
    let fee = state.wallet.node_fee().await.map_err(internal)?;

    Ok(Json(WalletInfo {
        address,
        node_fee: fee.fee,
    }))
}

pub async fn status(
    State(state): State<AppState>,
) -> Result<Json<status::StatusView>, (StatusCode, String)> {
    let sync = state.wallet.sync_status().await.map_err(internal)?;
    let balance = state.wallet.balance().await.map_err(internal)?;

    Ok(Json(status::project(&sync, &balance)))
}

pub async fn save(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    state.wallet.save().await.map_err(internal)?;
    Ok(Json(json!({})))
}

pub async fn integrated_address(
    State(state): State<AppState>,
    Json(payload): Json<IntegratedAddressRequest>,
) -> Result<Json<IntegratedAddressResponse>, (StatusCode, String)> {
    let address = state.wallet.primary_address().await.map_err(internal)?;
    let integrated_address = state
        .wallet
        .create_integrated_address(&address, &payload.payment_id)
        .await
        .map_err(internal)?;

    Ok(Json(IntegratedAddressResponse { integrated_address }))
}
