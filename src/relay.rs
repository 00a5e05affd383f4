use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc;

use crate::signer::Signer;
use crate::wallet::{TransactionSummary, WalletBackend, WalletEvent};

/// Payload shape the payments service expects for received funds. Field
/// order is the wire order; the signature covers these exact bytes.
#[derive(Serialize)]
struct NotificationPayload {
    amount: i64,
    payment_id: String,
    block: String,
}

/// Forwards wallet events to the payments service. Calls are fire-and-forget:
/// the HTTP request runs on its own task, failures are logged and never
/// retried, and nothing is reported back to the event source.
#[derive(Clone)]
pub struct Relay {
    http: reqwest::Client,
    payments_uri: String,
    signer: Signer,
}

impl Relay {
    pub fn new(payments_uri: &str, signer: Signer) -> Self {
        Self {
            http: reqwest::Client::new(),
            payments_uri: payments_uri.trim_end_matches('/').to_string(),
            signer,
        }
    }

    /// Notifies the payments service of received funds, signed with the
    /// master key in the HMAC-SIGNATURE header.
    pub fn notify_received(&self, tx: &TransactionSummary) {
        let payload = NotificationPayload {
            amount: tx.total_amount,
            payment_id: tx.payment_id.clone(),
            block: tx.block_height.to_string(),
        };

        let body = match serde_json::to_string(&payload) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Failed to serialize received notification: {}", e);
                return;
            }
        };

        let signature = self.signer.sign(body.as_bytes());
        let request = self
            .http
            .post(format!("{}/api/transaction/received", self.payments_uri))
            .header("HMAC-SIGNATURE", signature)
            .body(body);

        tokio::spawn(async move {
            if let Err(e) = request.send().await {
                tracing::warn!("Received notification failed: {}", e);
            }
        });
    }

    /// Forwards an outgoing transaction object verbatim. This path is
    /// unsigned; only the received path carries a signature.
    pub fn notify_sent(&self, tx: &serde_json::Value) {
        let request = self
            .http
            .post(format!("{}/api/transaction/sent", self.payments_uri))
            .json(tx);

        tokio::spawn(async move {
            if let Err(e) = request.send().await {
                tracing::warn!("Sent notification failed: {}", e);
            }
        });
    }
}

/// Consumes wallet events: transaction events go out through the relay and
/// sync events persist the wallet file. A relay failure never stops the loop.
pub async fn dispatch(
    mut events: mpsc::Receiver<WalletEvent>,
    relay: Relay,
    wallet: Arc<dyn WalletBackend>,
) {
    while let Some(event) = events.recv().await {
        match event {
            WalletEvent::Incoming(tx) => {
                tracing::info!(
                    "Incoming transaction of {} at block {}",
                    tx.total_amount,
                    tx.block_height
                );
                relay.notify_received(&tx);
            }
            WalletEvent::Outgoing(tx) => {
                let amount = tx
                    .get("totalAmount")
                    .and_then(serde_json::Value::as_i64)
                    .unwrap_or_default();
                tracing::info!("Outgoing transaction of {} sent!", amount);
                relay.notify_sent(&tx);
            }
            WalletEvent::Synced {
                wallet_height,
                network_height,
            } => {
                if let Err(e) = wallet.save().await {
                    tracing::warn!("Failed to save wallet: {}", e);
                } else {
                    tracing::info!(
                        "Wallet synced! Wallet height: {}, Network height: {}",
                        wallet_height,
                        network_height
                    );
                }
            }
        }
    }
}
