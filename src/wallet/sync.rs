use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use super::{WalletBackend, WalletEvent};

/// Watches the wallet's sync progress and emits events for new transactions.
/// Poll failures are logged and the loop keeps going; the loop ends when the
/// event receiver is dropped.
pub async fn run(
    wallet: Arc<dyn WalletBackend>,
    events: mpsc::Sender<WalletEvent>,
    poll: Duration,
) {
    // The starting height must come from the wallet: falling back to zero
    // would replay the entire transaction history as fresh notifications.
    let mut last_height = loop {
        match wallet.sync_status().await {
            Ok(status) => break status.wallet_height,
            Err(e) => {
                tracing::warn!("Sync status poll failed: {}", e);
                tokio::time::sleep(poll).await;
            }
        }
    };

    loop {
        match wallet.sync_status().await {
            Ok(status) if status.wallet_height > last_height => {
                // Transactions at last_height were relayed on the previous
                // advance; fetch strictly above it so each one goes out once.
                match wallet.transactions_since(last_height + 1).await {
                    Ok(transactions) => {
                        for raw in transactions {
                            if let Some(event) = classify(raw) {
                                if events.send(event).await.is_err() {
                                    return;
                                }
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to fetch transactions: {}", e);
                    }
                }

                last_height = status.wallet_height;

                if events
                    .send(WalletEvent::Synced {
                        wallet_height: status.wallet_height,
                        network_height: status.network_height,
                    })
                    .await
                    .is_err()
                {
                    return;
                }
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Sync status poll failed: {}", e);
            }
        }

        tokio::time::sleep(poll).await;
    }
}

/// Splits a raw daemon transaction into an event. Positive total amounts are
/// incoming funds and get projected into a summary; everything else is an
/// outgoing transaction forwarded verbatim.
pub fn classify(raw: serde_json::Value) -> Option<WalletEvent> {
    let amount = raw.get("totalAmount").and_then(serde_json::Value::as_i64)?;

    if amount > 0 {
        serde_json::from_value(raw).ok().map(WalletEvent::Incoming)
    } else {
        Some(WalletEvent::Outgoing(raw))
    }
}
