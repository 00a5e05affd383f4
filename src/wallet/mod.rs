use async_trait::async_trait;
use serde::Deserialize;

pub mod rpc;
pub mod sync;

#[cfg(test)]
pub mod mock;

/// Summary of an incoming transaction as the wallet daemon reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionSummary {
    #[serde(rename = "totalAmount")]
    pub total_amount: i64,
    #[serde(rename = "paymentID", default)]
    pub payment_id: String,
    #[serde(rename = "blockHeight")]
    pub block_height: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Balance {
    pub unlocked: u64,
    pub locked: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct SyncStatus {
    pub wallet_height: u64,
    pub network_height: u64,
}

#[derive(Debug, Clone)]
pub struct NodeFee {
    pub address: String,
    pub fee: u64,
}

/// Events surfaced by the sync watcher. Outgoing transactions are carried
/// verbatim; the payments service receives them unprojected.
#[derive(Debug)]
pub enum WalletEvent {
    Incoming(TransactionSummary),
    Outgoing(serde_json::Value),
    Synced { wallet_height: u64, network_height: u64 },
}

/// The external wallet backend. All blockchain synchronization, key
/// management and transaction construction live behind this seam; the
/// service only marshals parameters in and results out.
#[async_trait]
pub trait WalletBackend: Send + Sync {
    async fn primary_address(&self) -> anyhow::Result<String>;

    async fn balance(&self) -> anyhow::Result<Balance>;

    async fn sync_status(&self) -> anyhow::Result<SyncStatus>;

    async fn node_fee(&self) -> anyhow::Result<NodeFee>;

    /// Persists the wallet to its encrypted file.
    async fn save(&self) -> anyhow::Result<()>;

    /// Submits a transaction with explicit transfer destinations; returns
    /// the transaction hash.
    async fn send_advanced(&self, transfers: &serde_json::Value) -> anyhow::Result<String>;

    async fn create_integrated_address(
        &self,
        address: &str,
        payment_id: &str,
    ) -> anyhow::Result<String>;

    /// Raw transaction objects at or above the given block height.
    async fn transactions_since(&self, height: u64)
        -> anyhow::Result<Vec<serde_json::Value>>;
}
