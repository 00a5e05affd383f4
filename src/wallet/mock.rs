use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{Balance, NodeFee, SyncStatus, WalletBackend};

/// In-memory backend for route and dispatch tests.
pub struct MockWallet {
    pub address: String,
    pub fee: NodeFee,
    pub balance: Balance,
    pub status: SyncStatus,
    pub fail_send: bool,
    pub saves: AtomicUsize,
}

impl Default for MockWallet {
    fn default() -> Self {
        Self {
            address: "ADDR1".to_string(),
            fee: NodeFee {
                address: "NODE1".to_string(),
                fee: 10,
            },
            balance: Balance {
                unlocked: 1000,
                locked: 1000,
            },
            status: SyncStatus {
                wallet_height: 100,
                network_height: 100,
            },
            fail_send: false,
            saves: AtomicUsize::new(0),
        }
    }
}

impl MockWallet {
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletBackend for MockWallet {
    async fn primary_address(&self) -> anyhow::Result<String> {
        Ok(self.address.clone())
    }

    async fn balance(&self) -> anyhow::Result<Balance> {
        Ok(self.balance)
    }

    async fn sync_status(&self) -> anyhow::Result<SyncStatus> {
        Ok(self.status)
    }

    async fn node_fee(&self) -> anyhow::Result<NodeFee> {
        Ok(self.fee.clone())
    }

    async fn save(&self) -> anyhow::Result<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn send_advanced(&self, _transfers: &serde_json::Value) -> anyhow::Result<String> {
        if self.fail_send {
            anyhow::bail!("insufficient funds");
        }
        Ok("aabbccdd".to_string())
    }

    async fn create_integrated_address(
        &self,
        address: &str,
        payment_id: &str,
    ) -> anyhow::Result<String> {
        Ok(format!("{}+{}", address, payment_id))
    }

    async fn transactions_since(
        &self,
        _height: u64,
    ) -> anyhow::Result<Vec<serde_json::Value>> {
        Ok(Vec::new())
    }
}
