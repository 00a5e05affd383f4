use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{Balance, NodeFee, SyncStatus, WalletBackend};

/// HTTP adapter onto the wallet daemon's REST API. The daemon owns the
/// wallet file, the keys and the chain state; this type only forwards calls.
pub struct RpcWallet {
    http: reqwest::Client,
    base: String,
}

#[derive(Deserialize)]
struct AddressResponse {
    address: String,
}

#[derive(Deserialize)]
struct StatusResponse {
    #[serde(rename = "walletBlockCount")]
    wallet_block_count: u64,
    #[serde(rename = "networkBlockCount")]
    network_block_count: u64,
}

#[derive(Deserialize)]
struct NodeResponse {
    #[serde(rename = "nodeAddress")]
    node_address: String,
    #[serde(rename = "nodeFee")]
    node_fee: u64,
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(rename = "transactionHash")]
    transaction_hash: String,
}

#[derive(Deserialize)]
struct IntegratedAddressResponse {
    #[serde(rename = "integratedAddress")]
    integrated_address: String,
}

#[derive(Deserialize)]
struct TransactionsResponse {
    transactions: Vec<serde_json::Value>,
}

impl RpcWallet {
    /// Opens an existing wallet file on the daemon.
    pub async fn open(
        base: &str,
        daemon_host: &str,
        filename: &str,
        password: &str,
    ) -> anyhow::Result<Self> {
        let wallet = Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        };

        wallet
            .http
            .post(format!("{}/wallet/open", wallet.base))
            .json(&json!({
                "daemonHost": daemon_host,
                "daemonPort": 443,
                "daemonSSL": true,
                "filename": filename,
                "password": password,
            }))
            .send()
            .await?
            .error_for_status()?;

        Ok(wallet)
    }

    /// Creates a fresh wallet file on the daemon.
    pub async fn create(
        base: &str,
        daemon_host: &str,
        filename: &str,
        password: &str,
    ) -> anyhow::Result<Self> {
        let wallet = Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        };

        wallet
            .http
            .post(format!("{}/wallet/create", wallet.base))
            .json(&json!({
                "daemonHost": daemon_host,
                "daemonPort": 443,
                "daemonSSL": true,
                "filename": filename,
                "password": password,
            }))
            .send()
            .await?
            .error_for_status()?;

        Ok(wallet)
    }
}

#[async_trait]
impl WalletBackend for RpcWallet {
    async fn primary_address(&self) -> anyhow::Result<String> {
        let res: AddressResponse = self
            .http
            .get(format!("{}/addresses/primary", self.base))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res.address)
    }

    async fn balance(&self) -> anyhow::Result<Balance> {
        let res: Balance = self
            .http
            .get(format!("{}/balance", self.base))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res)
    }

    async fn sync_status(&self) -> anyhow::Result<SyncStatus> {
        let res: StatusResponse = self
            .http
            .get(format!("{}/status", self.base))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(SyncStatus {
            wallet_height: res.wallet_block_count,
            network_height: res.network_block_count,
        })
    }

    async fn node_fee(&self) -> anyhow::Result<NodeFee> {
        let res: NodeResponse = self
            .http
            .get(format!("{}/node", self.base))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(NodeFee {
            address: res.node_address,
            fee: res.node_fee,
        })
    }

    async fn save(&self) -> anyhow::Result<()> {
        self.http
            .put(format!("{}/save", self.base))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn send_advanced(&self, transfers: &serde_json::Value) -> anyhow::Result<String> {
        let res: SendResponse = self
            .http
            .post(format!("{}/transactions/send/advanced", self.base))
            .json(&json!({ "destinations": transfers }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res.transaction_hash)
    }

    async fn create_integrated_address(
        &self,
        address: &str,
        payment_id: &str,
    ) -> anyhow::Result<String> {
        let res: IntegratedAddressResponse = self
            .http
            .post(format!("{}/addresses/integrated", self.base))
            .json(&json!({ "address": address, "paymentID": payment_id }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res.integrated_address)
    }

    async fn transactions_since(
        &self,
        height: u64,
    ) -> anyhow::Result<Vec<serde_json::Value>> {
        let res: TransactionsResponse = self
            .http
            .get(format!("{}/transactions/{}", self.base, height))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(res.transactions)
    }
}
