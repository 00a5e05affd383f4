use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Settings {
    pub wallet_file: String,
    pub wallet_pass: String,
    pub payments_uri: String,
    pub master_key: String,
    pub wallet_api: String,
    pub daemon_host: String,
    pub port: u16,
}

impl Settings {
    /// Reads configuration from the environment. The four wallet/payments
    /// values are required; everything else has a default.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            wallet_file: std::env::var("WALLET_FILE").context("WALLET_FILE must be set")?,
            wallet_pass: std::env::var("WALLET_PASS").context("WALLET_PASS must be set")?,
            payments_uri: std::env::var("PAYMENTS_URI").context("PAYMENTS_URI must be set")?,
            master_key: std::env::var("MASTER_KEY").context("MASTER_KEY must be set")?,
            wallet_api: std::env::var("WALLET_API")
                .unwrap_or_else(|_| "http://127.0.0.1:8075".to_string()),
            daemon_host: std::env::var("DAEMON_HOST")
                .unwrap_or_else(|_| "blockapi.turtlepay.io".to_string()),
            port: std::env::var("WALLET_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8070),
        })
    }
}
