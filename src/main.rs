use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use wallet_service::config::Settings;
use wallet_service::relay::{self, Relay};
use wallet_service::signer::Signer;
use wallet_service::state::AppState;
use wallet_service::wallet::rpc::RpcWallet;
use wallet_service::wallet::{self, WalletBackend};

const SYNC_POLL_INTERVAL: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let settings = Settings::from_env().expect("Invalid configuration");

    let wallet = match RpcWallet::open(
        &settings.wallet_api,
        &settings.daemon_host,
        &settings.wallet_file,
        &settings.wallet_pass,
    )
    .await
    {
        Ok(wallet) => Arc::new(wallet),
        Err(_) => return,
    };

    if let Ok(address) = wallet.primary_address().await {
        tracing::info!("Opened wallet {}", address);
    }

    let signer = Signer::new(settings.master_key.as_bytes());
    let relay = Relay::new(&settings.payments_uri, signer);

    let (events_tx, events_rx) = mpsc::channel(64);

    let sync_wallet = wallet.clone() as Arc<dyn WalletBackend>;
    tokio::spawn(async move {
        wallet::sync::run(sync_wallet, events_tx, SYNC_POLL_INTERVAL).await;
    });

    let dispatch_wallet = wallet.clone() as Arc<dyn WalletBackend>;
    tokio::spawn(async move {
        relay::dispatch(events_rx, relay, dispatch_wallet).await;
    });

    tracing::info!("Started wallet");

    let state = AppState { wallet };

    let app = wallet_service::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));

    tracing::info!("Server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    axum::serve(listener, app).await.unwrap();
}
