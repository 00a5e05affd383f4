use wallet_service::wallet::rpc::RpcWallet;
use wallet_service::wallet::WalletBackend;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: create_wallet <wallet file> <wallet password>");
        return;
    }

    let wallet_api =
        std::env::var("WALLET_API").unwrap_or_else(|_| "http://127.0.0.1:8075".to_string());
    let daemon_host =
        std::env::var("DAEMON_HOST").unwrap_or_else(|_| "blockapi.turtlepay.io".to_string());

    match RpcWallet::create(&wallet_api, &daemon_host, &args[1], &args[2]).await {
        Ok(wallet) => {
            if let Err(e) = wallet.save().await {
                tracing::error!("Failed to save new wallet: {}", e);
                return;
            }
            tracing::info!("Created wallet {}", args[1]);
        }
        Err(e) => {
            tracing::error!("Failed to create wallet: {}", e);
        }
    }
}
