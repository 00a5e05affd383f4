use std::sync::Arc;

use crate::wallet::WalletBackend;

#[derive(Clone)]
pub struct AppState {
    pub wallet: Arc<dyn WalletBackend>,
}
