use serde::Serialize;

use crate::wallet::{Balance, SyncStatus};

/// The wallet counts as synced while it trails the network by less than
/// this many blocks.
pub const SYNC_THRESHOLD: i64 = 2;

#[derive(Debug, Serialize)]
pub struct StatusView {
    pub block: u64,
    pub balance: u64,
    pub is_synced: bool,
}

/// Projects live wallet state into the status view. Reported `block` is the
/// network height and `balance` is the unlocked portion. The gap is signed,
/// so a network height momentarily behind the wallet (reorg) still reads as
/// synced.
pub fn project(status: &SyncStatus, balance: &Balance) -> StatusView {
    let gap = status.network_height as i64 - status.wallet_height as i64;
    StatusView {
        block: status.network_height,
        balance: balance.unlocked,
        is_synced: gap < SYNC_THRESHOLD,
    }
}
