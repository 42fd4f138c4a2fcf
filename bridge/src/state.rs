//! State definitions for the Slave Bridge contract
//!
//! The whole configuration lives in one record that is only ever replaced
//! wholesale. Replay protection does not live here: every processed mint owns
//! a separate mint record contract (see `replay_guard`).

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, Uint128};
use cw_storage_plus::Item;

// ============================================================================
// Core Configuration
// ============================================================================

/// Operating state of the bridge
#[cw_serde]
#[derive(Copy)]
pub enum BridgeState {
    Running,
    Stopped,
}

impl BridgeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeState::Running => "running",
            BridgeState::Stopped => "stopped",
        }
    }
}

/// Bridge configuration, always replaced as a whole
#[cw_serde]
pub struct BridgeConfig {
    /// Whether mints and burns are accepted
    pub state: BridgeState,
    /// Ed25519 public key of the single validator (32 bytes)
    pub validator_pubkey: HexBinary,
    /// Master bridge id on the foreign chain (20 bytes)
    pub master_bridge: HexBinary,
    /// Admin allowed to replace this record
    pub admin: Addr,
    /// CW20 token this bridge mints and burns
    pub token_contract: Addr,
    /// Code id the token contract must be running
    pub token_code_id: u64,
    /// Code id used to instantiate mint records
    pub mint_record_code_id: u64,
}

/// Running counters
///
/// Lifetime totals saturate at `Uint128::MAX` instead of failing a mint or burn.
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub mints: u64,
    pub replays: u64,
    pub burns: u64,
    pub total_minted: Uint128,
    pub total_burned: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

pub const CONTRACT_NAME: &str = "crates.io:slave-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Native denom a Mint must attach to cover the mint's message fees
pub const MINT_VALUE_DENOM: &str = "uluna";

/// Smallest amount of `MINT_VALUE_DENOM` a Mint must attach (0.1 LUNC)
pub const MIN_MINT_VALUE: Uint128 = Uint128::new(100_000);

/// Reply id for the `Init` sent to an already initialized mint record
pub const REPLY_ALREADY_CLAIMED: u64 = 1;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<BridgeConfig> = Item::new("config");

pub const STATS: Item<Stats> = Item::new("stats");

/// Mint hash of the replay currently waiting for its reply
pub const PENDING_REPLAY: Item<HexBinary> = Item::new("pending_replay");
