//! Message types for the Slave Bridge contract

use bridge_common::MintRequest;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, HexBinary, Uint128};
use cw20::Cw20ReceiveMsg;

pub use crate::state::BridgeState;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Initial bridge configuration
    pub config: BridgeConfigMsg,
}

/// Full bridge configuration as submitted by the admin
#[cw_serde]
pub struct BridgeConfigMsg {
    pub state: BridgeState,
    /// Ed25519 public key of the validator (32 bytes)
    pub validator_pubkey: HexBinary,
    /// Master bridge id on the foreign chain (20 bytes)
    pub master_bridge: HexBinary,
    pub admin: String,
    /// CW20 token contract, must run `token_code_id`
    pub token_contract: String,
    pub token_code_id: u64,
    /// Stored code of the mint record contract
    pub mint_record_code_id: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a validator-signed request.
    /// Must attach at least `MIN_MINT_VALUE` uluna.
    Mint {
        query_id: u64,
        /// 64-byte Ed25519 signature over the request's mint hash
        signature: Binary,
        request: MintRequest,
    },

    /// CW20 receive hook; the embedded message is a [`ReceiveMsg`]
    Receive(Cw20ReceiveMsg),

    /// Replace the whole configuration (admin only)
    ChangeConfig {
        query_id: u64,
        config: BridgeConfigMsg,
    },

    /// Sent by a mint record right after it was initialized
    MintRecordCallback {
        query_id: u64,
        mint_hash: HexBinary,
        request: MintRequest,
    },
}

/// Messages embedded in a CW20 send to the bridge
#[cw_serde]
pub enum ReceiveMsg {
    /// Burn the sent tokens and release them on the foreign chain
    Burn {
        /// 32-byte word holding a 20-byte foreign address
        foreign_receiver: HexBinary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current bridge configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Mint hash of a canonically serialized request
    #[returns(MintHashResponse)]
    MintHash { serialized: Binary },

    /// Canonical bytes and mint hash of a request, for signers
    #[returns(ComputeMintHashResponse)]
    ComputeMintHash { request: MintRequest },

    /// Address and status of the mint record for a mint hash
    #[returns(MintRecordResponse)]
    MintRecord { mint_hash: HexBinary },

    #[returns(StatsResponse)]
    Stats {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub state: BridgeState,
    pub validator_pubkey: HexBinary,
    pub master_bridge: HexBinary,
    pub admin: Addr,
    pub token_contract: Addr,
    pub token_code_id: u64,
    pub mint_record_code_id: u64,
}

#[cw_serde]
pub struct MintHashResponse {
    pub mint_hash: HexBinary,
}

#[cw_serde]
pub struct ComputeMintHashResponse {
    pub mint_hash: HexBinary,
    pub serialized: Binary,
}

#[cw_serde]
pub struct MintRecordResponse {
    /// Deterministic address of the record
    pub address: Addr,
    /// Whether a record contract is deployed there
    pub exists: bool,
    /// Whether the mint has been claimed
    pub initialized: bool,
}

#[cw_serde]
pub struct StatsResponse {
    pub mints: u64,
    pub replays: u64,
    pub burns: u64,
    pub total_minted: Uint128,
    pub total_burned: Uint128,
}
