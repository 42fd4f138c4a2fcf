//! Query handlers for the Slave Bridge contract.

use bridge_common::hash::bytes32;
use bridge_common::{
    compute_mint_hash, decode_mint_request, encode_mint_request, keccak256, MintRequest,
};
use cosmwasm_std::{Binary, Deps, Env, HexBinary, StdError, StdResult};

use crate::msg::{
    ComputeMintHashResponse, ConfigResponse, MintHashResponse, MintRecordResponse, StatsResponse,
};
use crate::replay_guard::{load_record, mint_record_address};
use crate::state::{CONFIG, STATS};

/// Current configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        state: config.state,
        validator_pubkey: config.validator_pubkey,
        master_bridge: config.master_bridge,
        admin: config.admin,
        token_contract: config.token_contract,
        token_code_id: config.token_code_id,
        mint_record_code_id: config.mint_record_code_id,
    })
}

/// Mint hash of canonical request bytes.
///
/// The bytes must decode as a mint request; the hash is taken over them as given.
pub fn query_mint_hash(serialized: Binary) -> StdResult<MintHashResponse> {
    decode_mint_request(serialized.as_slice())
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(MintHashResponse {
        mint_hash: HexBinary::from(keccak256(serialized.as_slice()).as_slice()),
    })
}

pub fn query_compute_mint_hash(request: MintRequest) -> StdResult<ComputeMintHashResponse> {
    let serialized =
        encode_mint_request(&request).map_err(|e| StdError::generic_err(e.to_string()))?;
    let mint_hash =
        compute_mint_hash(&request).map_err(|e| StdError::generic_err(e.to_string()))?;
    Ok(ComputeMintHashResponse {
        mint_hash: HexBinary::from(mint_hash.as_slice()),
        serialized: Binary::from(serialized),
    })
}

/// Where the record for `mint_hash` lives and whether it has been claimed.
pub fn query_mint_record(
    deps: Deps,
    env: Env,
    mint_hash: HexBinary,
) -> StdResult<MintRecordResponse> {
    let config = CONFIG.load(deps.storage)?;
    let mint_hash =
        bytes32(mint_hash.as_slice()).map_err(|e| StdError::generic_err(e.to_string()))?;
    let address = mint_record_address(deps, &env, config.mint_record_code_id, &mint_hash)?;
    let record = load_record(deps, &address);
    Ok(MintRecordResponse {
        address,
        exists: record.is_some(),
        initialized: record.map(|r| r.initialized).unwrap_or(false),
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        mints: stats.mints,
        replays: stats.replays,
        burns: stats.burns,
        total_minted: stats.total_minted,
        total_burned: stats.total_burned,
    })
}
