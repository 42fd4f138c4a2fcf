//! Slave Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `replay_guard` - mint record addressing and claiming
//! - `signature` - validator signature check

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_change_config, execute_mint, execute_mint_record_callback, execute_receive,
    reply_already_claimed, validate_config,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_compute_mint_hash, query_config, query_mint_hash, query_mint_record, query_stats,
};
use crate::state::{Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, REPLY_ALREADY_CLAIMED, STATS};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = validate_config(deps.as_ref(), msg.config)?;
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("state", config.state.as_str())
        .add_attribute("admin", config.admin)
        .add_attribute("token_contract", config.token_contract)
        .add_attribute("mint_record_code_id", config.mint_record_code_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint {
            query_id,
            signature,
            request,
        } => execute_mint(deps, env, info, query_id, signature, request),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::ChangeConfig { query_id, config } => {
            execute_change_config(deps, info, query_id, config)
        }
        ExecuteMsg::MintRecordCallback {
            query_id,
            mint_hash,
            request,
        } => execute_mint_record_callback(deps, env, info, query_id, mint_hash, request),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_ALREADY_CLAIMED => reply_already_claimed(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::MintHash { serialized } => to_json_binary(&query_mint_hash(serialized)?),
        QueryMsg::ComputeMintHash { request } => to_json_binary(&query_compute_mint_hash(request)?),
        QueryMsg::MintRecord { mint_hash } => {
            to_json_binary(&query_mint_record(deps, env, mint_hash)?)
        }
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
