//! Configuration handlers.
//!
//! The configuration is one record: it is validated in full and then swapped
//! in a single write. There are no per-field setters.

use bridge_common::codec::foreign_address;
use cosmwasm_std::{BankMsg, Deps, DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::msg::BridgeConfigMsg;
use crate::signature::PUBKEY_LEN;
use crate::state::{BridgeConfig, CONFIG};

/// Check a submitted record and turn it into the stored form.
pub fn validate_config(deps: Deps, msg: BridgeConfigMsg) -> Result<BridgeConfig, ContractError> {
    if msg.validator_pubkey.len() != PUBKEY_LEN {
        return Err(ContractError::invalid_config(format!(
            "validator_pubkey must be {PUBKEY_LEN} bytes, got {}",
            msg.validator_pubkey.len()
        )));
    }
    foreign_address("master_bridge", msg.master_bridge.as_slice())
        .map_err(|e| ContractError::invalid_config(e.to_string()))?;

    let admin = deps
        .api
        .addr_validate(&msg.admin)
        .map_err(|e| ContractError::invalid_config(format!("admin: {e}")))?;
    let token_contract = deps
        .api
        .addr_validate(&msg.token_contract)
        .map_err(|e| ContractError::invalid_config(format!("token_contract: {e}")))?;

    let token_info = deps
        .querier
        .query_wasm_contract_info(token_contract.as_str())
        .map_err(|e| ContractError::invalid_config(format!("token_contract: {e}")))?;
    if token_info.code_id != msg.token_code_id {
        return Err(ContractError::invalid_config(format!(
            "token_contract runs code {}, expected {}",
            token_info.code_id, msg.token_code_id
        )));
    }

    deps.querier
        .query_wasm_code_info(msg.mint_record_code_id)
        .map_err(|e| ContractError::invalid_config(format!("mint_record_code_id: {e}")))?;

    Ok(BridgeConfig {
        state: msg.state,
        validator_pubkey: msg.validator_pubkey,
        master_bridge: msg.master_bridge,
        admin,
        token_contract,
        token_code_id: msg.token_code_id,
        mint_record_code_id: msg.mint_record_code_id,
    })
}

/// Replace the whole configuration (admin only).
///
/// Funds attached to the call are sent back to the admin.
pub fn execute_change_config(
    deps: DepsMut,
    info: MessageInfo,
    query_id: u64,
    config: BridgeConfigMsg,
) -> Result<Response, ContractError> {
    let current = CONFIG.load(deps.storage)?;
    if info.sender != current.admin {
        return Err(ContractError::BadSenderAdmin);
    }

    let new_config = validate_config(deps.as_ref(), config)?;
    CONFIG.save(deps.storage, &new_config)?;

    let mut res = Response::new();
    if !info.funds.is_empty() {
        res = res.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: info.funds,
        });
    }

    Ok(res
        .add_attribute("method", "change_config")
        .add_attribute("query_id", query_id.to_string())
        .add_attribute("state", new_config.state.as_str())
        .add_attribute("admin", new_config.admin))
}
