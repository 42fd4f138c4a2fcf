//! Mint record callback: the step that actually mints.

use bridge_common::hash::bytes32;
use bridge_common::{bytes32_to_hex, compute_mint_hash, MintRequest};
use cosmwasm_std::{to_json_binary, DepsMut, Env, Event, HexBinary, MessageInfo, Response, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::execute::mint::mint_amount;
use crate::replay_guard::mint_record_address;
use crate::state::{CONFIG, STATS};

/// Mint the request's amount once its record has been initialized.
///
/// Only the record derived for `mint_hash` under this bridge may call, and the
/// request must hash to `mint_hash`.
pub fn execute_mint_record_callback(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    query_id: u64,
    mint_hash: HexBinary,
    request: MintRequest,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let mint_hash =
        bytes32(mint_hash.as_slice()).map_err(|_| ContractError::BadSenderMintRecord)?;
    let record = mint_record_address(deps.as_ref(), &env, config.mint_record_code_id, &mint_hash)?;
    if info.sender != record {
        return Err(ContractError::BadSenderMintRecord);
    }
    if compute_mint_hash(&request)? != mint_hash {
        return Err(ContractError::BadSenderMintRecord);
    }

    let receiver = deps.api.addr_validate(&request.receiver)?;
    let amount = mint_amount(request.amount)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.mints += 1;
    stats.total_minted = stats.total_minted.saturating_add(amount);
    STATS.save(deps.storage, &stats)?;

    let mint_msg = WasmMsg::Execute {
        contract_addr: config.token_contract.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: receiver.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    let event = Event::new("bridge_mint")
        .add_attribute("mint_hash", bytes32_to_hex(&mint_hash))
        .add_attribute("query_id", query_id.to_string())
        .add_attribute("id", request.id.to_string())
        .add_attribute("master_bridge", format!("0x{}", request.master_bridge.to_hex()))
        .add_attribute("timestamp", request.timestamp.to_string())
        .add_attribute("foreign_sender", format!("0x{}", request.foreign_sender.to_hex()))
        .add_attribute("amount", amount.to_string())
        .add_attribute("receiver", receiver.to_string());

    Ok(Response::new()
        .add_message(mint_msg)
        .add_event(event)
        .add_attribute("method", "mint_record_callback")
        .add_attribute("mint_record", record)
        .add_attribute("claim", "claimed"))
}
