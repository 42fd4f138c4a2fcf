use bridge_common::hash::bytes32;
use bridge_common::{bytes32_to_hex, compute_mint_hash, BridgeCallbackMsg, MintRequest};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MintRecordResponse, QueryMsg};
use crate::state::{MintRecord, CONTRACT_NAME, CONTRACT_VERSION, RECORD};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mint_hash = bytes32(msg.mint_hash.as_slice())?;

    let record = MintRecord {
        initialized: false,
        mint_hash: msg.mint_hash,
        bridge: info.sender,
    };
    RECORD.save(deps.storage, &record)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("mint_hash", bytes32_to_hex(&mint_hash))
        .add_attribute("bridge", record.bridge))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Init { query_id, request } => execute_init(deps, info, query_id, request),
    }
}

fn execute_init(
    deps: DepsMut,
    info: MessageInfo,
    query_id: u64,
    request: MintRequest,
) -> Result<Response, ContractError> {
    let mut record = RECORD.load(deps.storage)?;

    if info.sender != record.bridge {
        return Err(ContractError::BadSender);
    }
    if record.initialized {
        return Err(ContractError::AlreadyInited);
    }

    let mint_hash = compute_mint_hash(&request)?;
    if mint_hash.as_slice() != record.mint_hash.as_slice() {
        return Err(ContractError::MintHashMismatch);
    }

    record.initialized = true;
    RECORD.save(deps.storage, &record)?;

    let callback = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: record.bridge.to_string(),
        msg: to_json_binary(&BridgeCallbackMsg::MintRecordCallback {
            query_id,
            mint_hash: record.mint_hash.clone(),
            request,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(callback)
        .add_attribute("action", "init")
        .add_attribute("query_id", query_id.to_string())
        .add_attribute("mint_hash", bytes32_to_hex(&mint_hash)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::StoredData {} => to_json_binary(&query_stored_data(deps)?),
    }
}

fn query_stored_data(deps: Deps) -> StdResult<MintRecordResponse> {
    let record = RECORD.load(deps.storage)?;
    Ok(MintRecordResponse {
        initialized: record.initialized,
        mint_hash: record.mint_hash,
        bridge: record.bridge,
    })
}
