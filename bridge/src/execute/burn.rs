//! Burn handler (CW20 receive hook).

use bridge_common::bytes32_to_hex;
use bridge_common::codec::foreign_receiver;
use cosmwasm_std::{from_json, to_json_binary, DepsMut, Event, MessageInfo, Response, WasmMsg};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{BridgeState, CONFIG, STATS};

/// Handle tokens sent to the bridge with `ReceiveMsg::Burn`.
///
/// Any rejection reverts the whole send, leaving the tokens with the sender.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.token_contract {
        return Err(ContractError::BadSenderJw);
    }
    if config.state != BridgeState::Running {
        return Err(ContractError::Stopped);
    }

    let msg: ReceiveMsg = from_json(&wrapper.msg)?;
    match msg {
        ReceiveMsg::Burn {
            foreign_receiver: receiver,
        } => {
            let receiver = foreign_receiver(receiver.as_slice())?;
            let sender = deps.api.addr_validate(&wrapper.sender)?;

            let mut stats = STATS.load(deps.storage)?;
            stats.burns += 1;
            stats.total_burned = stats.total_burned.saturating_add(wrapper.amount);
            STATS.save(deps.storage, &stats)?;

            let burn_msg = WasmMsg::Execute {
                contract_addr: config.token_contract.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Burn {
                    amount: wrapper.amount,
                })?,
                funds: vec![],
            };

            let event = Event::new("bridge_burn")
                .add_attribute("sender", sender.to_string())
                .add_attribute("amount", wrapper.amount.to_string())
                .add_attribute("foreign_receiver", bytes32_to_hex(&receiver));

            Ok(Response::new()
                .add_message(burn_msg)
                .add_event(event)
                .add_attribute("method", "burn")
                .add_attribute("sender", sender)
                .add_attribute("amount", wrapper.amount.to_string()))
        }
    }
}
