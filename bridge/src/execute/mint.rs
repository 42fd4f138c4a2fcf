//! Mint handler and the replay reply.

use bridge_common::{bytes32_to_hex, compute_mint_hash, MintRequest};
use cosmwasm_std::{
    Binary, DepsMut, Env, HexBinary, MessageInfo, Reply, Response, SubMsgResult, Uint128,
    Uint256,
};

use crate::error::ContractError;
use crate::replay_guard::{claim_label, claim_messages, try_claim, Claim};
use crate::signature::verify;
use crate::state::{BridgeState, CONFIG, MINT_VALUE_DENOM, MIN_MINT_VALUE, PENDING_REPLAY, STATS};

/// Validate a signed mint request and claim its mint hash.
///
/// Checks run in a fixed order: state, attached value, master bridge,
/// signature, amount. Tokens are minted later, when the freshly initialized
/// mint record calls back.
pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    query_id: u64,
    signature: Binary,
    request: MintRequest,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.state != BridgeState::Running {
        return Err(ContractError::Stopped);
    }

    let attached = info
        .funds
        .iter()
        .filter(|coin| coin.denom == MINT_VALUE_DENOM)
        .fold(Uint128::zero(), |acc, coin| acc + coin.amount);
    if attached < MIN_MINT_VALUE {
        return Err(ContractError::BadMsgValue {
            min: MIN_MINT_VALUE,
            got: attached,
        });
    }

    if request.master_bridge != config.master_bridge {
        return Err(ContractError::BadMasterBridge);
    }

    if !verify(
        deps.api,
        &request,
        signature.as_slice(),
        config.validator_pubkey.as_slice(),
    ) {
        return Err(ContractError::BadSignature);
    }

    deps.api.addr_validate(&request.receiver)?;
    mint_amount(request.amount)?;

    let mint_hash = compute_mint_hash(&request)?;
    let claim = try_claim(deps.as_ref(), &env, &config, &mint_hash)?;
    let msgs = claim_messages(&claim, &config, &mint_hash, query_id, &request)?;

    let record = match &claim {
        Claim::Claimed { record, .. } | Claim::AlreadyClaimed { record } => record.clone(),
    };
    match &claim {
        Claim::AlreadyClaimed { .. } => {
            PENDING_REPLAY.save(deps.storage, &HexBinary::from(mint_hash.as_slice()))?
        }
        Claim::Claimed { .. } => PENDING_REPLAY.remove(deps.storage),
    }

    Ok(Response::new()
        .add_submessages(msgs)
        .add_attribute("method", "mint")
        .add_attribute("query_id", query_id.to_string())
        .add_attribute("mint_hash", bytes32_to_hex(&mint_hash))
        .add_attribute("mint_record", record)
        .add_attribute("claim", claim_label(&claim)))
}

/// Turn the record's rejection of a replayed `Init` into a successful no-op.
///
/// The attached value stays with the bridge and nothing is minted. A replayed
/// `Init` that the record accepted means the claim was misjudged, so the whole
/// Mint is reverted.
pub fn reply_already_claimed(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let mint_hash = PENDING_REPLAY.may_load(deps.storage)?;
    PENDING_REPLAY.remove(deps.storage);

    let error = match msg.result {
        SubMsgResult::Err(error) => error,
        SubMsgResult::Ok(_) => return Err(ContractError::ReplayNotRejected),
    };

    let mut stats = STATS.load(deps.storage)?;
    stats.replays += 1;
    STATS.save(deps.storage, &stats)?;

    let mut res = Response::new()
        .add_attribute("method", "mint_replay")
        .add_attribute("claim", "already_claimed")
        .add_attribute("code", mint_record::ContractError::AlreadyInited.code().to_string())
        .add_attribute("record_error", error);
    if let Some(mint_hash) = mint_hash {
        res = res.add_attribute("mint_hash", format!("0x{}", mint_hash.to_hex()));
    }
    Ok(res)
}

/// Amount as the CW20 token can hold it.
pub(crate) fn mint_amount(amount: Uint256) -> Result<Uint128, ContractError> {
    let bytes = amount.to_be_bytes();
    let (high, low) = bytes.split_at(16);
    if high.iter().any(|b| *b != 0) {
        return Err(ContractError::InvalidAmount {
            reason: format!("{amount} does not fit in 128 bits"),
        });
    }
    let mut low_bytes = [0u8; 16];
    low_bytes.copy_from_slice(low);
    let amount = Uint128::new(u128::from_be_bytes(low_bytes));
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    Ok(amount)
}
