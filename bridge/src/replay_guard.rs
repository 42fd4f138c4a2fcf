//! Replay guard built on content-addressed mint records.
//!
//! Each mint hash maps to exactly one mint record contract, instantiated with
//! `instantiate2` using the hash as salt. The address depends only on the
//! record code checksum, this bridge and the hash, so it can be recomputed at
//! any time without storage. A record accepts `Init` once; the first Mint to
//! initialize it claims the hash.

use bridge_common::MintRequest;
use cosmwasm_std::{
    instantiate2_address, to_json_binary, Addr, Binary, Deps, Env, HexBinary, StdError,
    StdResult, SubMsg, WasmMsg,
};
use mint_record::msg::{
    ExecuteMsg as RecordExecuteMsg, InstantiateMsg as RecordInstantiateMsg,
    MintRecordResponse as RecordData, QueryMsg as RecordQueryMsg,
};

use crate::state::{BridgeConfig, REPLY_ALREADY_CLAIMED};

/// Outcome of trying to claim a mint hash
#[derive(Debug, Clone, PartialEq)]
pub enum Claim {
    /// No initialized record exists; this Mint owns the hash
    Claimed { record: Addr, exists: bool },
    /// The record is already initialized; the Mint is a replay
    AlreadyClaimed { record: Addr },
}

/// Deterministic address of the mint record for `mint_hash`.
pub fn mint_record_address(
    deps: Deps,
    env: &Env,
    mint_record_code_id: u64,
    mint_hash: &[u8; 32],
) -> StdResult<Addr> {
    let code_info = deps.querier.query_wasm_code_info(mint_record_code_id)?;
    let creator = deps.api.addr_canonicalize(env.contract.address.as_str())?;
    let canonical = instantiate2_address(code_info.checksum.as_slice(), &creator, mint_hash)
        .map_err(|e| StdError::generic_err(format!("instantiate2 address: {e}")))?;
    deps.api.addr_humanize(&canonical)
}

/// Stored data of the record at `record`, `None` when nothing is deployed there.
pub fn load_record(deps: Deps, record: &Addr) -> Option<RecordData> {
    deps.querier
        .query_wasm_smart(record.to_string(), &RecordQueryMsg::StoredData {})
        .ok()
}

/// Look up the record for `mint_hash` and decide whether this Mint claims it.
pub fn try_claim(
    deps: Deps,
    env: &Env,
    config: &BridgeConfig,
    mint_hash: &[u8; 32],
) -> StdResult<Claim> {
    let record = mint_record_address(deps, env, config.mint_record_code_id, mint_hash)?;
    Ok(match load_record(deps, &record) {
        None => Claim::Claimed {
            record,
            exists: false,
        },
        Some(data) if !data.initialized => Claim::Claimed {
            record,
            exists: true,
        },
        Some(_) => Claim::AlreadyClaimed { record },
    })
}

/// Messages carrying out a claim.
///
/// A fresh claim instantiates the record when needed and initializes it; the
/// record then calls the bridge back. A replay still sends `Init`, expecting
/// the record to reject it, and catches the failure in `reply`.
pub fn claim_messages(
    claim: &Claim,
    config: &BridgeConfig,
    mint_hash: &[u8; 32],
    query_id: u64,
    request: &MintRequest,
) -> StdResult<Vec<SubMsg>> {
    let init = |record: &Addr| -> StdResult<WasmMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: record.to_string(),
            msg: to_json_binary(&RecordExecuteMsg::Init {
                query_id,
                request: request.clone(),
            })?,
            funds: vec![],
        })
    };

    match claim {
        Claim::Claimed { record, exists } => {
            let mut msgs = Vec::with_capacity(2);
            if !exists {
                msgs.push(SubMsg::new(WasmMsg::Instantiate2 {
                    admin: None,
                    code_id: config.mint_record_code_id,
                    label: format!("mint-record-{}", hex::encode(mint_hash)),
                    msg: to_json_binary(&RecordInstantiateMsg {
                        mint_hash: HexBinary::from(mint_hash.as_slice()),
                    })?,
                    funds: vec![],
                    salt: Binary::from(mint_hash.as_slice()),
                }));
            }
            msgs.push(SubMsg::new(init(record)?));
            Ok(msgs)
        }
        Claim::AlreadyClaimed { record } => Ok(vec![SubMsg::reply_on_error(
            init(record)?,
            REPLY_ALREADY_CLAIMED,
        )]),
    }
}

/// Attribute value naming the outcome of a claim.
pub fn claim_label(claim: &Claim) -> &'static str {
    match claim {
        Claim::Claimed { .. } => "claimed",
        Claim::AlreadyClaimed { .. } => "already_claimed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{ReplyOn, Uint128, Uint256};

    use crate::state::BridgeState;

    fn config() -> BridgeConfig {
        BridgeConfig {
            state: BridgeState::Running,
            validator_pubkey: HexBinary::from(&[1u8; 32]),
            master_bridge: HexBinary::from(&[2u8; 20]),
            admin: Addr::unchecked("admin"),
            token_contract: Addr::unchecked("token"),
            token_code_id: 1,
            mint_record_code_id: 2,
        }
    }

    fn request() -> MintRequest {
        MintRequest {
            id: Uint128::new(1),
            master_bridge: HexBinary::from(&[2u8; 20]),
            timestamp: 0,
            foreign_sender: HexBinary::from(&[3u8; 20]),
            amount: Uint256::from(10u128),
            receiver: "receiver".to_string(),
        }
    }

    #[test]
    fn test_fresh_claim_instantiates_then_inits() {
        let claim = Claim::Claimed {
            record: Addr::unchecked("record"),
            exists: false,
        };
        let msgs = claim_messages(&claim, &config(), &[9u8; 32], 4, &request()).unwrap();
        assert_eq!(msgs.len(), 2);

        match &msgs[0].msg {
            cosmwasm_std::CosmosMsg::Wasm(WasmMsg::Instantiate2 { code_id, salt, .. }) => {
                assert_eq!(*code_id, 2);
                assert_eq!(salt.as_slice(), &[9u8; 32]);
            }
            other => panic!("unexpected message: {other:?}"),
        }
        match &msgs[1].msg {
            cosmwasm_std::CosmosMsg::Wasm(WasmMsg::Execute { contract_addr, .. }) => {
                assert_eq!(contract_addr, "record");
            }
            other => panic!("unexpected message: {other:?}"),
        }
        assert_eq!(msgs[1].reply_on, ReplyOn::Never);
    }

    #[test]
    fn test_existing_uninitialized_record_is_only_inited() {
        let claim = Claim::Claimed {
            record: Addr::unchecked("record"),
            exists: true,
        };
        let msgs = claim_messages(&claim, &config(), &[9u8; 32], 4, &request()).unwrap();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].reply_on, ReplyOn::Never);
    }

    #[test]
    fn test_replay_inits_with_reply_on_error() {
        let claim = Claim::AlreadyClaimed {
            record: Addr::unchecked("record"),
        };
        let msgs = claim_messages(&claim, &config(), &[9u8; 32], 4, &request()).unwrap();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].id, REPLY_ALREADY_CLAIMED);
        assert_eq!(msgs[0].reply_on, ReplyOn::Error);
        assert_eq!(claim_label(&claim), "already_claimed");
    }
}
