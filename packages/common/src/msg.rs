//! Messages exchanged between the bridge and its mint records.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::HexBinary;

use crate::codec::MintRequest;

/// Callback a mint record sends to its owning bridge once it is initialized.
///
/// Serializes exactly like the bridge's own `ExecuteMsg::MintRecordCallback`,
/// which lets the record crate send it without depending on the bridge.
#[cw_serde]
pub enum BridgeCallbackMsg {
    MintRecordCallback {
        query_id: u64,
        /// 32-byte mint hash the record was created for
        mint_hash: HexBinary,
        /// The request being minted
        request: MintRequest,
    },
}
