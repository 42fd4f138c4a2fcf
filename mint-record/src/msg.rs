use bridge_common::MintRequest;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary};

#[cw_serde]
pub struct InstantiateMsg {
    /// 32-byte mint hash, also used as the instantiate2 salt
    pub mint_hash: HexBinary,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mark the record initialized and call the owning bridge back.
    /// Only the owning bridge may send it, and only once.
    Init { query_id: u64, request: MintRequest },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the record's stored data
    #[returns(MintRecordResponse)]
    StoredData {},
}

#[cw_serde]
pub struct MintRecordResponse {
    pub initialized: bool,
    pub mint_hash: HexBinary,
    pub bridge: Addr,
}
