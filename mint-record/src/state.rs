use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary};
use cw_storage_plus::Item;

pub const CONTRACT_NAME: &str = "crates.io:mint-record";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The record's whole state; `initialized` flips to true exactly once.
#[cw_serde]
pub struct MintRecord {
    pub initialized: bool,
    /// 32-byte mint hash this record stands for
    pub mint_hash: HexBinary,
    /// Bridge that instantiated the record
    pub bridge: Addr,
}

pub const RECORD: Item<MintRecord> = Item::new("record");
