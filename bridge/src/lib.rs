//! Slave Bridge Contract - Validator-Signed Mints for a CW20 Token
//!
//! The slave side of a one-directional bridge. Mints originate on a foreign
//! master chain and are authorized by a single validator key; burns travel the
//! other way and are picked up by relayers from emitted events.
//!
//! # Mint Flow
//! 1. A relayer submits `Mint` with the validator's signature over the mint hash
//! 2. The bridge checks state, attached value, master bridge and signature
//! 3. The mint record for the hash is instantiated at its `instantiate2` address
//!    and initialized; it calls the bridge back, which mints to the receiver
//! 4. Resubmitting the same request finds the record initialized and becomes a
//!    successful no-op
//!
//! # Burn Flow
//! 1. A holder sends tokens to the bridge with `ReceiveMsg::Burn`
//! 2. The bridge burns them and emits a `bridge_burn` event for relayers
//!
//! # Security
//! - One validator key, one admin, replaced only with the whole config
//! - Replay protection without unbounded storage in the bridge
//! - Stopped state rejects both mints and burns

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod replay_guard;
pub mod signature;
pub mod state;

pub use crate::error::ContractError;
