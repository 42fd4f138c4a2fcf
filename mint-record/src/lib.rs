//! Mint Record Contract
//!
//! One instance exists per mint hash the Slave Bridge has processed. The bridge
//! instantiates it with `instantiate2` using the mint hash as salt, so its
//! address is a pure function of the bridge, this contract's code and the hash.
//! The record accepts a single `Init` from its owning bridge and reports back;
//! any later `Init` fails with `AlreadyInited`, which is what makes a mint
//! execute at most once.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
