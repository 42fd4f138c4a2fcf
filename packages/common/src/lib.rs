//! Common - Shared Types and Utilities for the Slave Bridge Contracts
//!
//! This package provides the pieces both contracts must agree on byte for byte:
//! the mint request value object, its canonical encoding, the mint hash, and the
//! callback message a mint record sends back to its owning bridge.

pub mod codec;
pub mod hash;
pub mod msg;

pub use codec::{decode_mint_request, encode_mint_request, CodecError, MintRequest};
pub use hash::{bytes32_to_hex, compute_mint_hash, keccak256};
pub use msg::BridgeCallbackMsg;
