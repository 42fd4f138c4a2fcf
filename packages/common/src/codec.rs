//! Canonical encoding of mint requests
//!
//! The validator signs the keccak256 of these bytes and the bridge keys its
//! replay guard on the same digest, so the layout must never change.
//!
//! # Byte Layout (97 + n bytes, big-endian)
//! - Bytes 0-15:   id (uint128)
//! - Bytes 16-35:  master bridge id (20 bytes)
//! - Bytes 36-43:  timestamp (uint64)
//! - Bytes 44-63:  foreign sender (20 bytes)
//! - Bytes 64-95:  amount (uint256)
//! - Byte  96:     receiver length n (1..=255)
//! - Bytes 97-:    receiver address (UTF-8, n bytes)

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{HexBinary, Uint128, Uint256};
use thiserror::Error;

/// Width of a foreign-chain address (master bridge id, foreign sender)
pub const FOREIGN_ADDRESS_LEN: usize = 20;

/// Width of the foreign receiver word carried by a burn
pub const FOREIGN_RECEIVER_LEN: usize = 32;

/// Longest receiver address the length prefix can describe
pub const MAX_RECEIVER_LEN: usize = u8::MAX as usize;

const ID_OFFSET: usize = 0;
const MASTER_BRIDGE_OFFSET: usize = 16;
const TIMESTAMP_OFFSET: usize = 36;
const FOREIGN_SENDER_OFFSET: usize = 44;
const AMOUNT_OFFSET: usize = 64;
const RECEIVER_LEN_OFFSET: usize = 96;
const RECEIVER_OFFSET: usize = 97;

/// A cross-chain mint attested by the validator.
///
/// Two requests with identical fields are the same logical mint.
#[cw_serde]
pub struct MintRequest {
    /// Mint id assigned by the master bridge
    pub id: Uint128,
    /// Master bridge id on the foreign chain (20 bytes)
    pub master_bridge: HexBinary,
    /// Foreign-chain timestamp of the originating event (seconds)
    pub timestamp: u64,
    /// Sender on the foreign chain (20 bytes)
    pub foreign_sender: HexBinary,
    /// Amount to mint, in the token's smallest unit
    pub amount: Uint256,
    /// Receiver address on this chain
    pub receiver: String,
}

#[derive(Error, Debug, PartialEq)]
pub enum CodecError {
    #[error("Invalid {field} length: expected {expected} bytes, got {got}")]
    InvalidFieldLength {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Invalid receiver: {reason}")]
    InvalidReceiver { reason: String },

    #[error("Invalid foreign receiver: {reason}")]
    InvalidForeignReceiver { reason: String },

    #[error("Truncated mint request: need {need} bytes, got {got}")]
    Truncated { need: usize, got: usize },

    #[error("Unexpected {extra} trailing bytes after mint request")]
    TrailingBytes { extra: usize },
}

/// Serialize a mint request into its canonical bytes.
pub fn encode_mint_request(request: &MintRequest) -> Result<Vec<u8>, CodecError> {
    let master_bridge = foreign_address("master_bridge", request.master_bridge.as_slice())?;
    let foreign_sender = foreign_address("foreign_sender", request.foreign_sender.as_slice())?;
    let receiver = request.receiver.as_bytes();
    check_receiver_len(receiver.len())?;

    let mut out = Vec::with_capacity(RECEIVER_OFFSET + receiver.len());
    out.extend_from_slice(&request.id.u128().to_be_bytes());
    out.extend_from_slice(&master_bridge);
    out.extend_from_slice(&request.timestamp.to_be_bytes());
    out.extend_from_slice(&foreign_sender);
    out.extend_from_slice(&request.amount.to_be_bytes());
    // length checked above, fits in one byte
    out.push(receiver.len() as u8);
    out.extend_from_slice(receiver);
    Ok(out)
}

/// Parse canonical bytes back into a mint request.
pub fn decode_mint_request(data: &[u8]) -> Result<MintRequest, CodecError> {
    if data.len() < RECEIVER_OFFSET {
        return Err(CodecError::Truncated {
            need: RECEIVER_OFFSET,
            got: data.len(),
        });
    }

    let receiver_len = data[RECEIVER_LEN_OFFSET] as usize;
    check_receiver_len(receiver_len)?;

    let end = RECEIVER_OFFSET + receiver_len;
    if data.len() < end {
        return Err(CodecError::Truncated {
            need: end,
            got: data.len(),
        });
    }
    if data.len() > end {
        return Err(CodecError::TrailingBytes {
            extra: data.len() - end,
        });
    }

    let receiver = String::from_utf8(data[RECEIVER_OFFSET..end].to_vec()).map_err(|_| {
        CodecError::InvalidReceiver {
            reason: "not valid UTF-8".to_string(),
        }
    })?;

    Ok(MintRequest {
        id: Uint128::new(u128::from_be_bytes(read_array(data, ID_OFFSET))),
        master_bridge: HexBinary::from(&data[MASTER_BRIDGE_OFFSET..TIMESTAMP_OFFSET]),
        timestamp: u64::from_be_bytes(read_array(data, TIMESTAMP_OFFSET)),
        foreign_sender: HexBinary::from(&data[FOREIGN_SENDER_OFFSET..AMOUNT_OFFSET]),
        amount: Uint256::from_be_bytes(read_array(data, AMOUNT_OFFSET)),
        receiver,
    })
}

/// Check a 20-byte foreign-chain address.
pub fn foreign_address(field: &'static str, bytes: &[u8]) -> Result<[u8; 20], CodecError> {
    if bytes.len() != FOREIGN_ADDRESS_LEN {
        return Err(CodecError::InvalidFieldLength {
            field,
            expected: FOREIGN_ADDRESS_LEN,
            got: bytes.len(),
        });
    }
    let mut out = [0u8; FOREIGN_ADDRESS_LEN];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Check the 256-bit foreign receiver word of a burn.
///
/// The word holds a 160-bit address, so the top 12 bytes must be zero.
pub fn foreign_receiver(bytes: &[u8]) -> Result<[u8; 32], CodecError> {
    if bytes.len() != FOREIGN_RECEIVER_LEN {
        return Err(CodecError::InvalidFieldLength {
            field: "foreign_receiver",
            expected: FOREIGN_RECEIVER_LEN,
            got: bytes.len(),
        });
    }
    let padding = FOREIGN_RECEIVER_LEN - FOREIGN_ADDRESS_LEN;
    if bytes[..padding].iter().any(|b| *b != 0) {
        return Err(CodecError::InvalidForeignReceiver {
            reason: "value does not fit in 160 bits".to_string(),
        });
    }
    let mut out = [0u8; FOREIGN_RECEIVER_LEN];
    out.copy_from_slice(bytes);
    Ok(out)
}

fn check_receiver_len(len: usize) -> Result<(), CodecError> {
    if len == 0 {
        return Err(CodecError::InvalidReceiver {
            reason: "empty".to_string(),
        });
    }
    if len > MAX_RECEIVER_LEN {
        return Err(CodecError::InvalidReceiver {
            reason: format!("{} bytes exceeds {}", len, MAX_RECEIVER_LEN),
        });
    }
    Ok(())
}

// Callers check the slice bounds first.
fn read_array<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&data[offset..offset + N]);
    out
}
