//! Error types for the Slave Bridge contract
//!
//! Every rejection carries a stable numeric cause, available through
//! [`ContractError::code`] and repeated in the message text.

use bridge_common::CodecError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================
    #[error("Bad sender: only the bridge token contract can deliver burns (code 1001)")]
    BadSenderJw,

    #[error("Bad sender: caller is not the mint record for this request (code 1002)")]
    BadSenderMintRecord,

    #[error("Bad sender: only admin can change the config (code 1006)")]
    BadSenderAdmin,

    // ========================================================================
    // Mint Validation Errors
    // ========================================================================
    #[error("Invalid validator signature (code 1003)")]
    BadSignature,

    #[error("Mint request is bound to another master bridge (code 1004)")]
    BadMasterBridge,

    #[error("Attached value too low: need {min} uluna, got {got} uluna (code 1005)")]
    BadMsgValue { min: Uint128, got: Uint128 },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Bridge State Errors
    // ========================================================================
    #[error("Bridge is stopped (code 1007)")]
    Stopped,

    #[error("Invalid config: {reason} (code 1006)")]
    InvalidConfig { reason: String },

    #[error("Mint record accepted a replayed init")]
    ReplayNotRejected,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },
}

impl ContractError {
    /// Stable numeric cause; 0 for errors without one.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::BadSenderJw => 1001,
            ContractError::BadSenderMintRecord => 1002,
            ContractError::BadSignature => 1003,
            ContractError::BadMasterBridge => 1004,
            ContractError::BadMsgValue { .. } => 1005,
            ContractError::BadSenderAdmin | ContractError::InvalidConfig { .. } => 1006,
            ContractError::Stopped => 1007,
            ContractError::Std(_)
            | ContractError::Codec(_)
            | ContractError::InvalidAmount { .. }
            | ContractError::ReplayNotRejected
            | ContractError::UnknownReplyId { .. } => 0,
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        ContractError::InvalidConfig {
            reason: reason.into(),
        }
    }
}
