use bridge_common::CodecError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("Mint record already initialized (code 2001)")]
    AlreadyInited,

    #[error("Bad sender: only the owning bridge can initialize (code 2002)")]
    BadSender,

    #[error("Mint request does not match the record's mint hash (code 2003)")]
    MintHashMismatch,
}

impl ContractError {
    /// Stable numeric cause reported to callers.
    pub fn code(&self) -> u32 {
        match self {
            ContractError::AlreadyInited => 2001,
            ContractError::BadSender => 2002,
            ContractError::MintHashMismatch => 2003,
            ContractError::Std(_) | ContractError::Codec(_) => 0,
        }
    }
}
