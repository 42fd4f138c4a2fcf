//! Execute handlers for the Slave Bridge contract.
//!
//! - `mint` - validator-signed mints and the replay reply
//! - `callback` - the mint record callback that performs the mint
//! - `burn` - CW20 receive hook burning tokens for the foreign chain
//! - `config` - whole-record configuration replacement

mod burn;
mod callback;
mod config;
mod mint;

pub use burn::*;
pub use callback::*;
pub use config::*;
pub use mint::*;
