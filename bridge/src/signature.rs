//! Validator signature check for mint requests.

use bridge_common::{compute_mint_hash, MintRequest};
use cosmwasm_std::Api;

/// Ed25519 public key width
pub const PUBKEY_LEN: usize = 32;

/// Ed25519 signature width
pub const SIGNATURE_LEN: usize = 64;

/// Check `signature` against the mint hash of `request`.
///
/// Never errors: malformed keys or signatures, and requests that cannot be
/// encoded, all verify as false.
pub fn verify(api: &dyn Api, request: &MintRequest, signature: &[u8], pubkey: &[u8]) -> bool {
    if signature.len() != SIGNATURE_LEN || pubkey.len() != PUBKEY_LEN {
        return false;
    }
    let Ok(mint_hash) = compute_mint_hash(request) else {
        return false;
    };
    api.ed25519_verify(&mint_hash, signature, pubkey).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;
    use cosmwasm_std::{HexBinary, Uint128, Uint256};
    use ed25519_dalek::{Signer, SigningKey};

    fn request() -> MintRequest {
        MintRequest {
            id: Uint128::new(7),
            master_bridge: HexBinary::from(&[0xabu8; 20]),
            timestamp: 1_700_000_000,
            foreign_sender: HexBinary::from(&[0xcdu8; 20]),
            amount: Uint256::from(1_000u128),
            receiver: "terra1receiver".to_string(),
        }
    }

    fn key() -> SigningKey {
        SigningKey::from_bytes(&[42u8; 32])
    }

    fn sign(request: &MintRequest) -> Vec<u8> {
        let hash = compute_mint_hash(request).unwrap();
        key().sign(&hash).to_bytes().to_vec()
    }

    #[test]
    fn test_valid_signature() {
        let api = MockApi::default();
        let pubkey = key().verifying_key().to_bytes();
        assert!(verify(&api, &request(), &sign(&request()), &pubkey));
    }

    #[test]
    fn test_mutated_request_fails() {
        let api = MockApi::default();
        let pubkey = key().verifying_key().to_bytes();
        let signature = sign(&request());

        let mut mutated = request();
        mutated.amount = Uint256::from(1_001u128);
        assert!(!verify(&api, &mutated, &signature, &pubkey));

        let mut mutated = request();
        mutated.receiver = "terra1other".to_string();
        assert!(!verify(&api, &mutated, &signature, &pubkey));
    }

    #[test]
    fn test_other_key_fails() {
        let api = MockApi::default();
        let other = SigningKey::from_bytes(&[43u8; 32]).verifying_key().to_bytes();
        assert!(!verify(&api, &request(), &sign(&request()), &other));
    }

    #[test]
    fn test_malformed_inputs_fail() {
        let api = MockApi::default();
        let pubkey = key().verifying_key().to_bytes();
        let signature = sign(&request());

        assert!(!verify(&api, &request(), &[0u8; 64], &pubkey));
        assert!(!verify(&api, &request(), &signature[..63], &pubkey));
        assert!(!verify(&api, &request(), &signature, &pubkey[..31]));

        let mut unencodable = request();
        unencodable.receiver = String::new();
        assert!(!verify(&api, &unencodable, &signature, &pubkey));
    }
}
