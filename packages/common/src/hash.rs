//! Mint hash computation
//!
//! The mint hash is `keccak256(encode_mint_request(request))`. The signature is
//! never part of the preimage, so the validator can sign the hash and the
//! bridge can key its replay guard on it without the two disagreeing.

use tiny_keccak::{Hasher, Keccak};

use crate::codec::{encode_mint_request, CodecError, MintRequest};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the mint hash of a request.
pub fn compute_mint_hash(request: &MintRequest) -> Result<[u8; 32], CodecError> {
    Ok(keccak256(&encode_mint_request(request)?))
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a 32-byte hash from a slice of any length
pub fn bytes32(bytes: &[u8]) -> Result<[u8; 32], CodecError> {
    bytes.try_into().map_err(|_| CodecError::InvalidFieldLength {
        field: "mint_hash",
        expected: 32,
        got: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::{HexBinary, Uint128, Uint256};

    fn sample_request() -> MintRequest {
        MintRequest {
            id: Uint128::new(7),
            master_bridge: HexBinary::from(&[0x11u8; 20]),
            timestamp: 1_700_000_000,
            foreign_sender: HexBinary::from(&[0x22u8; 20]),
            amount: Uint256::from(1_000_000u128),
            receiver: "terra1receiver".to_string(),
        }
    }

    #[test]
    fn test_keccak256_basic() {
        // keccak256("hello") = 0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8
        let result = keccak256(b"hello");
        assert_eq!(
            bytes32_to_hex(&result),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_mint_hash_is_hash_of_canonical_bytes() {
        let request = sample_request();
        let expected = keccak256(&encode_mint_request(&request).unwrap());
        assert_eq!(compute_mint_hash(&request).unwrap(), expected);
    }

    #[test]
    fn test_equal_requests_hash_identically() {
        assert_eq!(
            compute_mint_hash(&sample_request()).unwrap(),
            compute_mint_hash(&sample_request()).unwrap()
        );
    }

    #[test]
    fn test_every_field_changes_the_hash() {
        let base = compute_mint_hash(&sample_request()).unwrap();

        let mutations: [fn(&mut MintRequest); 6] = [
            |r: &mut MintRequest| r.id = Uint128::new(8),
            |r: &mut MintRequest| r.master_bridge = HexBinary::from(&[0x12u8; 20]),
            |r: &mut MintRequest| r.timestamp += 1,
            |r: &mut MintRequest| r.foreign_sender = HexBinary::from(&[0x23u8; 20]),
            |r: &mut MintRequest| r.amount = Uint256::from(1_000_001u128),
            |r: &mut MintRequest| r.receiver = "terra1other".to_string(),
        ];

        for mutate in mutations {
            let mut request = sample_request();
            mutate(&mut request);
            assert_ne!(compute_mint_hash(&request).unwrap(), base);
        }
    }

    #[test]
    fn test_bytes32_parsing() {
        let hash = keccak256(b"hello");
        assert_eq!(bytes32(&hash).unwrap(), hash);
        assert_eq!(
            bytes32(&hash[..31]).unwrap_err(),
            CodecError::InvalidFieldLength {
                field: "mint_hash",
                expected: 32,
                got: 31,
            }
        );
    }
}
