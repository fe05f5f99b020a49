use sha2::{Digest, Sha256};

use crate::models::errors::AccountError;

pub const PUB_KEY_SECP256K1: &str = "tendermint/PubKeySecp256k1";

/// Largest body the prefix scheme accepts: one compressed secp256k1 key.
pub const MAX_BODY_LEN: usize = 33;

const PREFIX_LEN: usize = 4;
const DISAMBIGUATION_LEN: usize = 3;

/// Derives the Amino registration prefix for `type_name` followed by the length of `body`.
///
/// Only the length of `body` affects the result.
pub fn amino_prefix(type_name: &str, body: &[u8]) -> Result<Vec<u8>, AccountError> {
    if body.len() > MAX_BODY_LEN {
        return Err(AccountError::AminoBodyTooLarge {
            len: body.len(),
            max: MAX_BODY_LEN,
        });
    }

    let hash = Sha256::digest(type_name.as_bytes());
    let not_found = || AccountError::AminoPrefixNotFound {
        name: type_name.to_string(),
    };

    let disambiguation_start = first_non_zero(&hash, 0).ok_or_else(not_found)?;
    let prefix_start =
        first_non_zero(&hash, disambiguation_start + DISAMBIGUATION_LEN).ok_or_else(not_found)?;
    let prefix = hash
        .get(prefix_start..prefix_start + PREFIX_LEN)
        .ok_or_else(not_found)?;

    let mut output = Vec::with_capacity(PREFIX_LEN + 1);
    output.extend_from_slice(prefix);
    put_uvarint(&mut output, body.len() as u64);
    Ok(output)
}

fn first_non_zero(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .iter()
        .skip(from)
        .position(|byte| *byte != 0)
        .map(|offset| from + offset)
}

fn put_uvarint(output: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        output.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    output.push(value as u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secp256k1_prefix() {
        let prefix = amino_prefix(PUB_KEY_SECP256K1, &[0u8; 33]).unwrap();
        assert_eq!(prefix, vec![0xeb, 0x5a, 0xe9, 0x87, 0x21]);
    }

    #[test]
    fn test_prefix_depends_on_length_only() {
        let zeros = amino_prefix(PUB_KEY_SECP256K1, &[0u8; 20]).unwrap();
        let ones = amino_prefix(PUB_KEY_SECP256K1, &[1u8; 20]).unwrap();
        assert_eq!(zeros, ones);
        assert_eq!(zeros.last(), Some(&20));
    }

    #[test]
    fn test_rejects_oversized_body() {
        let err = amino_prefix(PUB_KEY_SECP256K1, &[0u8; 34]).unwrap_err();
        assert!(matches!(
            err,
            AccountError::AminoBodyTooLarge { len: 34, max: 33 }
        ));
    }

    #[test]
    fn test_uvarint() {
        let mut out = Vec::new();
        put_uvarint(&mut out, 300);
        assert_eq!(out, vec![0xac, 0x02]);
    }
}
