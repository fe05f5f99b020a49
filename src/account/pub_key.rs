use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::account::amino::{self, PUB_KEY_SECP256K1};
use crate::account::encoding;
use crate::account::{strip_hrp, AccountType, Address};
use crate::models::errors::AccountError;

const PUB_SUFFIX: &str = "pub";

/// Compressed secp256k1 public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PubKey {
    account_type: AccountType,
    body: [u8; PubKey::LEN],
}

impl PubKey {
    pub const LEN: usize = 33;

    pub fn new(account_type: AccountType, body: &[u8]) -> Result<Self, AccountError> {
        let body = body
            .try_into()
            .map_err(|_| AccountError::InvalidLength {
                kind: "public key",
                expected: Self::LEN,
                got: body.len(),
            })?;

        Ok(Self { account_type, body })
    }

    pub fn from_base64(account_type: AccountType, encoded: &str) -> Result<Self, AccountError> {
        let bytes = STANDARD.decode(encoded)?;
        Self::new(account_type, &bytes)
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn to_address(&self) -> Address {
        Address::from_pub_key(self)
    }

    pub fn to_bech32(&self, prefix: &str) -> Result<String, AccountError> {
        let hrp = format!("{}{}", self.account_type.hrp(prefix), PUB_SUFFIX);
        let mut data = amino::amino_prefix(PUB_KEY_SECP256K1, &self.body)?;
        data.extend_from_slice(&self.body);

        encoding::encode(&hrp, &data)
    }

    pub fn from_bech32(text: &str, prefix: &str) -> Result<Self, AccountError> {
        let (hrp, data) = encoding::decode(text)?;
        let type_hrp = hrp
            .strip_suffix(PUB_SUFFIX)
            .ok_or_else(|| AccountError::UnknownTypeSuffix { suffix: hrp.clone() })?;
        let account_type = AccountType::from_suffix(strip_hrp(type_hrp, prefix)?)?;

        let expected = amino::amino_prefix(PUB_KEY_SECP256K1, &[0u8; Self::LEN])?;
        let body = data
            .strip_prefix(expected.as_slice())
            .ok_or_else(|| AccountError::AminoPrefixMismatch {
                name: PUB_KEY_SECP256K1.to_string(),
            })?;

        Self::new(account_type, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BASE64: &str = "AgECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8g";
    const SAMPLE_BECH32: &str =
        "tlinkpub1addwnpepqgqsyqcyq5rqwzqfpg9scrgwpugpzysnzs23v9ccrydpk8qarc0jqcxye2a";

    #[test]
    fn test_from_base64() {
        let key = PubKey::from_base64(AccountType::Account, SAMPLE_BASE64).unwrap();
        assert_eq!(key.body()[0], 0x02);
        assert_eq!(key.body()[32], 32);
    }

    #[test]
    fn test_from_base64_rejects_short_key() {
        let err = PubKey::from_base64(AccountType::Account, "AgEC").unwrap_err();
        assert!(matches!(
            err,
            AccountError::InvalidLength { expected: 33, got: 3, .. }
        ));
    }

    #[test]
    fn test_bech32() {
        let key = PubKey::from_base64(AccountType::Account, SAMPLE_BASE64).unwrap();
        assert_eq!(key.to_bech32("tlink").unwrap(), SAMPLE_BECH32);
        assert_eq!(PubKey::from_bech32(SAMPLE_BECH32, "tlink").unwrap(), key);
    }
}
