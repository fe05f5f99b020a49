use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::account::encoding;
use crate::account::{strip_hrp, AccountType, PubKey};
use crate::models::errors::AccountError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    account_type: AccountType,
    body: [u8; Address::LEN],
}

impl Address {
    pub const LEN: usize = 20;

    pub fn new(account_type: AccountType, body: &[u8]) -> Result<Self, AccountError> {
        let body = body
            .try_into()
            .map_err(|_| AccountError::InvalidLength {
                kind: "address",
                expected: Self::LEN,
                got: body.len(),
            })?;

        Ok(Self { account_type, body })
    }

    /// RIPEMD160(SHA256(key)), keeping the key's account type.
    pub fn from_pub_key(pub_key: &PubKey) -> Self {
        let digest = Ripemd160::digest(Sha256::digest(pub_key.body()));
        let mut body = [0u8; Self::LEN];
        body.copy_from_slice(&digest);

        Self {
            account_type: pub_key.account_type(),
            body,
        }
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn to_bech32(&self, prefix: &str) -> Result<String, AccountError> {
        encoding::encode(&self.account_type.hrp(prefix), &self.body)
    }

    /// Parses a bech32 address issued under `prefix`; the HRP remainder selects the type.
    pub fn from_bech32(text: &str, prefix: &str) -> Result<Self, AccountError> {
        let (hrp, data) = encoding::decode(text)?;
        let account_type = AccountType::from_suffix(strip_hrp(&hrp, prefix)?)?;

        Self::new(account_type, &data)
    }
}
