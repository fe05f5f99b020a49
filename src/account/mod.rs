//! Chain account codec: address and public key values, their bech32 text form and the
//! Amino type prefix carried by encoded public keys.

pub mod address;
pub mod amino;
pub mod encoding;
pub mod pub_key;

pub use address::Address;
pub use pub_key::PubKey;

use crate::models::errors::AccountError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AccountType {
    Account,
    ValidatorConsensus,
    ValidatorOperator,
}

impl AccountType {
    /// Suffix appended to the network prefix to form the human-readable part.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Account => "",
            Self::ValidatorConsensus => "valcons",
            Self::ValidatorOperator => "valoper",
        }
    }

    pub fn from_suffix(suffix: &str) -> Result<Self, AccountError> {
        match suffix {
            "" => Ok(Self::Account),
            "valcons" => Ok(Self::ValidatorConsensus),
            "valoper" => Ok(Self::ValidatorOperator),
            _ => Err(AccountError::UnknownTypeSuffix {
                suffix: suffix.to_string(),
            }),
        }
    }

    pub fn hrp(self, prefix: &str) -> String {
        format!("{}{}", prefix, self.suffix())
    }
}

/// Returns the part of `hrp` that follows the network `prefix`.
pub(crate) fn strip_hrp<'a>(hrp: &'a str, prefix: &str) -> Result<&'a str, AccountError> {
    hrp.strip_prefix(prefix)
        .ok_or_else(|| AccountError::PrefixMismatch {
            hrp: hrp.to_string(),
            prefix: prefix.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_round_trip() {
        for account_type in [
            AccountType::Account,
            AccountType::ValidatorConsensus,
            AccountType::ValidatorOperator,
        ] {
            assert_eq!(
                AccountType::from_suffix(account_type.suffix()).unwrap(),
                account_type
            );
        }
        assert!(AccountType::from_suffix("valfoo").is_err());
        assert_eq!(AccountType::ValidatorOperator.hrp("link"), "linkvaloper");
    }
}
