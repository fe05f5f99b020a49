use crate::models::errors::TokenIdError;

pub const TOKEN_TYPE_LEN: usize = 8;
pub const TOKEN_ID_LEN: usize = 16;

/// First 8 hex digits of a collection token id.
pub fn token_type(token_id: &str) -> Result<&str, TokenIdError> {
    token_id
        .get(..TOKEN_TYPE_LEN)
        .filter(|token_type| is_hex(token_type))
        .ok_or_else(|| TokenIdError::InvalidTokenType {
            value: token_id.to_string(),
        })
}

/// Hex digits 8..16 of a collection token id.
pub fn token_index(token_id: &str) -> Result<&str, TokenIdError> {
    token_id
        .get(TOKEN_TYPE_LEN..TOKEN_ID_LEN)
        .filter(|token_index| is_hex(token_index))
        .ok_or_else(|| TokenIdError::InvalidTokenId {
            value: token_id.to_string(),
        })
}

/// Fungible token types start with `0`, non-fungible ones with `1`.
pub fn is_fungible(token_type_or_id: &str) -> bool {
    token_type_or_id.starts_with('0')
}

fn is_hex(text: &str) -> bool {
    text.bytes().all(|byte| byte.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_type_and_index() {
        assert_eq!(token_type("1000000100000003").unwrap(), "10000001");
        assert_eq!(token_index("1000000100000003").unwrap(), "00000003");
        assert_eq!(token_type("0000000100000001").unwrap(), "00000001");
        assert_eq!(token_type("0000000f").unwrap(), "0000000f");
    }

    #[test]
    fn test_rejects_short_ids() {
        assert_eq!(
            token_type("1000"),
            Err(TokenIdError::InvalidTokenType {
                value: "1000".to_string()
            })
        );
        assert_eq!(
            token_index("10000001"),
            Err(TokenIdError::InvalidTokenId {
                value: "10000001".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_non_hex_ids() {
        assert!(token_type("1000000z00000003").is_err());
        assert_eq!(token_index("1000000z00000003").unwrap(), "00000003");
        assert!(token_index("100000010000000z").is_err());
    }

    #[test]
    fn test_is_fungible() {
        assert!(is_fungible("00000001"));
        assert!(!is_fungible("10000001"));
        assert!(!is_fungible(""));
    }
}
