use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid bit group width: from {from_bits} to {to_bits} (each must be 1..=8)")]
    InvalidWidth { from_bits: u32, to_bits: u32 },
    #[error("Input value {value:#04x} does not fit in {from_bits} bits")]
    ValueOutOfRange { value: u8, from_bits: u32 },
    #[error("Invalid padding: {leftover} leftover bits are not a zero-filled partial group")]
    InvalidPadding { leftover: u32 },
}

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Invalid {kind} length: expected {expected} bytes, got {got}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("Human-readable part '{hrp}' does not start with prefix '{prefix}'")]
    PrefixMismatch { hrp: String, prefix: String },
    #[error("Unknown account type suffix: '{suffix}'")]
    UnknownTypeSuffix { suffix: String },
    #[error("Amino body too large: {len} bytes, at most {max} supported")]
    AminoBodyTooLarge { len: usize, max: usize },
    #[error("Amino prefix not found in hash of type name '{name}'")]
    AminoPrefixNotFound { name: String },
    #[error("Amino prefix mismatch for type '{name}'")]
    AminoPrefixMismatch { name: String },
    #[error("Unsupported public key type: {key_type}")]
    UnsupportedKeyType { key_type: String },
    #[error("Signature has no public key")]
    MissingPubKey,
    #[error("Unsupported bech32 variant: {variant}")]
    UnsupportedVariant { variant: String },
    #[error("Bech32 error: {0}")]
    Bech32(#[from] bech32::Error),
    #[error("Bit conversion error: {0}")]
    Codec(#[from] CodecError),
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenIdError {
    #[error("Invalid token type: '{value}'")]
    InvalidTokenType { value: String },
    #[error("Invalid token id: '{value}'")]
    InvalidTokenId { value: String },
}

#[derive(Error, Debug)]
pub enum TxResultError {
    #[error("Invalid tx result json format: {snippet}")]
    InvalidJsonFormat {
        snippet: String,
        #[source]
        source: serde_json::Error,
    },
}
