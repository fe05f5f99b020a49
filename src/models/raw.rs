use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::account::{AccountType, PubKey, amino::PUB_KEY_SECP256K1};
use crate::models::errors::AccountError;

////// Transaction Header //////

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactionResult {
    #[serde(deserialize_with = "lenient_i64")]
    pub height: i64,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub index: i32,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub code: i32,
    #[serde(default, alias = "codeSpace")]
    pub codespace: Option<String>,
    #[serde(alias = "txHash")]
    pub txhash: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub timestamp: i64,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub info: Option<String>,
    #[serde(default, alias = "gas_wanted", deserialize_with = "lenient_i64")]
    pub gas_wanted: i64,
    #[serde(default, alias = "gas_used", deserialize_with = "lenient_i64")]
    pub gas_used: i64,
    #[serde(default)]
    pub logs: Option<Vec<RawTransactionLog>>,
    pub tx: RawTransactionRequest,
}

impl RawTransactionResult {
    pub fn is_succeeded(&self) -> bool {
        self.code == 0
    }

    pub fn logs(&self) -> &[RawTransactionLog] {
        self.logs.as_deref().unwrap_or_default()
    }

    pub fn messages(&self) -> &[RawTransactionRequestMessage] {
        &self.tx.value.msg
    }

    pub fn message(&self, msg_index: usize) -> Option<&RawTransactionRequestMessage> {
        self.tx.value.msg.get(msg_index)
    }

    /// Bech32 account addresses of every signature's public key under `hrp`.
    pub fn signer_addresses(&self, hrp: &str) -> Result<BTreeSet<String>, AccountError> {
        self.tx
            .value
            .signatures
            .iter()
            .map(|signature| {
                let pub_key = signature
                    .pub_key
                    .as_ref()
                    .ok_or(AccountError::MissingPubKey)?;
                if pub_key.key_type != PUB_KEY_SECP256K1 {
                    return Err(AccountError::UnsupportedKeyType {
                        key_type: pub_key.key_type.clone(),
                    });
                }
                PubKey::from_base64(AccountType::Account, &pub_key.value)?
                    .to_address()
                    .to_bech32(hrp)
            })
            .collect()
    }
}

////// Logs //////

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactionLog {
    #[serde(default, alias = "msg_index", deserialize_with = "lenient_usize")]
    pub msg_index: usize,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub log: String,
    /// Distinct events in encounter order.
    #[serde(default, deserialize_with = "distinct")]
    pub events: Vec<RawTransactionEvent>,
}

impl RawTransactionLog {
    pub fn find_event(&self, event_type: &str) -> Option<&RawTransactionEvent> {
        self.events.iter().find(|event| event.event_type == event_type)
    }

    pub fn find_events<'a>(
        &'a self,
        event_type: &'a str,
    ) -> impl Iterator<Item = &'a RawTransactionEvent> + 'a {
        self.events
            .iter()
            .filter(move |event| event.event_type == event_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransactionEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    /// Distinct attributes in encounter order.
    #[serde(default, deserialize_with = "distinct")]
    pub attributes: Vec<RawTransactionEventAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransactionEventAttribute {
    pub key: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub value: String,
}

////// Request //////

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransactionRequest {
    #[serde(rename = "type", default)]
    pub request_type: String,
    pub value: RawTransactionRequestValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransactionRequestValue {
    #[serde(default)]
    pub msg: Vec<RawTransactionRequestMessage>,
    #[serde(default)]
    pub fee: RawTransactionFee,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub memo: String,
    #[serde(default)]
    pub signatures: Vec<RawTransactionSignature>,
}

/// One declared message; its index is its position in `msg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransactionRequestMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTransactionFee {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub gas: i64,
    #[serde(default)]
    pub amount: Vec<RawCoin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCoin {
    #[serde(default, alias = "denomination")]
    pub denom: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransactionSignature {
    #[serde(default, alias = "pub_key")]
    pub pub_key: Option<RawPubKey>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}

////// Deserialization helpers //////

// Gateways emit some integers as JSON strings
fn lenient_integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Default,
{
    use serde::de::Error;

    let value = match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom(format!("integer out of range: {}", number)))?,
        Value::String(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid integer: {}", text)))?,
        Value::Null => return Ok(T::default()),
        other => return Err(D::Error::custom(format!("expected integer, got {}", other))),
    };

    T::try_from(value).map_err(|_| D::Error::custom(format!("integer out of range: {}", value)))
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    lenient_integer(deserializer)
}

fn lenient_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    lenient_integer(deserializer)
}

fn lenient_usize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    lenient_integer(deserializer)
}

// Logs are sets on the wire; repeated entries carry no extra meaning
fn distinct<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + PartialEq,
{
    let items = Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default();
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    Ok(unique)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
