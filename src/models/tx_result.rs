use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::events::TransactionEvent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResult {
    pub summary: TxResultSummary,
    pub tx_messages: Vec<TxMessage>,
    /// Structurally distinct events in message order.
    pub tx_events: Vec<TransactionEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResultSummary {
    pub height: i64,
    pub tx_index: i32,
    pub tx_hash: String,
    /// Block time in epoch milliseconds.
    pub timestamp: i64,
    pub signers: BTreeSet<TxSigner>,
    pub result: TxStatusResult,
}

impl TxResultSummary {
    pub fn block_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxSigner {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxStatusResult {
    pub code: i32,
    pub code_space: String,
    pub result: TxSuccessResult,
}

impl TxStatusResult {
    pub fn new(code: i32, code_space: impl Into<String>) -> Self {
        Self {
            code,
            code_space: code_space.into(),
            result: TxSuccessResult::from_code(code),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.result == TxSuccessResult::Succeeded
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxSuccessResult {
    Succeeded,
    Failed,
}

impl TxSuccessResult {
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }
}

/// One declared message with its request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxMessage {
    pub msg_index: usize,
    pub request_type: String,
    pub details: Value,
}
