//! Conversion of a raw gateway transaction result into the chain-neutral [`TxResult`].
//!
//! The work is split the same way for every part of the output: the raw value implements one
//! transformer trait per projection ([`SummaryTransformer`], [`MessageTransformer`],
//! [`EventTransformer`]) and [`TxResultAdapter`] stitches the projections together.

pub mod registry;
pub mod rpc;
pub mod transformations;

use tracing::debug;

use crate::adapter::rpc::raw::RawResultParser;
use crate::adapter::transformations::events::EventTransformer;
use crate::adapter::transformations::messages::MessageTransformer;
use crate::adapter::transformations::summary::SummaryTransformer;
use crate::models::common::{ChainConfig, HrpPrefix};
use crate::models::errors::TxResultError;
use crate::models::raw::RawTransactionResult;
use crate::models::tx_result::TxResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxResultAdapter {
    hrp: String,
}

impl TxResultAdapter {
    pub fn new(hrp: impl Into<String>) -> Self {
        Self { hrp: hrp.into() }
    }

    pub fn from_config(config: &ChainConfig) -> Self {
        Self::new(config.hrp_prefix())
    }

    /// Network prefix used for signer addresses.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    pub fn adapt(&self, raw: &RawTransactionResult) -> TxResult {
        let summary = raw.transform_summary(&self.hrp);
        let tx_messages = raw.transform_messages();
        let tx_events = raw.transform_events();

        debug!(
            "Adapted tx {}: {} messages, {} events",
            summary.tx_hash,
            tx_messages.len(),
            tx_events.len()
        );

        TxResult {
            summary,
            tx_messages,
            tx_events,
        }
    }

    pub fn adapt_json(&self, json: &str) -> Result<TxResult, TxResultError> {
        let raw = json.parse_raw_result()?;
        Ok(self.adapt(&raw))
    }
}

impl Default for TxResultAdapter {
    fn default() -> Self {
        Self::new(HrpPrefix::default().prefix())
    }
}
