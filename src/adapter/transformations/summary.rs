use std::collections::BTreeSet;

use tracing::error;

use crate::models::raw::RawTransactionResult;
use crate::models::tx_result::{TxResultSummary, TxSigner, TxStatusResult};

pub trait SummaryTransformer {
    fn transform_summary(&self, hrp: &str) -> TxResultSummary;
}

impl SummaryTransformer for RawTransactionResult {
    /// Header projection. Signer derivation failures are logged and leave the signer set empty.
    fn transform_summary(&self, hrp: &str) -> TxResultSummary {
        let signers = match self.signer_addresses(hrp) {
            Ok(addresses) => addresses
                .into_iter()
                .map(|address| TxSigner { address })
                .collect(),
            Err(e) => {
                error!("Failed to derive signer addresses for tx {}: {}", self.txhash, e);
                BTreeSet::new()
            }
        };

        TxResultSummary {
            height: self.height,
            tx_index: self.index,
            tx_hash: self.txhash.clone(),
            timestamp: self.timestamp,
            signers,
            result: TxStatusResult::new(self.code, self.codespace.clone().unwrap_or_default()),
        }
    }
}
