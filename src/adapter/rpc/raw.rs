use serde_json::Value;

use crate::models::errors::TxResultError;
use crate::models::raw::RawTransactionResult;
use crate::utils::truncate;

const SNIPPET_CHARS: usize = 200;

pub trait RawResultParser {
    fn parse_raw_result(self) -> Result<RawTransactionResult, TxResultError>;
}

impl RawResultParser for &str {
    fn parse_raw_result(self) -> Result<RawTransactionResult, TxResultError> {
        serde_json::from_str(self).map_err(|source| TxResultError::InvalidJsonFormat {
            snippet: truncate(self, SNIPPET_CHARS),
            source,
        })
    }
}

impl RawResultParser for Value {
    fn parse_raw_result(self) -> Result<RawTransactionResult, TxResultError> {
        let snippet = truncate(&self.to_string(), SNIPPET_CHARS);
        serde_json::from_value(self)
            .map_err(|source| TxResultError::InvalidJsonFormat { snippet, source })
    }
}
