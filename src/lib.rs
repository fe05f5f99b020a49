pub mod account;
pub mod adapter;
pub mod models;
pub mod utils;

pub use adapter::TxResultAdapter;
pub use models::errors::{AccountError, CodecError, TokenIdError, TxResultError};
pub use models::tx_result::TxResult;
