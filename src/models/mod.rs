pub mod attributes;
pub mod common;
pub mod errors;
pub mod events;
pub mod raw;
pub mod tx_result;
