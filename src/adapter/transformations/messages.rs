use crate::models::raw::RawTransactionResult;
use crate::models::tx_result::TxMessage;

pub trait MessageTransformer {
    fn transform_messages(&self) -> Vec<TxMessage>;
}

impl MessageTransformer for RawTransactionResult {
    fn transform_messages(&self) -> Vec<TxMessage> {
        self.messages()
            .iter()
            .enumerate()
            .map(|(msg_index, message)| TxMessage {
                msg_index,
                request_type: message.message_type.clone(),
                details: message.value.clone(),
            })
            .collect()
    }
}
