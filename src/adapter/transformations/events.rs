use tracing::{debug, warn};

use crate::adapter::registry::{
    self, EventCorrelation, GRANT_PERM_EVENT, MESSAGE_EVENT, MessageEventEntry, MessageKind,
};
use crate::adapter::transformations::converter;
use crate::models::attributes::{EventAttributeType, RawMessageValueMap};
use crate::models::events::{EventAttribute, TransactionEvent, UnknownTransactionEvent};
use crate::models::raw::{
    RawTransactionEvent, RawTransactionLog, RawTransactionRequestMessage, RawTransactionResult,
};

pub trait EventTransformer {
    fn transform_events(&self) -> Vec<TransactionEvent>;
}

impl EventTransformer for RawTransactionResult {
    /// Typed events of a successful transaction, in message order without structural duplicates.
    /// Failed transactions and transactions without logs produce none.
    fn transform_events(&self) -> Vec<TransactionEvent> {
        if !self.is_succeeded() || self.logs().is_empty() {
            return Vec::new();
        }

        let mut logs: Vec<&RawTransactionLog> = self.logs().iter().collect();
        logs.sort_by_key(|log| log.msg_index);

        let mut events: Vec<TransactionEvent> = Vec::new();
        for log in logs {
            for event in log_events(self, log) {
                if !events.contains(&event) {
                    events.push(event);
                }
            }
        }
        events
    }
}

/// Everything the converters may need for one message.
struct MessageLog<'a> {
    msg_index: usize,
    log: &'a RawTransactionLog,
    message: &'a RawTransactionRequestMessage,
    entry: &'static MessageEventEntry,
    primary: &'a RawTransactionEvent,
    auxiliary: Option<&'a RawTransactionEvent>,
}

impl MessageLog<'_> {
    /// Sender recorded by the log's `message` event.
    fn sender(&self) -> &str {
        self.log
            .find_event(MESSAGE_EVENT)
            .map(|event| event.find_attribute(EventAttributeType::Sender))
            .unwrap_or_default()
    }

    fn unknown(&self, note: String) -> TransactionEvent {
        unknown_event(
            self.msg_index,
            &self.message.message_type,
            Some(self.primary),
            note,
        )
    }
}

fn log_events(raw: &RawTransactionResult, log: &RawTransactionLog) -> Vec<TransactionEvent> {
    let msg_index = log.msg_index;

    let Some(message) = raw.message(msg_index) else {
        warn!(
            "No declared message at index {} of tx {}",
            msg_index, raw.txhash
        );
        return vec![unknown_event(
            msg_index,
            "",
            None,
            format!("no message declared at index {}", msg_index),
        )];
    };

    let Some(entry) = registry::lookup(&message.message_type) else {
        warn!(
            "Unregistered message type {} in tx {}",
            message.message_type, raw.txhash
        );
        return vec![unknown_event(
            msg_index,
            &message.message_type,
            None,
            format!("unregistered message type {}", message.message_type),
        )];
    };

    let Some(primary) = entry.find_primary(log) else {
        warn!(
            "Event {} for {} not found in log {} of tx {}",
            entry.event_name, message.message_type, msg_index, raw.txhash
        );
        return vec![unknown_event(
            msg_index,
            &message.message_type,
            None,
            format!("event {} not found in log", entry.event_name),
        )];
    };

    debug!(
        "Converting {} (msg {}) from event {}",
        message.message_type, msg_index, primary.event_type
    );

    convert(&MessageLog {
        msg_index,
        log,
        message,
        entry,
        primary,
        auxiliary: entry.find_auxiliary(log),
    })
}

fn convert(ctx: &MessageLog<'_>) -> Vec<TransactionEvent> {
    let msg_index = ctx.msg_index;
    let primary = ctx.primary;
    let auxiliary = ctx.auxiliary;

    match ctx.entry.kind {
        // account
        MessageKind::AccountCreateAccount => {
            vec![converter::account_created(msg_index, primary).into()]
        }
        MessageKind::AccountEmpty => vec![converter::empty_msg_created(msg_index, primary).into()],
        MessageKind::CoinSend => vec![converter::coin_transferred(msg_index, primary).into()],

        // service token
        MessageKind::TokenIssue => vec![converter::token_issued(msg_index, primary).into()],
        MessageKind::TokenMint => vec![converter::token_minted(msg_index, primary).into()],
        MessageKind::TokenBurn | MessageKind::TokenBurnFrom => {
            vec![converter::token_burned(msg_index, primary).into()]
        }
        MessageKind::TokenTransfer | MessageKind::TokenTransferFrom => {
            vec![converter::token_transferred(msg_index, primary).into()]
        }
        MessageKind::TokenModify => {
            vec![converter::token_modified(msg_index, primary, ctx.sender()).into()]
        }
        MessageKind::TokenApprove => {
            vec![converter::token_proxy_approved(msg_index, primary).into()]
        }
        MessageKind::TokenDisapprove => {
            vec![converter::token_proxy_disapproved(msg_index, primary).into()]
        }
        MessageKind::TokenGrantPermission => {
            with_permission(ctx, converter::token_permission_granted(msg_index, primary))
        }
        MessageKind::TokenRevokePermission => {
            with_permission(ctx, converter::token_permission_renounced(msg_index, primary))
        }

        // collection
        MessageKind::CollectionCreate => {
            let creator = ctx
                .log
                .find_event(GRANT_PERM_EVENT)
                .map(|grant| grant.find_attribute(EventAttributeType::To))
                .filter(|grantee| !grantee.is_empty())
                .unwrap_or_else(|| ctx.sender());
            vec![converter::collection_created(msg_index, primary, creator).into()]
        }
        MessageKind::CollectionModify => {
            vec![converter::collection_modified(msg_index, primary, ctx.sender())]
        }
        MessageKind::CollectionIssueFt => {
            vec![converter::collection_ft_issued(msg_index, primary).into()]
        }
        MessageKind::CollectionMintFt => {
            vec![converter::collection_ft_minted(msg_index, primary).into()]
        }
        MessageKind::CollectionBurnFt | MessageKind::CollectionBurnFtFrom => {
            let burned = converter::collection_ft_burned(msg_index, primary);
            let from_message = RawMessageValueMap::new(&ctx.message.value)
                .filter(|_| burned.token_id.is_empty());
            match from_message {
                Some(message) => {
                    vec![converter::collection_ft_burned_from_message(msg_index, message).into()]
                }
                None => vec![burned.into()],
            }
        }
        MessageKind::CollectionTransferFt | MessageKind::CollectionTransferFtFrom => {
            vec![converter::collection_ft_transferred(msg_index, primary).into()]
        }
        MessageKind::CollectionIssueNft => {
            vec![converter::collection_nft_issued(msg_index, primary).into()]
        }
        MessageKind::CollectionMintNft => {
            let primaries: Vec<&RawTransactionEvent> = match ctx.entry.correlation {
                EventCorrelation::AllPrimaries => {
                    ctx.log.find_events(primary.event_type.as_str()).collect()
                }
                EventCorrelation::Single | EventCorrelation::Auxiliary(_) => vec![primary],
            };
            converter::collection_nft_minted(msg_index, &primaries)
                .into_iter()
                .map(TransactionEvent::from)
                .collect()
        }
        MessageKind::CollectionBurnNft | MessageKind::CollectionBurnNftFrom => {
            vec![converter::collection_nft_burned(msg_index, primary, auxiliary).into()]
        }
        MessageKind::CollectionTransferNft | MessageKind::CollectionTransferNftFrom => vec![
            converter::collection_nft_transferred(msg_index, primary).into(),
            converter::collection_nft_holder_changed(msg_index, primary, auxiliary).into(),
        ],
        MessageKind::CollectionAttach | MessageKind::CollectionAttachFrom => vec![
            converter::collection_nft_attached(msg_index, primary).into(),
            converter::collection_nft_root_changed_by_attach(msg_index, primary, auxiliary).into(),
        ],
        MessageKind::CollectionDetach | MessageKind::CollectionDetachFrom => vec![
            converter::collection_nft_detached(msg_index, primary).into(),
            converter::collection_nft_root_changed_by_detach(msg_index, primary, auxiliary).into(),
        ],
        MessageKind::CollectionApprove => {
            vec![converter::collection_proxy_approved(msg_index, primary).into()]
        }
        MessageKind::CollectionDisapprove => {
            vec![converter::collection_proxy_disapproved(msg_index, primary).into()]
        }
        MessageKind::CollectionGrantPermission => {
            with_permission(ctx, converter::collection_permission_granted(msg_index, primary))
        }
        MessageKind::CollectionRevokePermission => {
            with_permission(ctx, converter::collection_permission_renounced(msg_index, primary))
        }
    }
}

fn with_permission<E: Into<TransactionEvent>>(
    ctx: &MessageLog<'_>,
    converted: Option<E>,
) -> Vec<TransactionEvent> {
    match converted {
        Some(event) => vec![event.into()],
        None => {
            let perm = ctx.primary.find_attribute(EventAttributeType::Perm);
            warn!("Unknown permission '{}' for {}", perm, ctx.message.message_type);
            vec![ctx.unknown(format!("unknown permission '{}'", perm))]
        }
    }
}

fn unknown_event(
    msg_index: usize,
    type_name: &str,
    raw_event: Option<&RawTransactionEvent>,
    note: String,
) -> TransactionEvent {
    let attributes: Vec<EventAttribute> = raw_event
        .map(|event| {
            event
                .attributes
                .iter()
                .map(|attribute| EventAttribute {
                    key: attribute.key.clone(),
                    value: attribute.value.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    UnknownTransactionEvent {
        msg_index,
        type_name: type_name.to_string(),
        attributes,
        extra_message: note,
    }
    .into()
}
