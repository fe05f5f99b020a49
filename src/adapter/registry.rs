//! Static table from declared message type to the raw events that describe it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::raw::{RawTransactionEvent, RawTransactionLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    AccountCreateAccount,
    AccountEmpty,
    CoinSend,
    TokenIssue,
    TokenMint,
    TokenBurn,
    TokenBurnFrom,
    TokenTransfer,
    TokenTransferFrom,
    TokenModify,
    TokenApprove,
    TokenDisapprove,
    TokenGrantPermission,
    TokenRevokePermission,
    CollectionCreate,
    CollectionIssueFt,
    CollectionIssueNft,
    CollectionMintFt,
    CollectionMintNft,
    CollectionBurnFt,
    CollectionBurnFtFrom,
    CollectionBurnNft,
    CollectionBurnNftFrom,
    CollectionTransferFt,
    CollectionTransferFtFrom,
    CollectionTransferNft,
    CollectionTransferNftFrom,
    CollectionAttach,
    CollectionAttachFrom,
    CollectionDetach,
    CollectionDetachFrom,
    CollectionApprove,
    CollectionDisapprove,
    CollectionModify,
    CollectionGrantPermission,
    CollectionRevokePermission,
}

/// How the raw events of one message combine into typed events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCorrelation {
    /// The primary event alone describes the message.
    Single,
    /// A second event in the same log carries the full list of affected token ids.
    Auxiliary(&'static str),
    /// Every primary event in the log is part of the message (one per recipient).
    AllPrimaries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageEventEntry {
    pub message_type: &'static str,
    pub kind: MessageKind,
    pub event_name: &'static str,
    pub candidates: &'static [&'static str],
    pub correlation: EventCorrelation,
}

impl MessageEventEntry {
    const fn single(message_type: &'static str, kind: MessageKind, event_name: &'static str) -> Self {
        Self {
            message_type,
            kind,
            event_name,
            candidates: &[],
            correlation: EventCorrelation::Single,
        }
    }

    const fn with_auxiliary(
        message_type: &'static str,
        kind: MessageKind,
        event_name: &'static str,
        auxiliary: &'static str,
    ) -> Self {
        Self {
            message_type,
            kind,
            event_name,
            candidates: &[],
            correlation: EventCorrelation::Auxiliary(auxiliary),
        }
    }

    /// Event names to search for, default name first.
    pub fn event_names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.event_name).chain(self.candidates.iter().copied())
    }

    pub fn find_primary<'a>(&self, log: &'a RawTransactionLog) -> Option<&'a RawTransactionEvent> {
        self.event_names().find_map(|name| log.find_event(name))
    }

    pub fn find_auxiliary<'a>(&self, log: &'a RawTransactionLog) -> Option<&'a RawTransactionEvent> {
        match self.correlation {
            EventCorrelation::Auxiliary(name) => log.find_event(name),
            EventCorrelation::Single | EventCorrelation::AllPrimaries => None,
        }
    }
}

pub const OPERATION_BURN_NFT: &str = "operation_burn_nft";
pub const OPERATION_TRANSFER_NFT: &str = "operation_transfer_nft";
pub const OPERATION_ROOT_CHANGED: &str = "operation_root_changed";
pub const MESSAGE_EVENT: &str = "message";
pub const GRANT_PERM_EVENT: &str = "grant_perm";

use MessageKind::*;

static ENTRIES: &[MessageEventEntry] = &[
    // account
    MessageEventEntry::single("account/MsgCreateAccount", AccountCreateAccount, "create_account"),
    MessageEventEntry::single("account/MsgEmpty", AccountEmpty, MESSAGE_EVENT),
    // coin
    MessageEventEntry::single("coin/MsgSend", CoinSend, "transfer"),
    // token
    MessageEventEntry::single("token/MsgIssue", TokenIssue, "issue"),
    MessageEventEntry::single("token/MsgMint", TokenMint, "mint"),
    MessageEventEntry::single("token/MsgBurn", TokenBurn, "burn"),
    MessageEventEntry::single("token/MsgBurnFrom", TokenBurnFrom, "burn_from"),
    MessageEventEntry::single("token/MsgTransfer", TokenTransfer, "transfer"),
    MessageEventEntry::single("token/MsgTransferFrom", TokenTransferFrom, "transfer_from"),
    MessageEventEntry::single("token/MsgModify", TokenModify, "modify_token"),
    MessageEventEntry::single("token/MsgApprove", TokenApprove, "approve_token"),
    MessageEventEntry::single("token/MsgDisapprove", TokenDisapprove, "disapprove_token"),
    MessageEventEntry::single("token/MsgGrantPermission", TokenGrantPermission, GRANT_PERM_EVENT),
    MessageEventEntry::single("token/MsgRevokePermission", TokenRevokePermission, "revoke_perm"),
    // collection
    MessageEventEntry::single("collection/MsgCreate", CollectionCreate, "create_collection"),
    MessageEventEntry::single("collection/MsgIssueFT", CollectionIssueFt, "issue_ft"),
    MessageEventEntry::single("collection/MsgIssueNFT", CollectionIssueNft, "issue_nft"),
    MessageEventEntry::single("collection/MsgMintFT", CollectionMintFt, "mint_ft"),
    MessageEventEntry {
        message_type: "collection/MsgMintNFT",
        kind: CollectionMintNft,
        event_name: "mint_nft",
        candidates: &[],
        correlation: EventCorrelation::AllPrimaries,
    },
    MessageEventEntry::single("collection/MsgBurnFT", CollectionBurnFt, "burn_ft"),
    MessageEventEntry::single("collection/MsgBurnFTFrom", CollectionBurnFtFrom, "burn_ft_from"),
    MessageEventEntry::with_auxiliary(
        "collection/MsgBurnNFT",
        CollectionBurnNft,
        "burn_nft",
        OPERATION_BURN_NFT,
    ),
    MessageEventEntry::with_auxiliary(
        "collection/MsgBurnNFTFrom",
        CollectionBurnNftFrom,
        "burn_nft_from",
        OPERATION_BURN_NFT,
    ),
    MessageEventEntry::single("collection/MsgTransferFT", CollectionTransferFt, "transfer_ft"),
    MessageEventEntry::single(
        "collection/MsgTransferFTFrom",
        CollectionTransferFtFrom,
        "transfer_ft_from",
    ),
    MessageEventEntry::with_auxiliary(
        "collection/MsgTransferNFT",
        CollectionTransferNft,
        "transfer_nft",
        OPERATION_TRANSFER_NFT,
    ),
    MessageEventEntry::with_auxiliary(
        "collection/MsgTransferNFTFrom",
        CollectionTransferNftFrom,
        "transfer_nft_from",
        OPERATION_TRANSFER_NFT,
    ),
    MessageEventEntry::with_auxiliary(
        "collection/MsgAttach",
        CollectionAttach,
        "attach",
        OPERATION_ROOT_CHANGED,
    ),
    MessageEventEntry::with_auxiliary(
        "collection/MsgAttachFrom",
        CollectionAttachFrom,
        "attach_from",
        OPERATION_ROOT_CHANGED,
    ),
    MessageEventEntry::with_auxiliary(
        "collection/MsgDetach",
        CollectionDetach,
        "detach",
        OPERATION_ROOT_CHANGED,
    ),
    MessageEventEntry::with_auxiliary(
        "collection/MsgDetachFrom",
        CollectionDetachFrom,
        "detach_from",
        OPERATION_ROOT_CHANGED,
    ),
    MessageEventEntry::single("collection/MsgApprove", CollectionApprove, "approve_collection"),
    MessageEventEntry::single(
        "collection/MsgDisapprove",
        CollectionDisapprove,
        "disapprove_collection",
    ),
    MessageEventEntry {
        message_type: "collection/MsgModify",
        kind: CollectionModify,
        event_name: "modify_collection",
        candidates: &["modify_token", "modify_token_type"],
        correlation: EventCorrelation::Single,
    },
    MessageEventEntry::single(
        "collection/MsgGrantPermission",
        CollectionGrantPermission,
        GRANT_PERM_EVENT,
    ),
    MessageEventEntry::single(
        "collection/MsgRevokePermission",
        CollectionRevokePermission,
        "revoke_perm",
    ),
];

static REGISTRY: Lazy<HashMap<&'static str, &'static MessageEventEntry>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|entry| (entry.message_type, entry))
        .collect()
});

pub fn lookup(message_type: &str) -> Option<&'static MessageEventEntry> {
    REGISTRY.get(message_type).copied()
}

pub fn entries() -> &'static [MessageEventEntry] {
    ENTRIES
}
