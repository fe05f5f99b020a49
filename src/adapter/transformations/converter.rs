//! One conversion per typed event kind.
//!
//! Missing attributes degrade to empty strings; a converter only returns `None` when the
//! event cannot be represented at all (an unrecognised permission name).

use std::collections::BTreeSet;

use crate::models::attributes::{EventAttributeType as Attr, RawMessageValueMap};
use crate::models::events::{
    CollectionAttribute, EventAccountCreated, EventCoinTransferred, EventCollectionCreated,
    EventCollectionFtBurned, EventCollectionFtIssued, EventCollectionFtMinted,
    EventCollectionFtModified, EventCollectionFtTransferred, EventCollectionModified,
    EventCollectionNftAttached, EventCollectionNftBurned, EventCollectionNftDetached,
    EventCollectionNftHolderChanged, EventCollectionNftIssued, EventCollectionNftMinted,
    EventCollectionNftModified, EventCollectionNftRootChanged, EventCollectionNftTransferred,
    EventCollectionNftTypeModified, EventCollectionPermissionGranted,
    EventCollectionPermissionRenounced, EventCollectionProxyApproved,
    EventCollectionProxyDisapproved, EventEmptyMsgCreated, EventTokenBurned, EventTokenIssued,
    EventTokenMinted, EventTokenModified, EventTokenPermissionGranted,
    EventTokenPermissionRenounced, EventTokenProxyApproved, EventTokenProxyDisapproved,
    EventTokenTransferred, ItemTokenPermission, TokenAttribute, TokenPermission, TransactionEvent,
};
use crate::models::raw::RawTransactionEvent;
use crate::utils::token::{is_fungible, token_type};

/// `"<amount>:<token id>"` as found in collection fungible token events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeAmount<'a> {
    pub amount: &'a str,
    pub token_id: &'a str,
}

impl<'a> CompositeAmount<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(':') {
            Some((amount, token_id)) => Self { amount, token_id },
            None => Self {
                amount: raw,
                token_id: "",
            },
        }
    }

    /// Empty when the token id is too short or not hex.
    pub fn token_type(&self) -> &'a str {
        token_type(self.token_id).unwrap_or_default()
    }
}

/// Splits `"1000tcony"` into `("1000", "tcony")`; both empty when the shape does not match.
pub fn split_coin_amount(raw: &str) -> (&str, &str) {
    let digits_end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (amount, denomination) = raw.split_at(digits_end);

    let valid_denomination = !denomination.is_empty()
        && denomination
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if amount.is_empty() || !valid_denomination {
        ("", "")
    } else {
        (amount, denomination)
    }
}

fn text(event: &RawTransactionEvent, attribute: Attr) -> String {
    event.find_attribute(attribute).to_string()
}

fn texts(event: &RawTransactionEvent, attribute: Attr) -> Vec<String> {
    event
        .find_attributes(attribute)
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn first_non_empty<'a>(values: &[&'a str]) -> &'a str {
    values
        .iter()
        .copied()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

fn decimals(event: &RawTransactionEvent) -> i32 {
    event.find_attribute(Attr::Decimals).trim().parse().unwrap_or(0)
}

fn collection_attributes<T>(
    event: &RawTransactionEvent,
    excluded: &[Attr],
    wrap: impl Fn(String, String) -> T,
) -> BTreeSet<T>
where
    T: Ord,
{
    event
        .attributes_excluding(excluded)
        .map(|attribute| wrap(attribute.key.clone(), attribute.value.clone()))
        .collect()
}

/// Token ids of the auxiliary event, or of the primary when the auxiliary has none.
fn correlated_token_ids(
    primary: &RawTransactionEvent,
    auxiliary: Option<&RawTransactionEvent>,
) -> Vec<String> {
    auxiliary
        .map(|event| texts(event, Attr::TokenId))
        .filter(|ids| !ids.is_empty())
        .unwrap_or_else(|| texts(primary, Attr::TokenId))
}

////// Account //////

pub fn account_created(msg_index: usize, event: &RawTransactionEvent) -> EventAccountCreated {
    EventAccountCreated {
        msg_index,
        created_account_address: text(event, Attr::CreateAccountTarget),
    }
}

pub fn empty_msg_created(msg_index: usize, event: &RawTransactionEvent) -> EventEmptyMsgCreated {
    EventEmptyMsgCreated {
        msg_index,
        sender_address: text(event, Attr::Sender),
    }
}

pub fn coin_transferred(msg_index: usize, event: &RawTransactionEvent) -> EventCoinTransferred {
    let (amount, denomination) = split_coin_amount(event.find_attribute(Attr::Amount));
    EventCoinTransferred {
        msg_index,
        denomination: denomination.to_string(),
        amount: amount.to_string(),
        from_address: text(event, Attr::Sender),
        to_address: text(event, Attr::Recipient),
    }
}

////// Service Token //////

pub fn token_issued(msg_index: usize, event: &RawTransactionEvent) -> EventTokenIssued {
    EventTokenIssued {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        issuer_address: text(event, Attr::Owner),
        name: text(event, Attr::Name),
        symbol: text(event, Attr::Symbol),
        receiver_address: text(event, Attr::To),
        amount: text(event, Attr::Amount),
        decimals: decimals(event),
    }
}

pub fn token_minted(msg_index: usize, event: &RawTransactionEvent) -> EventTokenMinted {
    EventTokenMinted {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        minter_address: text(event, Attr::From),
        to_address: text(event, Attr::To),
        amount: text(event, Attr::Amount),
    }
}

pub fn token_burned(msg_index: usize, event: &RawTransactionEvent) -> EventTokenBurned {
    EventTokenBurned {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        amount: text(event, Attr::Amount),
        from_address: text(event, Attr::From),
        proxy_address: text(event, Attr::Proxy),
    }
}

pub fn token_modified(
    msg_index: usize,
    event: &RawTransactionEvent,
    modifier_address: &str,
) -> EventTokenModified {
    EventTokenModified {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        modifier_address: modifier_address.to_string(),
        token_attributes: collection_attributes(event, &[Attr::ContractId], |key, value| {
            TokenAttribute { key, value }
        }),
    }
}

pub fn token_transferred(msg_index: usize, event: &RawTransactionEvent) -> EventTokenTransferred {
    EventTokenTransferred {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        from_address: text(event, Attr::From),
        amount: text(event, Attr::Amount),
        to_address: text(event, Attr::To),
        proxy_address: text(event, Attr::Proxy),
    }
}

pub fn token_proxy_approved(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventTokenProxyApproved {
    EventTokenProxyApproved {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        approver_address: text(event, Attr::Approver),
        proxy_address: text(event, Attr::Proxy),
    }
}

pub fn token_proxy_disapproved(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventTokenProxyDisapproved {
    EventTokenProxyDisapproved {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        approver_address: text(event, Attr::Approver),
        proxy_address: text(event, Attr::Proxy),
    }
}

pub fn token_permission_granted(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> Option<EventTokenPermissionGranted> {
    Some(EventTokenPermissionGranted {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        granter_address: text(event, Attr::From),
        grantee_address: text(event, Attr::To),
        permission: TokenPermission::from_raw(event.find_attribute(Attr::Perm))?,
    })
}

pub fn token_permission_renounced(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> Option<EventTokenPermissionRenounced> {
    Some(EventTokenPermissionRenounced {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        grantee_address: text(event, Attr::From),
        permission: TokenPermission::from_raw(event.find_attribute(Attr::Perm))?,
    })
}

////// Collection //////

pub fn collection_created(
    msg_index: usize,
    event: &RawTransactionEvent,
    creator_address: &str,
) -> EventCollectionCreated {
    EventCollectionCreated {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        creator_address: creator_address.to_string(),
        name: text(event, Attr::Name),
    }
}

/// Routes a modify event by its raw name and, for token-level changes, by fungibility.
pub fn collection_modified(
    msg_index: usize,
    event: &RawTransactionEvent,
    modifier_address: &str,
) -> TransactionEvent {
    let wrap = |key, value| CollectionAttribute { key, value };
    let contract_id = text(event, Attr::ContractId);
    let modifier_address = modifier_address.to_string();

    match event.event_type.as_str() {
        "modify_collection" => EventCollectionModified {
            msg_index,
            contract_id,
            modifier_address,
            token_attributes: collection_attributes(event, &[Attr::ContractId], wrap),
        }
        .into(),
        "modify_token_type" => EventCollectionNftTypeModified {
            msg_index,
            contract_id,
            token_type: text(event, Attr::TokenType),
            modifier_address,
            token_attributes: collection_attributes(
                event,
                &[Attr::ContractId, Attr::TokenType],
                wrap,
            ),
        }
        .into(),
        _ => {
            let token_id = event.find_attribute(Attr::TokenId);
            let routing = first_non_empty(&[event.find_attribute(Attr::TokenType), token_id]);
            let token_attributes =
                collection_attributes(event, &[Attr::ContractId, Attr::TokenId], wrap);

            if is_fungible(routing) {
                EventCollectionFtModified {
                    msg_index,
                    contract_id,
                    token_type: token_type(routing).unwrap_or_default().to_string(),
                    modifier_address,
                    token_attributes,
                }
                .into()
            } else {
                EventCollectionNftModified {
                    msg_index,
                    contract_id,
                    token_id: token_id.to_string(),
                    modifier_address,
                    token_attributes,
                }
                .into()
            }
        }
    }
}

pub fn collection_ft_issued(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventCollectionFtIssued {
    let token_id = event.find_attribute(Attr::TokenId);
    EventCollectionFtIssued {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        name: text(event, Attr::Name),
        token_type: token_type(token_id).unwrap_or(token_id).to_string(),
        amount: text(event, Attr::Amount),
        decimals: decimals(event),
        issuer_address: text(event, Attr::Owner),
        receiver_address: text(event, Attr::To),
    }
}

pub fn collection_ft_minted(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventCollectionFtMinted {
    let composite = CompositeAmount::parse(event.find_attribute(Attr::Amount));
    EventCollectionFtMinted {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        token_id: composite.token_id.to_string(),
        token_type: composite.token_type().to_string(),
        amount: composite.amount.to_string(),
        minter_address: text(event, Attr::From),
        to_address: text(event, Attr::To),
    }
}

pub fn collection_ft_burned(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventCollectionFtBurned {
    let composite = CompositeAmount::parse(event.find_attribute(Attr::Amount));
    EventCollectionFtBurned {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        token_id: composite.token_id.to_string(),
        token_type: composite.token_type().to_string(),
        from_address: text(event, Attr::From),
        amount: composite.amount.to_string(),
        proxy_address: text(event, Attr::Proxy),
    }
}

/// Burn reconstructed from the declared message when the log lacks a composite amount.
pub fn collection_ft_burned_from_message(
    msg_index: usize,
    message: RawMessageValueMap<'_>,
) -> EventCollectionFtBurned {
    let first_amount = message.find_list(Attr::Amount).into_iter().next();
    let token_id = first_amount
        .map(|amount| amount.find(Attr::TokenId))
        .unwrap_or_default();
    let amount = first_amount
        .map(|amount| amount.find(Attr::Amount))
        .unwrap_or_default();

    EventCollectionFtBurned {
        msg_index,
        contract_id: message.find(Attr::ContractId),
        token_type: token_type(&token_id).unwrap_or_default().to_string(),
        token_id,
        from_address: message.find(Attr::From),
        amount,
        proxy_address: message.find(Attr::Proxy),
    }
}

pub fn collection_ft_transferred(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventCollectionFtTransferred {
    let composite = CompositeAmount::parse(event.find_attribute(Attr::Amount));
    EventCollectionFtTransferred {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        amount: composite.amount.to_string(),
        token_id: composite.token_id.to_string(),
        token_type: composite.token_type().to_string(),
        from_address: text(event, Attr::From),
        to_address: text(event, Attr::To),
        proxy_address: text(event, Attr::Proxy),
    }
}

pub fn collection_nft_issued(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventCollectionNftIssued {
    EventCollectionNftIssued {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        token_type: text(event, Attr::TokenType),
        issuer_address: text(event, Attr::Owner),
    }
}

/// One minted event per recipient, in order of first appearance.
pub fn collection_nft_minted(
    msg_index: usize,
    events: &[&RawTransactionEvent],
) -> Vec<EventCollectionNftMinted> {
    let mut minted: Vec<EventCollectionNftMinted> = Vec::new();

    for event in events {
        let contract_id = event.find_attribute(Attr::ContractId);
        let to_address = event.find_attribute(Attr::To);
        let minter_address = event.find_attribute(Attr::From);
        let token_ids = texts(event, Attr::TokenId);

        match minted.iter_mut().find(|existing| {
            existing.contract_id == contract_id
                && existing.to_address == to_address
                && existing.minter_address == minter_address
        }) {
            Some(existing) => existing.token_ids.extend(token_ids),
            None => minted.push(EventCollectionNftMinted {
                msg_index,
                contract_id: contract_id.to_string(),
                token_ids,
                to_address: to_address.to_string(),
                minter_address: minter_address.to_string(),
            }),
        }
    }

    minted
}

pub fn collection_nft_burned(
    msg_index: usize,
    primary: &RawTransactionEvent,
    auxiliary: Option<&RawTransactionEvent>,
) -> EventCollectionNftBurned {
    EventCollectionNftBurned {
        msg_index,
        contract_id: text(primary, Attr::ContractId),
        token_ids: correlated_token_ids(primary, auxiliary),
        from_address: text(primary, Attr::From),
        proxy_address: text(primary, Attr::Proxy),
    }
}

pub fn collection_nft_transferred(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventCollectionNftTransferred {
    EventCollectionNftTransferred {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        token_ids: texts(event, Attr::TokenId),
        from_address: text(event, Attr::From),
        to_address: text(event, Attr::To),
        proxy_address: text(event, Attr::Proxy),
    }
}

/// Holder change of the transferred tokens and all their descendants.
pub fn collection_nft_holder_changed(
    msg_index: usize,
    primary: &RawTransactionEvent,
    auxiliary: Option<&RawTransactionEvent>,
) -> EventCollectionNftHolderChanged {
    EventCollectionNftHolderChanged {
        msg_index,
        contract_id: text(primary, Attr::ContractId),
        token_ids: correlated_token_ids(primary, auxiliary),
        from_address: text(primary, Attr::From),
        to_address: text(primary, Attr::To),
    }
}

fn attached_child(event: &RawTransactionEvent) -> &str {
    first_non_empty(&[
        event.find_attribute(Attr::TokenId),
        event.find_attribute(Attr::FromTokenId),
    ])
}

pub fn collection_nft_attached(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventCollectionNftAttached {
    EventCollectionNftAttached {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        holder_address: text(event, Attr::From),
        child_token_id: attached_child(event).to_string(),
        parent_token_id: text(event, Attr::ParentTokenId),
        proxy_address: text(event, Attr::Proxy),
    }
}

pub fn collection_nft_detached(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventCollectionNftDetached {
    EventCollectionNftDetached {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        holder_address: text(event, Attr::From),
        ex_child_token_id: text(event, Attr::TokenId),
        ex_parent_token_id: text(event, Attr::ExParentTokenId),
        proxy_address: text(event, Attr::Proxy),
    }
}

fn root_changed(
    msg_index: usize,
    primary: &RawTransactionEvent,
    auxiliary: Option<&RawTransactionEvent>,
    subtree_root: &str,
    old_root: &str,
    new_root: &str,
) -> EventCollectionNftRootChanged {
    let from_auxiliary = |attribute| {
        auxiliary
            .map(|event| event.find_attribute(attribute))
            .unwrap_or_default()
    };
    let token_ids = auxiliary
        .map(|event| texts(event, Attr::TokenId))
        .filter(|ids| !ids.is_empty())
        .unwrap_or_else(|| vec![subtree_root.to_string()]);

    EventCollectionNftRootChanged {
        msg_index,
        contract_id: text(primary, Attr::ContractId),
        token_ids,
        old_root_token_id: first_non_empty(&[from_auxiliary(Attr::OldRootTokenId), old_root])
            .to_string(),
        new_root_token_id: first_non_empty(&[from_auxiliary(Attr::NewRootTokenId), new_root])
            .to_string(),
    }
}

/// The attached child stops being a root; its subtree now hangs under the parent.
pub fn collection_nft_root_changed_by_attach(
    msg_index: usize,
    primary: &RawTransactionEvent,
    auxiliary: Option<&RawTransactionEvent>,
) -> EventCollectionNftRootChanged {
    let child = attached_child(primary);
    let parent = primary.find_attribute(Attr::ParentTokenId);
    root_changed(msg_index, primary, auxiliary, child, child, parent)
}

/// The detached child becomes the root of its own subtree.
pub fn collection_nft_root_changed_by_detach(
    msg_index: usize,
    primary: &RawTransactionEvent,
    auxiliary: Option<&RawTransactionEvent>,
) -> EventCollectionNftRootChanged {
    let child = primary.find_attribute(Attr::TokenId);
    let ex_parent = primary.find_attribute(Attr::ExParentTokenId);
    root_changed(msg_index, primary, auxiliary, child, ex_parent, child)
}

pub fn collection_proxy_approved(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventCollectionProxyApproved {
    EventCollectionProxyApproved {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        approver_address: text(event, Attr::Approver),
        proxy_address: text(event, Attr::Proxy),
    }
}

pub fn collection_proxy_disapproved(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> EventCollectionProxyDisapproved {
    EventCollectionProxyDisapproved {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        approver_address: text(event, Attr::Approver),
        proxy_address: text(event, Attr::Proxy),
    }
}

pub fn collection_permission_granted(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> Option<EventCollectionPermissionGranted> {
    Some(EventCollectionPermissionGranted {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        granter_address: text(event, Attr::From),
        grantee_address: text(event, Attr::To),
        permission: ItemTokenPermission::from_raw(event.find_attribute(Attr::Perm))?,
    })
}

pub fn collection_permission_renounced(
    msg_index: usize,
    event: &RawTransactionEvent,
) -> Option<EventCollectionPermissionRenounced> {
    Some(EventCollectionPermissionRenounced {
        msg_index,
        contract_id: text(event, Attr::ContractId),
        grantee_address: text(event, Attr::From),
        permission: ItemTokenPermission::from_raw(event.find_attribute(Attr::Perm))?,
    })
}
