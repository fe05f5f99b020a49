use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::utils::token::{token_index, token_type};

////// Shared Types //////

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectionAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenPermission {
    Modify,
    Mint,
    Burn,
}

impl TokenPermission {
    pub fn from_raw(perm: &str) -> Option<Self> {
        match perm.trim().to_ascii_lowercase().as_str() {
            "modify" => Some(Self::Modify),
            "mint" => Some(Self::Mint),
            "burn" => Some(Self::Burn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemTokenPermission {
    Issue,
    Modify,
    Mint,
    Burn,
}

impl ItemTokenPermission {
    pub fn from_raw(perm: &str) -> Option<Self> {
        match perm.trim().to_ascii_lowercase().as_str() {
            "issue" => Some(Self::Issue),
            "modify" => Some(Self::Modify),
            "mint" => Some(Self::Mint),
            "burn" => Some(Self::Burn),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    ServiceToken,
    ItemToken,
    ItemTokenFungible,
    ItemTokenNonFungible,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractIdentifier {
    pub asset_type: AssetType,
    pub contract_id: String,
}

////// Account Events //////

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAccountCreated {
    pub msg_index: usize,
    pub created_account_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEmptyMsgCreated {
    pub msg_index: usize,
    pub sender_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCoinTransferred {
    pub msg_index: usize,
    pub denomination: String,
    pub amount: String,
    pub from_address: String,
    pub to_address: String,
}

////// Service Token Events //////

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTokenIssued {
    pub msg_index: usize,
    pub contract_id: String,
    pub issuer_address: String,
    pub name: String,
    pub symbol: String,
    pub receiver_address: String,
    pub amount: String,
    pub decimals: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTokenMinted {
    pub msg_index: usize,
    pub contract_id: String,
    pub minter_address: String,
    pub to_address: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTokenBurned {
    pub msg_index: usize,
    pub contract_id: String,
    pub amount: String,
    pub from_address: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTokenModified {
    pub msg_index: usize,
    pub contract_id: String,
    pub modifier_address: String,
    pub token_attributes: BTreeSet<TokenAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTokenTransferred {
    pub msg_index: usize,
    pub contract_id: String,
    pub from_address: String,
    pub amount: String,
    pub to_address: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTokenProxyApproved {
    pub msg_index: usize,
    pub contract_id: String,
    pub approver_address: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTokenProxyDisapproved {
    pub msg_index: usize,
    pub contract_id: String,
    pub approver_address: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTokenPermissionGranted {
    pub msg_index: usize,
    pub contract_id: String,
    pub granter_address: String,
    pub grantee_address: String,
    pub permission: TokenPermission,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTokenPermissionRenounced {
    pub msg_index: usize,
    pub contract_id: String,
    pub grantee_address: String,
    pub permission: TokenPermission,
}

////// Item Collection Events //////

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionCreated {
    pub msg_index: usize,
    pub contract_id: String,
    pub creator_address: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionModified {
    pub msg_index: usize,
    pub contract_id: String,
    pub modifier_address: String,
    pub token_attributes: BTreeSet<CollectionAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionFtIssued {
    pub msg_index: usize,
    pub contract_id: String,
    pub name: String,
    pub token_type: String,
    pub amount: String,
    pub decimals: i32,
    pub issuer_address: String,
    pub receiver_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionFtMinted {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_id: String,
    pub token_type: String,
    pub amount: String,
    pub minter_address: String,
    pub to_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionFtBurned {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_id: String,
    pub token_type: String,
    pub from_address: String,
    pub amount: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionFtTransferred {
    pub msg_index: usize,
    pub contract_id: String,
    pub amount: String,
    pub token_id: String,
    pub token_type: String,
    pub from_address: String,
    pub to_address: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionFtModified {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_type: String,
    pub modifier_address: String,
    pub token_attributes: BTreeSet<CollectionAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionNftIssued {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_type: String,
    pub issuer_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionNftMinted {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_ids: Vec<String>,
    pub to_address: String,
    pub minter_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionNftBurned {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_ids: Vec<String>,
    pub from_address: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionNftTransferred {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_ids: Vec<String>,
    pub from_address: String,
    pub to_address: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionNftHolderChanged {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_ids: Vec<String>,
    pub from_address: String,
    pub to_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionNftModified {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_id: String,
    pub modifier_address: String,
    pub token_attributes: BTreeSet<CollectionAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionNftTypeModified {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_type: String,
    pub modifier_address: String,
    pub token_attributes: BTreeSet<CollectionAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionNftAttached {
    pub msg_index: usize,
    pub contract_id: String,
    pub holder_address: String,
    pub child_token_id: String,
    pub parent_token_id: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionNftDetached {
    pub msg_index: usize,
    pub contract_id: String,
    pub holder_address: String,
    pub ex_child_token_id: String,
    pub ex_parent_token_id: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionNftRootChanged {
    pub msg_index: usize,
    pub contract_id: String,
    pub token_ids: Vec<String>,
    pub old_root_token_id: String,
    pub new_root_token_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionProxyApproved {
    pub msg_index: usize,
    pub contract_id: String,
    pub approver_address: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionProxyDisapproved {
    pub msg_index: usize,
    pub contract_id: String,
    pub approver_address: String,
    pub proxy_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionPermissionGranted {
    pub msg_index: usize,
    pub contract_id: String,
    pub granter_address: String,
    pub grantee_address: String,
    pub permission: ItemTokenPermission,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCollectionPermissionRenounced {
    pub msg_index: usize,
    pub contract_id: String,
    pub grantee_address: String,
    pub permission: ItemTokenPermission,
}

////// Fallback //////

/// Placeholder for a message whose events could not be reconstructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownTransactionEvent {
    pub msg_index: usize,
    #[serde(rename = "type")]
    pub type_name: String,
    pub attributes: Vec<EventAttribute>,
    pub extra_message: String,
}

////// Transaction Event //////

macro_rules! transaction_events {
    ($($variant:ident => $asset:expr),+ $(,)?) => {
        /// Every semantic event the adapter can produce, tagged by `eventName` on the wire.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(tag = "eventName")]
        pub enum TransactionEvent {
            $($variant($variant),)+
        }

        impl TransactionEvent {
            pub fn event_name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)+
                }
            }

            pub fn msg_index(&self) -> usize {
                match self {
                    $(Self::$variant(event) => event.msg_index,)+
                }
            }

            fn asset_type(&self) -> Option<AssetType> {
                match self {
                    $(Self::$variant(_) => $asset,)+
                }
            }
        }

        $(
            impl From<$variant> for TransactionEvent {
                fn from(event: $variant) -> Self {
                    Self::$variant(event)
                }
            }
        )+
    };
}

transaction_events! {
    EventAccountCreated => None,
    EventEmptyMsgCreated => None,
    EventCoinTransferred => None,
    EventTokenIssued => Some(AssetType::ServiceToken),
    EventTokenMinted => Some(AssetType::ServiceToken),
    EventTokenBurned => Some(AssetType::ServiceToken),
    EventTokenModified => Some(AssetType::ServiceToken),
    EventTokenTransferred => Some(AssetType::ServiceToken),
    EventTokenProxyApproved => Some(AssetType::ServiceToken),
    EventTokenProxyDisapproved => Some(AssetType::ServiceToken),
    EventTokenPermissionGranted => Some(AssetType::ServiceToken),
    EventTokenPermissionRenounced => Some(AssetType::ServiceToken),
    EventCollectionCreated => Some(AssetType::ItemToken),
    EventCollectionModified => Some(AssetType::ItemToken),
    EventCollectionProxyApproved => Some(AssetType::ItemToken),
    EventCollectionProxyDisapproved => Some(AssetType::ItemToken),
    EventCollectionPermissionGranted => Some(AssetType::ItemToken),
    EventCollectionPermissionRenounced => Some(AssetType::ItemToken),
    EventCollectionFtIssued => Some(AssetType::ItemTokenFungible),
    EventCollectionFtMinted => Some(AssetType::ItemTokenFungible),
    EventCollectionFtBurned => Some(AssetType::ItemTokenFungible),
    EventCollectionFtTransferred => Some(AssetType::ItemTokenFungible),
    EventCollectionFtModified => Some(AssetType::ItemTokenFungible),
    EventCollectionNftIssued => Some(AssetType::ItemTokenNonFungible),
    EventCollectionNftMinted => Some(AssetType::ItemTokenNonFungible),
    EventCollectionNftBurned => Some(AssetType::ItemTokenNonFungible),
    EventCollectionNftTransferred => Some(AssetType::ItemTokenNonFungible),
    EventCollectionNftHolderChanged => Some(AssetType::ItemTokenNonFungible),
    EventCollectionNftModified => Some(AssetType::ItemTokenNonFungible),
    EventCollectionNftTypeModified => Some(AssetType::ItemTokenNonFungible),
    EventCollectionNftAttached => Some(AssetType::ItemTokenNonFungible),
    EventCollectionNftDetached => Some(AssetType::ItemTokenNonFungible),
    EventCollectionNftRootChanged => Some(AssetType::ItemTokenNonFungible),
    UnknownTransactionEvent => None,
}

impl TransactionEvent {
    /// Contract the event belongs to; account, coin and unknown events have none.
    pub fn contract_id(&self) -> Option<&str> {
        let contract_id = match self {
            Self::EventAccountCreated(_)
            | Self::EventEmptyMsgCreated(_)
            | Self::EventCoinTransferred(_)
            | Self::UnknownTransactionEvent(_) => return None,
            Self::EventTokenIssued(e) => &e.contract_id,
            Self::EventTokenMinted(e) => &e.contract_id,
            Self::EventTokenBurned(e) => &e.contract_id,
            Self::EventTokenModified(e) => &e.contract_id,
            Self::EventTokenTransferred(e) => &e.contract_id,
            Self::EventTokenProxyApproved(e) => &e.contract_id,
            Self::EventTokenProxyDisapproved(e) => &e.contract_id,
            Self::EventTokenPermissionGranted(e) => &e.contract_id,
            Self::EventTokenPermissionRenounced(e) => &e.contract_id,
            Self::EventCollectionCreated(e) => &e.contract_id,
            Self::EventCollectionModified(e) => &e.contract_id,
            Self::EventCollectionProxyApproved(e) => &e.contract_id,
            Self::EventCollectionProxyDisapproved(e) => &e.contract_id,
            Self::EventCollectionPermissionGranted(e) => &e.contract_id,
            Self::EventCollectionPermissionRenounced(e) => &e.contract_id,
            Self::EventCollectionFtIssued(e) => &e.contract_id,
            Self::EventCollectionFtMinted(e) => &e.contract_id,
            Self::EventCollectionFtBurned(e) => &e.contract_id,
            Self::EventCollectionFtTransferred(e) => &e.contract_id,
            Self::EventCollectionFtModified(e) => &e.contract_id,
            Self::EventCollectionNftIssued(e) => &e.contract_id,
            Self::EventCollectionNftMinted(e) => &e.contract_id,
            Self::EventCollectionNftBurned(e) => &e.contract_id,
            Self::EventCollectionNftTransferred(e) => &e.contract_id,
            Self::EventCollectionNftHolderChanged(e) => &e.contract_id,
            Self::EventCollectionNftModified(e) => &e.contract_id,
            Self::EventCollectionNftTypeModified(e) => &e.contract_id,
            Self::EventCollectionNftAttached(e) => &e.contract_id,
            Self::EventCollectionNftDetached(e) => &e.contract_id,
            Self::EventCollectionNftRootChanged(e) => &e.contract_id,
        };
        Some(contract_id.as_str())
    }

    pub fn contract_identifier(&self) -> Option<ContractIdentifier> {
        Some(ContractIdentifier {
            asset_type: self.asset_type()?,
            contract_id: self.contract_id()?.to_string(),
        })
    }

    /// Non-fungible token ids the event refers to; empty for every other kind.
    pub fn token_ids(&self) -> Vec<&str> {
        let ids: &[String] = match self {
            Self::EventCollectionNftMinted(e) => &e.token_ids,
            Self::EventCollectionNftBurned(e) => &e.token_ids,
            Self::EventCollectionNftTransferred(e) => &e.token_ids,
            Self::EventCollectionNftHolderChanged(e) => &e.token_ids,
            Self::EventCollectionNftRootChanged(e) => &e.token_ids,
            Self::EventCollectionNftModified(e) => std::slice::from_ref(&e.token_id),
            Self::EventCollectionNftAttached(e) => std::slice::from_ref(&e.child_token_id),
            Self::EventCollectionNftDetached(e) => std::slice::from_ref(&e.ex_child_token_id),
            _ => &[],
        };
        ids.iter().map(String::as_str).collect()
    }

    /// Distinct token types of [`Self::token_ids`], skipping malformed ids.
    pub fn token_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for kind in self
            .token_ids()
            .into_iter()
            .filter_map(|id| token_type(id).ok())
        {
            if !types.iter().any(|known| known == kind) {
                types.push(kind.to_string());
            }
        }
        types
    }

    /// Token indices of [`Self::token_ids`], skipping malformed ids.
    pub fn token_indices(&self) -> Vec<String> {
        self.token_ids()
            .into_iter()
            .filter_map(|id| token_index(id).ok())
            .map(str::to_string)
            .collect()
    }
}
