//! Logical event fields and the raw attribute keys each may appear under.
//!
//! Raw logs are not normalized: one field can be spelled in snake case, camel case or under
//! an older name depending on the chain version that produced the log. Every lookup goes
//! through [`EventAttributeType::keys`], so the accepted spellings are declared in one place.

use serde_json::{Map, Value};

use crate::models::raw::{RawTransactionEvent, RawTransactionEventAttribute};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAttributeType {
    Amount,
    Approver,
    ContractId,
    CreateAccountTarget,
    Decimals,
    ExParentTokenId,
    From,
    FromTokenId,
    Meta,
    Name,
    NewRootTokenId,
    OldRootTokenId,
    Owner,
    ParentTokenId,
    Perm,
    Proxy,
    Recipient,
    Sender,
    Symbol,
    To,
    TokenId,
    TokenType,
}

impl EventAttributeType {
    /// Accepted raw keys, in resolution order.
    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Amount => &["amount"],
            Self::Approver => &["approver"],
            Self::ContractId => &["contract_id", "contractId"],
            Self::CreateAccountTarget => &["create_account_target", "createAccountTarget"],
            Self::Decimals => &["decimals"],
            Self::ExParentTokenId => &[
                "from_token_id",
                "fromTokenId",
                "old_root_token_id",
                "oldRootTokenId",
            ],
            Self::From => &["from"],
            Self::FromTokenId => &["from_token_id", "fromTokenId"],
            Self::Meta => &["meta"],
            Self::Name => &["name"],
            Self::NewRootTokenId => &["new_root_token_id", "newRootTokenId"],
            Self::OldRootTokenId => &["old_root_token_id", "oldRootTokenId"],
            Self::Owner => &["owner"],
            Self::ParentTokenId => &["to_token_id", "toTokenId"],
            Self::Perm => &["perm", "permission"],
            Self::Proxy => &["proxy"],
            Self::Recipient => &["recipient"],
            Self::Sender => &["sender"],
            Self::Symbol => &["symbol"],
            Self::To => &["to"],
            Self::TokenId => &["tokenId", "token_id"],
            Self::TokenType => &["tokenType", "token_type"],
        }
    }

    pub fn matches(self, key: &str) -> bool {
        self.keys().contains(&key)
    }
}

impl RawTransactionEvent {
    /// First value found for `attribute`, trying its keys in order; empty when absent.
    pub fn find_attribute(&self, attribute: EventAttributeType) -> &str {
        attribute
            .keys()
            .iter()
            .find_map(|key| {
                self.attributes
                    .iter()
                    .find(|candidate| candidate.key == *key)
            })
            .map(|found| found.value.as_str())
            .unwrap_or_default()
    }

    /// Every value stored under any key of `attribute`, in encounter order.
    pub fn find_attributes(&self, attribute: EventAttributeType) -> Vec<&str> {
        self.attributes
            .iter()
            .filter(|candidate| attribute.matches(&candidate.key))
            .map(|found| found.value.as_str())
            .collect()
    }

    pub fn has_attribute(&self, attribute: EventAttributeType) -> bool {
        self.attributes
            .iter()
            .any(|candidate| attribute.matches(&candidate.key))
    }

    /// Attributes whose key belongs to none of `excluded`.
    pub fn attributes_excluding<'a>(
        &'a self,
        excluded: &'a [EventAttributeType],
    ) -> impl Iterator<Item = &'a RawTransactionEventAttribute> + 'a {
        self.attributes.iter().filter(move |candidate| {
            !excluded
                .iter()
                .any(|attribute| attribute.matches(&candidate.key))
        })
    }
}

/// Read access to a declared message's JSON payload using the same key vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct RawMessageValueMap<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> RawMessageValueMap<'a> {
    pub fn new(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    fn lookup(&self, attribute: EventAttributeType) -> Option<&'a Value> {
        attribute
            .keys()
            .iter()
            .find_map(|key| self.fields.get(*key))
    }

    /// Scalar value as text; empty when absent or not a scalar.
    pub fn find(&self, attribute: EventAttributeType) -> String {
        match self.lookup(attribute) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            _ => String::new(),
        }
    }

    /// Object entries of a list-valued field.
    pub fn find_list(&self, attribute: EventAttributeType) -> Vec<RawMessageValueMap<'a>> {
        match self.lookup(attribute) {
            Some(Value::Array(items)) => items.iter().filter_map(RawMessageValueMap::new).collect(),
            _ => Vec::new(),
        }
    }
}
