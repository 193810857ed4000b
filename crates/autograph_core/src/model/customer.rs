//! Customer domain model.
//!
//! # Responsibility
//! - Define storefront customer accounts and their moderation state.
//!
//! # Invariants
//! - `status == Banned` iff `banned_reason` (non-blank) and `banned_at` are set.
//! - Moving status away from `Banned` through a patch clears both ban fields.
//! - New customers always start `Active` with no ban fields.

use crate::model::record::{
    merge, FieldValue, Record, RecordId, RecordMeta, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Account moderation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
    Banned,
}

impl CustomerStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Banned => "banned",
        }
    }
}

impl From<CustomerStatus> for FieldValue {
    fn from(value: CustomerStatus) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: CustomerStatus,
    #[serde(default)]
    pub banned_reason: Option<String>,
    #[serde(default)]
    pub banned_at: Option<Timestamp>,
}

impl Customer {
    pub fn is_banned(&self) -> bool {
        self.status == CustomerStatus::Banned
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Id,
    Name,
    Email,
    Phone,
    Address,
    Status,
    BannedReason,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: None,
        }
    }
}

/// Partial customer update.
///
/// Ban fields are not patchable; `status = Banned` here is only valid for a
/// customer that is already banned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Option<String>>,
    pub status: Option<CustomerStatus>,
}

impl Record for Customer {
    type Field = CustomerField;
    type Draft = NewCustomer;
    type Patch = CustomerPatch;

    const SEARCH_FIELDS: &'static [CustomerField] =
        &[CustomerField::Name, CustomerField::Email, CustomerField::Phone];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_draft(meta: RecordMeta, draft: NewCustomer) -> Self {
        Self {
            meta,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            status: CustomerStatus::Active,
            banned_reason: None,
            banned_at: None,
        }
    }

    fn apply_patch(&mut self, patch: CustomerPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.address, patch.address);
        if let Some(status) = patch.status {
            self.status = status;
            if status != CustomerStatus::Banned {
                self.banned_reason = None;
                self.banned_at = None;
            }
        }
    }

    fn field(&self, field: CustomerField) -> FieldValue {
        match field {
            CustomerField::Id => self.meta.id.as_str().into(),
            CustomerField::Name => self.name.as_str().into(),
            CustomerField::Email => self.email.as_str().into(),
            CustomerField::Phone => self.phone.as_str().into(),
            CustomerField::Address => self.address.clone().into(),
            CustomerField::Status => self.status.into(),
            CustomerField::BannedReason => self.banned_reason.clone().into(),
            CustomerField::CreatedAt => self.meta.created_at.into(),
            CustomerField::UpdatedAt => self.meta.updated_at.into(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.is_banned() {
            let has_reason = self
                .banned_reason
                .as_deref()
                .is_some_and(|reason| !reason.trim().is_empty());
            if !has_reason || self.banned_at.is_none() {
                return Err(ValidationError::BanWithoutReason);
            }
        }
        Ok(())
    }
}

/// Identifier alias used by foreign keys that point at customers.
pub type CustomerId = RecordId;
