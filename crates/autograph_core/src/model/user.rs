//! Back-office staff account model.

use crate::model::record::{merge, FieldValue, Record, RecordMeta, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Staff,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Staff => "staff",
        }
    }
}

impl From<UserRole> for FieldValue {
    fn from(value: UserRole) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub last_login_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Name,
    Email,
    Role,
    Active,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub active: bool,
    pub last_login_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub active: Option<bool>,
    pub last_login_at: Option<Option<Timestamp>>,
}

impl Record for User {
    type Field = UserField;
    type Draft = NewUser;
    type Patch = UserPatch;

    const SEARCH_FIELDS: &'static [UserField] = &[UserField::Name, UserField::Email];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_draft(meta: RecordMeta, draft: NewUser) -> Self {
        Self {
            meta,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            active: draft.active,
            last_login_at: draft.last_login_at,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.email, patch.email);
        merge(&mut self.role, patch.role);
        merge(&mut self.active, patch.active);
        merge(&mut self.last_login_at, patch.last_login_at);
    }

    fn field(&self, field: UserField) -> FieldValue {
        match field {
            UserField::Id => self.meta.id.as_str().into(),
            UserField::Name => self.name.as_str().into(),
            UserField::Email => self.email.as_str().into(),
            UserField::Role => self.role.into(),
            UserField::Active => self.active.into(),
            UserField::LastLoginAt => self.last_login_at.into(),
            UserField::CreatedAt => self.meta.created_at.into(),
            UserField::UpdatedAt => self.meta.updated_at.into(),
        }
    }
}
