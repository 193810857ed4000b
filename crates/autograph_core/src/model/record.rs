//! Shared record contract for every marketplace table.
//!
//! # Responsibility
//! - Define the identity/timestamp envelope carried by every record.
//! - Define typed field access used by search and filter.
//! - Define the validation hook run before any write reaches a table.
//!
//! # Invariants
//! - `RecordMeta::id` is assigned once by the store and never rewritten.
//! - `RecordMeta::created_at` is immutable after creation.
//! - `RecordMeta::updated_at` never moves backwards.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Opaque record identifier, unique within one table.
pub type RecordId = String;

/// UTC instant, serialized as ISO-8601. Field access renders it the same way.
pub type Timestamp = DateTime<Utc>;

/// Identity and audit timestamps shared by all records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMeta {
    pub id: RecordId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RecordMeta {
    /// Creates meta for a fresh record; both timestamps are equal.
    pub fn new(id: impl Into<RecordId>, now: Timestamp) -> Self {
        Self {
            id: id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Returns the current instant.
pub fn now() -> Timestamp {
    Utc::now()
}

/// Returns the current instant, clamped so it is never earlier than `previous`.
pub fn now_after(previous: Timestamp) -> Timestamp {
    now().max(previous)
}

/// Scalar view of a record field, used by search and filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Renders the value the way free-text search sees it.
    ///
    /// `Null` renders as an empty string so it only matches an empty query.
    pub fn render(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }

    /// Equality used by filter criteria. Integers and floats compare numerically.
    pub fn same_as(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (Self::Int(left), Self::Float(right)) | (Self::Float(right), Self::Int(left)) => {
                (*left as f64) == *right
            }
            _ => self == other,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Timestamp> for FieldValue {
    fn from(value: Timestamp) -> Self {
        Self::Text(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Model invariant violations detected before a write.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is blank after trim.
    BlankField(&'static str),
    /// A banned customer must carry a reason and a ban timestamp.
    BanWithoutReason,
    /// A time range ends before it starts.
    InvalidTimeRange {
        field: &'static str,
        start: Timestamp,
        end: Timestamp,
    },
    /// A numeric field is outside its allowed range.
    OutOfRange { field: &'static str, value: f64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "`{field}` must not be blank"),
            Self::BanWithoutReason => {
                write!(f, "banned status requires a ban reason and ban timestamp")
            }
            Self::InvalidTimeRange { field, start, end } => write!(
                f,
                "`{field}` ends before it starts: start={start} end={end}"
            ),
            Self::OutOfRange { field, value } => {
                write!(f, "`{field}` is out of range: {value}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Contract every table row type implements.
///
/// The store only knows records through this trait, so one generic repository
/// serves every table.
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + 'static {
    /// Closed set of fields exposed to search and filter.
    type Field: Copy + Debug + Eq + Send + Sync + 'static;
    /// Creation payload: the record minus its meta.
    type Draft;
    /// Partial update payload: every field optional.
    type Patch;

    /// Fields free-text search looks at when the caller does not name any.
    const SEARCH_FIELDS: &'static [Self::Field];

    fn meta(&self) -> &RecordMeta;
    fn meta_mut(&mut self) -> &mut RecordMeta;

    /// Builds a stored record from a draft and store-issued meta.
    fn from_draft(meta: RecordMeta, draft: Self::Draft) -> Self;

    /// Shallow-merges `patch` over `self`; absent patch fields stay untouched.
    fn apply_patch(&mut self, patch: Self::Patch);

    fn field(&self, field: Self::Field) -> FieldValue;

    /// Checks entity invariants. Runs before every create/update write.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn id(&self) -> &str {
        &self.meta().id
    }
}

/// Sets `slot` when the patch carries a value.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}
