//! Discount voucher model.
//!
//! # Invariants
//! - `code` is non-blank.
//! - `discount_value >= 0`, and at most 100 for percentage vouchers.

use crate::model::record::{
    merge, require_text, FieldValue, Record, RecordMeta, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }
}

impl From<DiscountType> for FieldValue {
    fn from(value: DiscountType) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub code: String,
    #[serde(default)]
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    /// `None` means unlimited redemptions.
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
    #[serde(default)]
    pub expires_at: Option<Timestamp>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoucherField {
    Id,
    Code,
    Description,
    DiscountType,
    DiscountValue,
    UsageLimit,
    UsedCount,
    ExpiresAt,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewVoucher {
    pub code: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub usage_limit: Option<u32>,
    pub used_count: u32,
    pub expires_at: Option<Timestamp>,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct VoucherPatch {
    pub code: Option<String>,
    pub description: Option<String>,
    pub discount_type: Option<DiscountType>,
    pub discount_value: Option<f64>,
    pub usage_limit: Option<Option<u32>>,
    pub used_count: Option<u32>,
    pub expires_at: Option<Option<Timestamp>>,
    pub active: Option<bool>,
}

impl Record for Voucher {
    type Field = VoucherField;
    type Draft = NewVoucher;
    type Patch = VoucherPatch;

    const SEARCH_FIELDS: &'static [VoucherField] = &[VoucherField::Code, VoucherField::Description];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_draft(meta: RecordMeta, draft: NewVoucher) -> Self {
        Self {
            meta,
            code: draft.code,
            description: draft.description,
            discount_type: draft.discount_type,
            discount_value: draft.discount_value,
            usage_limit: draft.usage_limit,
            used_count: draft.used_count,
            expires_at: draft.expires_at,
            active: draft.active,
        }
    }

    fn apply_patch(&mut self, patch: VoucherPatch) {
        merge(&mut self.code, patch.code);
        merge(&mut self.description, patch.description);
        merge(&mut self.discount_type, patch.discount_type);
        merge(&mut self.discount_value, patch.discount_value);
        merge(&mut self.usage_limit, patch.usage_limit);
        merge(&mut self.used_count, patch.used_count);
        merge(&mut self.expires_at, patch.expires_at);
        merge(&mut self.active, patch.active);
    }

    fn field(&self, field: VoucherField) -> FieldValue {
        match field {
            VoucherField::Id => self.meta.id.as_str().into(),
            VoucherField::Code => self.code.as_str().into(),
            VoucherField::Description => self.description.as_str().into(),
            VoucherField::DiscountType => self.discount_type.into(),
            VoucherField::DiscountValue => self.discount_value.into(),
            VoucherField::UsageLimit => self.usage_limit.into(),
            VoucherField::UsedCount => self.used_count.into(),
            VoucherField::ExpiresAt => self.expires_at.into(),
            VoucherField::Active => self.active.into(),
            VoucherField::CreatedAt => self.meta.created_at.into(),
            VoucherField::UpdatedAt => self.meta.updated_at.into(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("code", &self.code)?;
        let out_of_range = self.discount_value < 0.0
            || (self.discount_type == DiscountType::Percentage && self.discount_value > 100.0);
        if out_of_range {
            return Err(ValidationError::OutOfRange {
                field: "discountValue",
                value: self.discount_value,
            });
        }
        Ok(())
    }
}
