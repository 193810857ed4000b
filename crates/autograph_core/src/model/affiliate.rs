//! Affiliate partner model.

use crate::model::record::{merge, FieldValue, Record, RecordMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affiliate {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub email: String,
    pub referral_code: String,
    /// Fraction of each referred sale.
    pub commission_rate: f64,
    #[serde(default)]
    pub total_referrals: u32,
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffiliateField {
    Id,
    Name,
    Email,
    ReferralCode,
    CommissionRate,
    TotalReferrals,
    TotalEarnings,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewAffiliate {
    pub name: String,
    pub email: String,
    pub referral_code: String,
    pub commission_rate: f64,
    pub total_referrals: u32,
    pub total_earnings: f64,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AffiliatePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub referral_code: Option<String>,
    pub commission_rate: Option<f64>,
    pub total_referrals: Option<u32>,
    pub total_earnings: Option<f64>,
    pub active: Option<bool>,
}

impl Record for Affiliate {
    type Field = AffiliateField;
    type Draft = NewAffiliate;
    type Patch = AffiliatePatch;

    const SEARCH_FIELDS: &'static [AffiliateField] = &[
        AffiliateField::Name,
        AffiliateField::Email,
        AffiliateField::ReferralCode,
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_draft(meta: RecordMeta, draft: NewAffiliate) -> Self {
        Self {
            meta,
            name: draft.name,
            email: draft.email,
            referral_code: draft.referral_code,
            commission_rate: draft.commission_rate,
            total_referrals: draft.total_referrals,
            total_earnings: draft.total_earnings,
            active: draft.active,
        }
    }

    fn apply_patch(&mut self, patch: AffiliatePatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.email, patch.email);
        merge(&mut self.referral_code, patch.referral_code);
        merge(&mut self.commission_rate, patch.commission_rate);
        merge(&mut self.total_referrals, patch.total_referrals);
        merge(&mut self.total_earnings, patch.total_earnings);
        merge(&mut self.active, patch.active);
    }

    fn field(&self, field: AffiliateField) -> FieldValue {
        match field {
            AffiliateField::Id => self.meta.id.as_str().into(),
            AffiliateField::Name => self.name.as_str().into(),
            AffiliateField::Email => self.email.as_str().into(),
            AffiliateField::ReferralCode => self.referral_code.as_str().into(),
            AffiliateField::CommissionRate => self.commission_rate.into(),
            AffiliateField::TotalReferrals => self.total_referrals.into(),
            AffiliateField::TotalEarnings => self.total_earnings.into(),
            AffiliateField::Active => self.active.into(),
            AffiliateField::CreatedAt => self.meta.created_at.into(),
            AffiliateField::UpdatedAt => self.meta.updated_at.into(),
        }
    }
}
