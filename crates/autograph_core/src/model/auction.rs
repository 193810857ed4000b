//! Auction model.
//!
//! # Invariants
//! - A new auction without an explicit `current_bid` opens at its starting price.
//! - `ends_at` must not be earlier than `starts_at`.

use crate::model::customer::CustomerId;
use crate::model::record::{
    merge, FieldValue, Record, RecordId, RecordMeta, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatus {
    #[default]
    Scheduled,
    Live,
    Ended,
    Cancelled,
}

impl AuctionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Live => "live",
            Self::Ended => "ended",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<AuctionStatus> for FieldValue {
    fn from(value: AuctionStatus) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Auction {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub product_id: RecordId,
    pub title: String,
    pub starting_price: f64,
    pub current_bid: f64,
    #[serde(default)]
    pub highest_bidder_id: Option<CustomerId>,
    #[serde(default)]
    pub bid_count: u32,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    #[serde(default)]
    pub status: AuctionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionField {
    Id,
    ProductId,
    Title,
    StartingPrice,
    CurrentBid,
    HighestBidderId,
    BidCount,
    StartsAt,
    EndsAt,
    Status,
    CreatedAt,
    UpdatedAt,
}

/// Creation payload. `current_bid` defaults to the starting price.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuction {
    pub product_id: RecordId,
    pub title: String,
    pub starting_price: f64,
    #[serde(default)]
    pub current_bid: Option<f64>,
    #[serde(default)]
    pub highest_bidder_id: Option<CustomerId>,
    #[serde(default)]
    pub bid_count: u32,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    #[serde(default)]
    pub status: AuctionStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct AuctionPatch {
    pub product_id: Option<RecordId>,
    pub title: Option<String>,
    pub starting_price: Option<f64>,
    pub current_bid: Option<f64>,
    pub highest_bidder_id: Option<Option<CustomerId>>,
    pub bid_count: Option<u32>,
    pub starts_at: Option<Timestamp>,
    pub ends_at: Option<Timestamp>,
    pub status: Option<AuctionStatus>,
}

impl Record for Auction {
    type Field = AuctionField;
    type Draft = NewAuction;
    type Patch = AuctionPatch;

    const SEARCH_FIELDS: &'static [AuctionField] = &[AuctionField::Title];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_draft(meta: RecordMeta, draft: NewAuction) -> Self {
        Self {
            meta,
            product_id: draft.product_id,
            title: draft.title,
            starting_price: draft.starting_price,
            current_bid: draft.current_bid.unwrap_or(draft.starting_price),
            highest_bidder_id: draft.highest_bidder_id,
            bid_count: draft.bid_count,
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            status: draft.status,
        }
    }

    fn apply_patch(&mut self, patch: AuctionPatch) {
        merge(&mut self.product_id, patch.product_id);
        merge(&mut self.title, patch.title);
        merge(&mut self.starting_price, patch.starting_price);
        merge(&mut self.current_bid, patch.current_bid);
        merge(&mut self.highest_bidder_id, patch.highest_bidder_id);
        merge(&mut self.bid_count, patch.bid_count);
        merge(&mut self.starts_at, patch.starts_at);
        merge(&mut self.ends_at, patch.ends_at);
        merge(&mut self.status, patch.status);
    }

    fn field(&self, field: AuctionField) -> FieldValue {
        match field {
            AuctionField::Id => self.meta.id.as_str().into(),
            AuctionField::ProductId => self.product_id.as_str().into(),
            AuctionField::Title => self.title.as_str().into(),
            AuctionField::StartingPrice => self.starting_price.into(),
            AuctionField::CurrentBid => self.current_bid.into(),
            AuctionField::HighestBidderId => self.highest_bidder_id.clone().into(),
            AuctionField::BidCount => self.bid_count.into(),
            AuctionField::StartsAt => self.starts_at.into(),
            AuctionField::EndsAt => self.ends_at.into(),
            AuctionField::Status => self.status.into(),
            AuctionField::CreatedAt => self.meta.created_at.into(),
            AuctionField::UpdatedAt => self.meta.updated_at.into(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.ends_at < self.starts_at {
            return Err(ValidationError::InvalidTimeRange {
                field: "endsAt",
                start: self.starts_at,
                end: self.ends_at,
            });
        }
        Ok(())
    }
}
