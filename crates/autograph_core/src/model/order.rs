//! Storefront order model.
//!
//! # Invariants
//! - `buyer_id` references exactly one customer; the reference is not enforced.

use crate::model::customer::CustomerId;
use crate::model::record::{merge, FieldValue, Record, RecordId, RecordMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<OrderStatus> for FieldValue {
    fn from(value: OrderStatus) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

/// One purchased line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: RecordId,
    pub title: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub order_number: String,
    pub buyer_id: CustomerId,
    #[serde(default)]
    pub buyer_name: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub shipping_address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    OrderNumber,
    BuyerId,
    BuyerName,
    Total,
    Status,
    ShippingAddress,
    CreatedAt,
    UpdatedAt,
}

/// Creation payload. When `total` is `None` it is derived from the items.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewOrder {
    pub order_number: String,
    pub buyer_id: CustomerId,
    pub buyer_name: String,
    pub items: Vec<OrderItem>,
    pub total: Option<f64>,
    pub status: OrderStatus,
    pub shipping_address: String,
}

/// Partial order update. Patching `items` does not recompute `total`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct OrderPatch {
    pub order_number: Option<String>,
    pub buyer_id: Option<CustomerId>,
    pub buyer_name: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total: Option<f64>,
    pub status: Option<OrderStatus>,
    pub shipping_address: Option<String>,
}

impl Record for Order {
    type Field = OrderField;
    type Draft = NewOrder;
    type Patch = OrderPatch;

    const SEARCH_FIELDS: &'static [OrderField] = &[
        OrderField::OrderNumber,
        OrderField::BuyerName,
        OrderField::ShippingAddress,
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_draft(meta: RecordMeta, draft: NewOrder) -> Self {
        let total = draft
            .total
            .unwrap_or_else(|| draft.items.iter().map(OrderItem::subtotal).sum());
        Self {
            meta,
            order_number: draft.order_number,
            buyer_id: draft.buyer_id,
            buyer_name: draft.buyer_name,
            items: draft.items,
            total,
            status: draft.status,
            shipping_address: draft.shipping_address,
        }
    }

    fn apply_patch(&mut self, patch: OrderPatch) {
        merge(&mut self.order_number, patch.order_number);
        merge(&mut self.buyer_id, patch.buyer_id);
        merge(&mut self.buyer_name, patch.buyer_name);
        merge(&mut self.items, patch.items);
        merge(&mut self.total, patch.total);
        merge(&mut self.status, patch.status);
        merge(&mut self.shipping_address, patch.shipping_address);
    }

    fn field(&self, field: OrderField) -> FieldValue {
        match field {
            OrderField::Id => self.meta.id.as_str().into(),
            OrderField::OrderNumber => self.order_number.as_str().into(),
            OrderField::BuyerId => self.buyer_id.as_str().into(),
            OrderField::BuyerName => self.buyer_name.as_str().into(),
            OrderField::Total => self.total.into(),
            OrderField::Status => self.status.into(),
            OrderField::ShippingAddress => self.shipping_address.as_str().into(),
            OrderField::CreatedAt => self.meta.created_at.into(),
            OrderField::UpdatedAt => self.meta.updated_at.into(),
        }
    }
}
