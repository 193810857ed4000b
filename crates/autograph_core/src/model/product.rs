//! Catalog product model (signed memorabilia listings).

use crate::model::record::{merge, FieldValue, Record, RecordMeta};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    #[default]
    Draft,
    Archived,
    Sold,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Draft => "draft",
            Self::Archived => "archived",
            Self::Sold => "sold",
        }
    }
}

impl From<ProductStatus> for FieldValue {
    fn from(value: ProductStatus) -> Self {
        Self::Text(value.as_str().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// Name of the person whose signature is on the item.
    pub signed_by: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub status: ProductStatus,
    /// Certificate of authenticity attached.
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Title,
    Description,
    Category,
    SignedBy,
    Price,
    Stock,
    Status,
    Authenticated,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub category: String,
    pub signed_by: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    pub authenticated: bool,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub signed_by: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub status: Option<ProductStatus>,
    pub authenticated: Option<bool>,
    pub images: Option<Vec<String>>,
}

impl Record for Product {
    type Field = ProductField;
    type Draft = NewProduct;
    type Patch = ProductPatch;

    const SEARCH_FIELDS: &'static [ProductField] = &[
        ProductField::Title,
        ProductField::Description,
        ProductField::Category,
        ProductField::SignedBy,
    ];

    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }

    fn from_draft(meta: RecordMeta, draft: NewProduct) -> Self {
        Self {
            meta,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            signed_by: draft.signed_by,
            price: draft.price,
            stock: draft.stock,
            status: draft.status,
            authenticated: draft.authenticated,
            images: draft.images,
        }
    }

    fn apply_patch(&mut self, patch: ProductPatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.category, patch.category);
        merge(&mut self.signed_by, patch.signed_by);
        merge(&mut self.price, patch.price);
        merge(&mut self.stock, patch.stock);
        merge(&mut self.status, patch.status);
        merge(&mut self.authenticated, patch.authenticated);
        merge(&mut self.images, patch.images);
    }

    fn field(&self, field: ProductField) -> FieldValue {
        match field {
            ProductField::Id => self.meta.id.as_str().into(),
            ProductField::Title => self.title.as_str().into(),
            ProductField::Description => self.description.as_str().into(),
            ProductField::Category => self.category.as_str().into(),
            ProductField::SignedBy => self.signed_by.as_str().into(),
            ProductField::Price => self.price.into(),
            ProductField::Stock => self.stock.into(),
            ProductField::Status => self.status.into(),
            ProductField::Authenticated => self.authenticated.into(),
            ProductField::CreatedAt => self.meta.created_at.into(),
            ProductField::UpdatedAt => self.meta.updated_at.into(),
        }
    }
}
