//! Seed document: the full contents of every table as one JSON object.

use crate::model::affiliate::Affiliate;
use crate::model::article::Article;
use crate::model::auction::Auction;
use crate::model::customer::Customer;
use crate::model::order::Order;
use crate::model::product::Product;
use crate::model::user::User;
use crate::model::voucher::Voucher;
use crate::store::table::check_rows;
use crate::store::{StoreError, StoreResult, TableId};
use serde::{Deserialize, Serialize};

const EMBEDDED_SEED: &str = include_str!("../../seed/marketplace.json");

/// Contents of every table. Missing tables deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub auctions: Vec<Auction>,
    pub vouchers: Vec<Voucher>,
    pub users: Vec<User>,
    pub customers: Vec<Customer>,
    pub articles: Vec<Article>,
    pub affiliates: Vec<Affiliate>,
}

impl Seed {
    /// Parses and checks a seed document.
    pub fn from_json(text: &str) -> StoreResult<Self> {
        let seed: Seed = serde_json::from_str(text).map_err(StoreError::Parse)?;
        seed.check()?;
        Ok(seed)
    }

    /// The catalog shipped with the crate.
    pub fn embedded() -> StoreResult<Self> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn to_json_pretty(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(self).map_err(StoreError::Parse)
    }

    pub fn len(&self, table: TableId) -> usize {
        match table {
            TableId::Products => self.products.len(),
            TableId::Orders => self.orders.len(),
            TableId::Auctions => self.auctions.len(),
            TableId::Vouchers => self.vouchers.len(),
            TableId::Users => self.users.len(),
            TableId::Customers => self.customers.len(),
            TableId::Articles => self.articles.len(),
            TableId::Affiliates => self.affiliates.len(),
        }
    }

    /// Rejects duplicate ids within a table and rows breaking model invariants.
    pub fn check(&self) -> StoreResult<()> {
        check_rows(TableId::Products, &self.products)?;
        check_rows(TableId::Orders, &self.orders)?;
        check_rows(TableId::Auctions, &self.auctions)?;
        check_rows(TableId::Vouchers, &self.vouchers)?;
        check_rows(TableId::Users, &self.users)?;
        check_rows(TableId::Customers, &self.customers)?;
        check_rows(TableId::Articles, &self.articles)?;
        check_rows(TableId::Affiliates, &self.affiliates)
    }
}
