//! Admin dashboard aggregates.
//!
//! Each figure comes from one table scan; tables are read one at a time, so
//! the overview is not a single consistent cut across tables.

use crate::model::auction::{AuctionField, AuctionStatus};
use crate::model::customer::{CustomerField, CustomerStatus};
use crate::model::order::{OrderField, OrderStatus};
use crate::model::product::{ProductField, ProductStatus};
use crate::repo::Filter;
use crate::store::{Store, TableId};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub table_counts: BTreeMap<TableId, usize>,
    pub active_products: usize,
    /// Orders still in `pending` status.
    pub pending_orders: usize,
    /// Sum of delivered order totals.
    pub delivered_revenue: f64,
    pub live_auctions: usize,
    pub banned_customers: usize,
}

pub struct DashboardService<'s> {
    store: &'s Store,
}

impl<'s> DashboardService<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    pub fn overview(&self) -> DashboardOverview {
        let table_counts: BTreeMap<TableId, usize> = TableId::ALL
            .iter()
            .map(|table| (*table, self.store.len(*table)))
            .collect();

        let active_products = self
            .store
            .products()
            .filter(&Filter::new().eq(ProductField::Status, ProductStatus::Active))
            .len();
        let pending_orders = self
            .store
            .orders()
            .filter(&Filter::new().eq(OrderField::Status, OrderStatus::Pending))
            .len();
        let delivered_revenue: f64 = self
            .store
            .orders()
            .filter(&Filter::new().eq(OrderField::Status, OrderStatus::Delivered))
            .iter()
            .map(|order| order.total)
            .sum();
        let live_auctions = self
            .store
            .auctions()
            .filter(&Filter::new().eq(AuctionField::Status, AuctionStatus::Live))
            .len();
        let banned_customers = self
            .store
            .customers()
            .filter(&Filter::new().eq(CustomerField::Status, CustomerStatus::Banned))
            .len();

        DashboardOverview {
            table_counts,
            active_products,
            pending_orders,
            delivered_revenue,
            live_auctions,
            banned_customers,
        }
    }
}
