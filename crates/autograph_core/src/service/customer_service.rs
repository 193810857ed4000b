//! Customer moderation and purchase-history use-cases.
//!
//! # Responsibility
//! - Ban/unban customers while keeping status and ban fields consistent.
//! - Issue temporary credentials for operator-driven password resets.
//! - Join orders and auctions to a customer by foreign key.
//!
//! # Invariants
//! - `ban` never writes when the reason is blank.
//! - Ban/unban go through the same in-place update path as generic updates.
//! - Temporary passwords are returned to the caller only; never stored or logged.
//! - Purchase history is derived on every call; nothing is cached.

use crate::model::auction::{Auction, AuctionField, AuctionStatus};
use crate::model::customer::{Customer, CustomerId, CustomerStatus};
use crate::model::order::{Order, OrderField, OrderStatus};
use crate::model::record::now;
use crate::repo::{Filter, RepoError};
use crate::store::Store;
use log::{debug, info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use uuid::Uuid;

const TEMP_PASSWORD_LEN: usize = 12;

/// Errors from customer moderation use-cases.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerServiceError {
    /// Ban reason is blank after trim.
    EmptyBanReason,
    /// The repository declined the write.
    Repo(RepoError),
}

impl Display for CustomerServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBanReason => write!(f, "ban reason must not be blank"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CustomerServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyBanReason => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for CustomerServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Freshly issued credential for one customer.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    pub customer_id: CustomerId,
    pub temp_password: String,
}

impl Debug for PasswordReset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordReset")
            .field("customer_id", &self.customer_id)
            .field("temp_password", &"<redacted>")
            .finish()
    }
}

/// Orders bought by, and auctions led by, one customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PurchaseHistory {
    pub orders: Vec<Order>,
    pub auctions: Vec<Auction>,
}

impl PurchaseHistory {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty() && self.auctions.is_empty()
    }

    /// Non-cancelled order totals plus the winning bid of ended auctions.
    pub fn total_spent(&self) -> f64 {
        let orders: f64 = self
            .orders
            .iter()
            .filter(|order| order.status != OrderStatus::Cancelled)
            .map(|order| order.total)
            .sum();
        let auctions: f64 = self
            .auctions
            .iter()
            .filter(|auction| auction.status == AuctionStatus::Ended)
            .map(|auction| auction.current_bid)
            .sum();
        orders + auctions
    }
}

/// Customer use-cases that span more than single-table CRUD.
pub struct CustomerService<'s> {
    store: &'s Store,
}

impl<'s> CustomerService<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    /// Bans a customer, recording `reason` and the ban time.
    ///
    /// Returns `Ok(None)` when the customer does not exist.
    ///
    /// # Errors
    /// - `EmptyBanReason` when `reason` is blank; nothing is written.
    pub fn ban(
        &self,
        customer_id: &str,
        reason: &str,
    ) -> Result<Option<Customer>, CustomerServiceError> {
        if reason.trim().is_empty() {
            warn!(
                "event=customer_ban module=service status=declined id={} reason=blank",
                customer_id
            );
            return Err(CustomerServiceError::EmptyBanReason);
        }

        let banned_at = now();
        let banned = self.store.customers().modify(customer_id, |customer| {
            customer.status = CustomerStatus::Banned;
            customer.banned_reason = Some(reason.to_string());
            customer.banned_at = Some(banned_at);
        })?;

        match &banned {
            Some(_) => info!("event=customer_ban module=service status=ok id={customer_id}"),
            None => debug!("event=customer_ban module=service status=not_found id={customer_id}"),
        }
        Ok(banned)
    }

    /// Reactivates a customer and clears ban fields.
    ///
    /// Unbanning an active customer only refreshes `updatedAt`.
    pub fn unban(&self, customer_id: &str) -> Result<Option<Customer>, CustomerServiceError> {
        let unbanned = self.store.customers().modify(customer_id, |customer| {
            customer.status = CustomerStatus::Active;
            customer.banned_reason = None;
            customer.banned_at = None;
        })?;

        match &unbanned {
            Some(_) => info!("event=customer_unban module=service status=ok id={customer_id}"),
            None => {
                debug!("event=customer_unban module=service status=not_found id={customer_id}")
            }
        }
        Ok(unbanned)
    }

    /// Issues a random temporary password for an existing customer.
    ///
    /// Returns `None` when the customer does not exist.
    pub fn reset_password(&self, customer_id: &str) -> Option<PasswordReset> {
        if !self.store.customers().exists(customer_id) {
            debug!("event=password_reset module=service status=not_found id={customer_id}");
            return None;
        }

        let temp_password = Uuid::new_v4()
            .simple()
            .to_string()
            .chars()
            .take(TEMP_PASSWORD_LEN)
            .collect();
        info!("event=password_reset module=service status=ok id={customer_id}");
        Some(PasswordReset {
            customer_id: customer_id.to_string(),
            temp_password,
        })
    }

    /// Orders whose buyer is `customer_id` and auctions it currently leads.
    ///
    /// Two independent full scans; order within each list is table order.
    pub fn purchase_history(&self, customer_id: &str) -> PurchaseHistory {
        let orders = self
            .store
            .orders()
            .filter(&Filter::new().eq(OrderField::BuyerId, customer_id));
        let auctions = self
            .store
            .auctions()
            .filter(&Filter::new().eq(AuctionField::HighestBidderId, customer_id));

        debug!(
            "event=purchase_history module=service id={} orders={} auctions={}",
            customer_id,
            orders.len(),
            auctions.len()
        );
        PurchaseHistory { orders, auctions }
    }
}
