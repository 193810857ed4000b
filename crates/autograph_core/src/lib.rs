//! Typed in-memory data layer for the Autograph memorabilia marketplace.
//! Storefront and admin callers reach every table through this crate.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::affiliate::{Affiliate, AffiliateField, AffiliatePatch, NewAffiliate};
pub use model::article::{Article, ArticleField, ArticlePatch, ArticleStatus, NewArticle};
pub use model::auction::{Auction, AuctionField, AuctionPatch, AuctionStatus, NewAuction};
pub use model::customer::{
    Customer, CustomerField, CustomerId, CustomerPatch, CustomerStatus, NewCustomer,
};
pub use model::order::{NewOrder, Order, OrderField, OrderItem, OrderPatch, OrderStatus};
pub use model::product::{NewProduct, Product, ProductField, ProductPatch, ProductStatus};
pub use model::record::{FieldValue, Record, RecordId, RecordMeta, Timestamp, ValidationError};
pub use model::user::{NewUser, User, UserField, UserPatch, UserRole};
pub use model::voucher::{DiscountType, NewVoucher, Voucher, VoucherField, VoucherPatch};
pub use repo::{
    AffiliateRepository, ArticleRepository, AuctionRepository, Criterion, CustomerRepository,
    Filter, OrderRepository, Page, Pagination, ProductRepository, RepoError, RepoResult,
    Repository, UserRepository, VoucherRepository,
};
pub use service::customer_service::{
    CustomerService, CustomerServiceError, PasswordReset, PurchaseHistory,
};
pub use service::dashboard_service::{DashboardOverview, DashboardService};
pub use store::{
    open_store, open_store_empty, open_store_from_path, open_store_with, Entity, Seed,
    SeedSource, Store, StoreError, StoreResult, TableId,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
