//! Repository layer: one generic engine plus per-table façades.
//!
//! # Responsibility
//! - Provide uniform CRUD, search, filter and pagination over every table.
//! - Bind the engine to each entity through type aliases, so façades share
//!   one implementation and differ only in record type and search fields.
//!
//! # Invariants
//! - Not-found is an expected outcome (`None`/`false`), never a `RepoError`.
//! - Every write runs the record's validation hook first.

use crate::model::affiliate::Affiliate;
use crate::model::article::Article;
use crate::model::auction::Auction;
use crate::model::customer::Customer;
use crate::model::order::Order;
use crate::model::product::Product;
use crate::model::record::ValidationError;
use crate::model::user::User;
use crate::model::voucher::Voucher;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod query;
mod repository;

pub use query::{Criterion, Filter, Page, Pagination};
pub use repository::Repository;

pub type RepoResult<T> = Result<T, RepoError>;

/// A write the repository declined. Nothing was mutated.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoError {
    Validation(ValidationError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "validation failed: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

pub type ProductRepository<'s> = Repository<'s, Product>;
pub type OrderRepository<'s> = Repository<'s, Order>;
pub type AuctionRepository<'s> = Repository<'s, Auction>;
pub type VoucherRepository<'s> = Repository<'s, Voucher>;
pub type UserRepository<'s> = Repository<'s, User>;
pub type CustomerRepository<'s> = Repository<'s, Customer>;
pub type ArticleRepository<'s> = Repository<'s, Article>;
pub type AffiliateRepository<'s> = Repository<'s, Affiliate>;
