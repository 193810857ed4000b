//! In-process record store.
//!
//! # Responsibility
//! - Hold one insertion-ordered table per entity kind.
//! - Map each table identifier to a statically typed table handle.
//! - Own the store lifecycle: build from seed, reset, snapshot, restore.
//!
//! # Invariants
//! - Each table sits behind its own mutex; a write is visible to every read
//!   that starts after it.
//! - No operation holds two table locks at once.
//! - Identifiers are never re-issued within one store, across reset/restore.

use crate::model::affiliate::Affiliate;
use crate::model::article::Article;
use crate::model::auction::Auction;
use crate::model::customer::Customer;
use crate::model::order::Order;
use crate::model::product::Product;
use crate::model::record::{Record, RecordId, ValidationError};
use crate::model::user::User;
use crate::model::voucher::Voucher;
use crate::repo::{
    AffiliateRepository, ArticleRepository, AuctionRepository, CustomerRepository,
    OrderRepository, ProductRepository, Repository, UserRepository, VoucherRepository,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

mod open;
pub mod seed;
mod table;

pub use open::{open_store, open_store_empty, open_store_from_path, open_store_with, SeedSource};
pub use seed::Seed;
pub use table::Table;

pub type StoreResult<T> = Result<T, StoreError>;

/// Closed set of tables known to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableId {
    Products,
    Orders,
    Auctions,
    Vouchers,
    Users,
    Customers,
    Articles,
    Affiliates,
}

impl TableId {
    pub const ALL: [TableId; 8] = [
        TableId::Products,
        TableId::Orders,
        TableId::Auctions,
        TableId::Vouchers,
        TableId::Users,
        TableId::Customers,
        TableId::Articles,
        TableId::Affiliates,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Auctions => "auctions",
            Self::Vouchers => "vouchers",
            Self::Users => "users",
            Self::Customers => "customers",
            Self::Articles => "articles",
            Self::Affiliates => "affiliates",
        }
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seed loading and restore failures.
#[derive(Debug)]
pub enum StoreError {
    /// Seed file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Seed document is not valid JSON for the table shapes.
    Parse(serde_json::Error),
    /// Two rows in one table share an identifier.
    DuplicateId { table: TableId, id: RecordId },
    /// A seeded row breaks a model invariant.
    InvalidRecord {
        table: TableId,
        id: RecordId,
        source: ValidationError,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid seed document: {err}"),
            Self::DuplicateId { table, id } => {
                write!(f, "duplicate id `{id}` in table `{table}`")
            }
            Self::InvalidRecord { table, id, source } => {
                write!(f, "invalid record `{id}` in table `{table}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::DuplicateId { .. } => None,
            Self::InvalidRecord { source, .. } => Some(source),
        }
    }
}

/// Binds a record type to its table inside a [`Store`].
pub trait Entity: Record {
    const TABLE: TableId;

    fn table(store: &Store) -> &Mutex<Table<Self>>;
}

macro_rules! bind_entity {
    ($record:ty, $table:ident, $field:ident) => {
        impl Entity for $record {
            const TABLE: TableId = TableId::$table;

            fn table(store: &Store) -> &Mutex<Table<Self>> {
                &store.$field
            }
        }
    };
}

bind_entity!(Product, Products, products);
bind_entity!(Order, Orders, orders);
bind_entity!(Auction, Auctions, auctions);
bind_entity!(Voucher, Vouchers, vouchers);
bind_entity!(User, Users, users);
bind_entity!(Customer, Customers, customers);
bind_entity!(Article, Articles, articles);
bind_entity!(Affiliate, Affiliates, affiliates);

/// Process-local marketplace data: one table per [`TableId`].
///
/// Construct explicitly and pass by reference; there is no global instance.
#[derive(Debug)]
pub struct Store {
    products: Mutex<Table<Product>>,
    orders: Mutex<Table<Order>>,
    auctions: Mutex<Table<Auction>>,
    vouchers: Mutex<Table<Voucher>>,
    users: Mutex<Table<User>>,
    customers: Mutex<Table<Customer>>,
    articles: Mutex<Table<Article>>,
    affiliates: Mutex<Table<Affiliate>>,
    baseline: Seed,
}

impl Store {
    /// Creates a store with every table empty.
    pub fn new() -> Self {
        Self {
            products: Mutex::new(Table::empty()),
            orders: Mutex::new(Table::empty()),
            auctions: Mutex::new(Table::empty()),
            vouchers: Mutex::new(Table::empty()),
            users: Mutex::new(Table::empty()),
            customers: Mutex::new(Table::empty()),
            articles: Mutex::new(Table::empty()),
            affiliates: Mutex::new(Table::empty()),
            baseline: Seed::default(),
        }
    }

    /// Creates a store whose tables start as `seed`. `reset` returns here.
    pub fn from_seed(seed: Seed) -> StoreResult<Self> {
        seed.check()?;
        let mut store = Self::new();
        store.replace_all(seed.clone());
        store.baseline = seed;
        Ok(store)
    }

    /// Restores every table to the seed this store was built from.
    pub fn reset(&self) {
        self.replace_all(self.baseline.clone());
    }

    /// Copies every table. Tables are copied one at a time.
    pub fn snapshot(&self) -> Seed {
        Seed {
            products: self.lock::<Product>().rows().to_vec(),
            orders: self.lock::<Order>().rows().to_vec(),
            auctions: self.lock::<Auction>().rows().to_vec(),
            vouchers: self.lock::<Voucher>().rows().to_vec(),
            users: self.lock::<User>().rows().to_vec(),
            customers: self.lock::<Customer>().rows().to_vec(),
            articles: self.lock::<Article>().rows().to_vec(),
            affiliates: self.lock::<Affiliate>().rows().to_vec(),
        }
    }

    /// Replaces every table with `seed`. Nothing changes when `seed` is invalid.
    pub fn restore(&self, seed: Seed) -> StoreResult<()> {
        seed.check()?;
        self.replace_all(seed);
        Ok(())
    }

    pub fn len(&self, table: TableId) -> usize {
        match table {
            TableId::Products => self.lock::<Product>().len(),
            TableId::Orders => self.lock::<Order>().len(),
            TableId::Auctions => self.lock::<Auction>().len(),
            TableId::Vouchers => self.lock::<Voucher>().len(),
            TableId::Users => self.lock::<User>().len(),
            TableId::Customers => self.lock::<Customer>().len(),
            TableId::Articles => self.lock::<Article>().len(),
            TableId::Affiliates => self.lock::<Affiliate>().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        TableId::ALL.iter().all(|table| self.len(*table) == 0)
    }

    /// Generic repository over the table bound to `R`.
    pub fn repo<R: Entity>(&self) -> Repository<'_, R> {
        Repository::new(self)
    }

    pub fn products(&self) -> ProductRepository<'_> {
        self.repo()
    }

    pub fn orders(&self) -> OrderRepository<'_> {
        self.repo()
    }

    pub fn auctions(&self) -> AuctionRepository<'_> {
        self.repo()
    }

    pub fn vouchers(&self) -> VoucherRepository<'_> {
        self.repo()
    }

    pub fn users(&self) -> UserRepository<'_> {
        self.repo()
    }

    pub fn customers(&self) -> CustomerRepository<'_> {
        self.repo()
    }

    pub fn articles(&self) -> ArticleRepository<'_> {
        self.repo()
    }

    pub fn affiliates(&self) -> AffiliateRepository<'_> {
        self.repo()
    }

    pub(crate) fn lock<R: Entity>(&self) -> MutexGuard<'_, Table<R>> {
        R::table(self)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn replace_all(&self, seed: Seed) {
        self.lock::<Product>().replace(seed.products);
        self.lock::<Order>().replace(seed.orders);
        self.lock::<Auction>().replace(seed.auctions);
        self.lock::<Voucher>().replace(seed.vouchers);
        self.lock::<User>().replace(seed.users);
        self.lock::<Customer>().replace(seed.customers);
        self.lock::<Article>().replace(seed.articles);
        self.lock::<Affiliate>().replace(seed.affiliates);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
