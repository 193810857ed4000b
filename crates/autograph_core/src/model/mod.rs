//! Marketplace domain model.
//!
//! # Responsibility
//! - Define one record type per table, plus its creation draft and patch.
//! - Expose typed field access so the generic repository never inspects
//!   record shapes at runtime.
//!
//! # Invariants
//! - Every record carries a `RecordMeta` (id, createdAt, updatedAt).
//! - Foreign keys (`Order::buyer_id`, `Auction::highest_bidder_id`) are plain
//!   ids; referential integrity is not enforced.

pub mod affiliate;
pub mod article;
pub mod auction;
pub mod customer;
pub mod order;
pub mod product;
pub mod record;
pub mod user;
pub mod voucher;
