//! Use-case services spanning more than single-table CRUD.
//!
//! # Responsibility
//! - Enforce cross-field invariants (customer ban state).
//! - Join tables by foreign key (purchase history, dashboard figures).
//!
//! # Invariants
//! - Services write only through the repository layer, never into tables.

pub mod customer_service;
pub mod dashboard_service;
