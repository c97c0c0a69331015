//! Repository layer: one data access contract per stored entity.
//!
//! # Responsibility
//! - Enforce uniqueness rules with existence checks before writes.
//! - Block deletes while dependent rows exist, inside one transaction.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Repositories borrow a migrated connection and hold no other state.
//! - Failures are returned as `RepoError`, never swallowed.

pub mod brand_repo;
pub mod error;
pub mod owner_repo;
pub mod ownership_repo;
mod support;
pub mod vehicle_model_repo;
pub mod vehicle_repo;
