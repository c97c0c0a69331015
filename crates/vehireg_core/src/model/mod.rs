//! Registration record types shared by repositories, services and callers.
//!
//! # Responsibility
//! - Define one plain record per stored entity plus the write drafts.
//! - Make record identity explicit instead of deriving it from all fields.
//!
//! # Invariants
//! - Records with a surrogate id compare and hash by that id alone.
//! - Ownership compares and hashes by its `(owner_id, vehicle_id)` pair.

pub mod brand;
pub mod owner;
pub mod ownership;
pub mod vehicle;
pub mod vehicle_model;

/// Implements `PartialEq`, `Eq` and `Hash` over the `id` field only.
macro_rules! identity_by_id {
    ($record:ty) => {
        impl PartialEq for $record {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $record {}

        impl std::hash::Hash for $record {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.id, state);
            }
        }
    };
}

pub(crate) use identity_by_id;
