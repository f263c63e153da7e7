//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Wishlist data structure (matches backend)
///
/// The `id` is an opaque identifier assigned on creation; the backend
/// guarantees it is unique within a fetched collection. Only `name` is
/// mutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: String,
    pub name: String,
}
