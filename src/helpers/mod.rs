//! Operation groups for [`Collection`](crate::Collection).
//!
//! Each module adds an `impl` block to the core type; nothing here needs to be
//! imported to use the methods.

pub(crate) mod aggregate;
pub(crate) mod combine;
pub(crate) mod group;
pub(crate) mod ordering;
pub(crate) mod sampling;
pub(crate) mod search;
pub(crate) mod transform;
