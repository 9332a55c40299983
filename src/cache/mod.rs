//! Key-addressed cache with per-key single-flight fetching.
//!
//! The cache is the one shared resource of the crate. Any component may
//! read any key; only the read accessors and the mutation coordinator in
//! `crate::service` write. Writes are last-write-wins per key.

pub mod key;
pub mod store;

pub use key::{KeyFamily, QueryKey};
pub use store::{CacheValue, QueryCache};
