#![forbid(unsafe_code)]

//! Client-side data access for a work-item management console.
//!
//! Browse a basket of tasks (mine / team / a colleague's), run a
//! full-bestand search, inspect and act on a task, and open the
//! aggregate view of the underlying business object. The crate owns the
//! consistency discipline behind those screens: default-filling
//! normalization of partial server responses, deterministic hierarchical
//! cache keys, single-flight read deduplication, and enumerated cache
//! invalidation after every mutation.

pub mod api;
pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;
pub mod worklist;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
pub use service::WorkItemService;
