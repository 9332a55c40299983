//! Wire layer: partial DTOs, default-filling normalization, REST client.
//!
//! Everything the server sends is optional on the wire. The DTO types in
//! [`dto`] mirror that; [`normalize`] converts them into the total view
//! models of `crate::models` before anything else sees them.

pub mod client;
pub mod dto;
pub mod normalize;

pub use client::ApiClient;
