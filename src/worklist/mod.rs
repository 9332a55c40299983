//! Basket/search composition and per-view pagination state.

pub mod composer;
pub mod state;

pub use composer::{
    compose_basket, compose_global_search, BasketFilter, ComposeError, GlobalSearchFilter,
    ListTrack, SearchParams, MIN_QUERY_LEN,
};
pub use state::WorklistState;
