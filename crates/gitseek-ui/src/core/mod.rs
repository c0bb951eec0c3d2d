//! Core, DOM-free primitives and helpers for the search widget.
pub mod config;
pub mod debounce;
pub mod directory;
pub mod query_cache;
pub mod recents;
pub mod storage;
pub mod store;
