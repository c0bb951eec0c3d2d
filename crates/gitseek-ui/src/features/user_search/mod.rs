//! Username search feature wiring.
//!
//! # Design
//! - Keep the whole widget (input, suggestions, result card, recents) in one
//!   feature slice.
//! - Restrict directory calls to the effect runner so state stays pure.

pub mod actions;
pub mod effects;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
