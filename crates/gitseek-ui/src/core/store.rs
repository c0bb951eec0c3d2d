//! App-wide yewdux store.
//!
//! # Design
//! - Keep widget state in one store so reducers stay predictable.
//! - Reducers run through [`SearchState::apply`]; the store only holds state.

use crate::features::user_search::state::SearchState;
use yewdux::store::Store;

/// Global store for the search widget.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct SearchStore {
    /// Search widget state.
    pub search: SearchState,
}
