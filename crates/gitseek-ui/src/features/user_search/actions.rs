//! User search actions.
//!
//! # Design
//! - Capture user intent and async completions as plain data.
//! - Actions never perform side effects; `SearchState::apply` turns them
//!   into state changes plus [`crate::features::user_search::effects::Effect`]s.

use crate::core::directory::DirectoryError;
use crate::core::query_cache::Ticket;
use gitseek_api_models::{UserProfile, UserSummary};

/// Everything that can change the search widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchAction {
    /// The input text changed.
    Input(String),
    /// A debounce timer armed for the given generation fired.
    DebounceElapsed(u64),
    /// The form was submitted.
    Submit,
    /// A suggestion entry was picked.
    SelectSuggestion(String),
    /// A recent-search entry was picked.
    SelectRecent(String),
    /// The recents list was cleared.
    ClearRecents,
    /// Move the suggestion highlight down.
    HighlightNext,
    /// Move the suggestion highlight up.
    HighlightPrev,
    /// Hide the suggestion list.
    DismissSuggestions,
    /// An exact lookup settled.
    UserLoaded {
        /// Login the request was issued for.
        login: String,
        /// Ticket the request was issued with.
        ticket: Ticket,
        /// Lookup outcome.
        result: Result<UserProfile, DirectoryError>,
    },
    /// A suggestion lookup settled.
    SuggestionsLoaded {
        /// Prefix the request was issued for.
        prefix: String,
        /// Ticket the request was issued with.
        ticket: Ticket,
        /// Lookup outcome.
        result: Result<Vec<UserSummary>, DirectoryError>,
    },
}
