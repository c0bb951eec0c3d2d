//! Side effects requested by the search state machine.
//!
//! # Design
//! - The host (browser view or test harness) executes effects.
//! - Fetches resolve back into [`SearchAction`]s tagged with their key and
//!   ticket so stale completions are filtered by the cache.

use crate::core::directory::UserDirectory;
use crate::core::query_cache::Ticket;
use crate::features::user_search::actions::SearchAction;

/// A remote lookup to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fetch {
    /// Exact profile lookup.
    User {
        /// Login to fetch.
        login: String,
        /// Cache ticket for the request.
        ticket: Ticket,
    },
    /// Prefix suggestion lookup.
    Suggestions {
        /// Prefix to search for.
        prefix: String,
        /// Cache ticket for the request.
        ticket: Ticket,
    },
}

/// Work the host must carry out after an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// (Re)arm the debounce timer; report `generation` when it fires.
    ScheduleDebounce {
        /// Generation to hand back in [`SearchAction::DebounceElapsed`].
        generation: u64,
        /// Quiescence window in milliseconds.
        delay_ms: u32,
    },
    /// Issue a remote lookup.
    Fetch(Fetch),
    /// Write the full recents list to storage.
    PersistRecents(Vec<String>),
}

/// Perform a lookup against `directory` and wrap the outcome as an action.
pub async fn run_fetch<D>(directory: &D, fetch: Fetch) -> SearchAction
where
    D: UserDirectory + ?Sized,
{
    match fetch {
        Fetch::User { login, ticket } => {
            let result = directory.fetch_user(&login).await;
            SearchAction::UserLoaded {
                login,
                ticket,
                result,
            }
        }
        Fetch::Suggestions { prefix, ticket } => {
            let result = directory.search_users(&prefix).await;
            SearchAction::SuggestionsLoaded {
                prefix,
                ticket,
                result,
            }
        }
    }
}
