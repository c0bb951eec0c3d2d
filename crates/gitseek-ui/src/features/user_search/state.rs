//! User search feature state.
//!
//! # Design
//! - Query text, its debounced mirror and the submitted login are separate
//!   fields; the debounced mirror only ever drives suggestions.
//! - Both lookups go through keyed caches, so a changed key never shows the
//!   previous key's data and late responses land under their own key.
//! - Every confirm path (submit, suggestion pick, recent pick) forces a
//!   refetch when the login equals the current submitted one.
//! - `apply` returns effects instead of performing them.

use crate::core::config::SearchConfig;
use crate::core::debounce::Debounced;
use crate::core::directory::DirectoryError;
use crate::core::query_cache::{QueryCache, QueryStatus};
use crate::core::recents::RecentSearches;
use crate::features::user_search::actions::SearchAction;
use crate::features::user_search::effects::{Effect, Fetch};
use crate::features::user_search::logic::{should_show_suggestions, step_highlight, suggestion_key};
use gitseek_api_models::{UserProfile, UserSummary};

/// Render-facing phase of the exact lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExactPhase<'a> {
    /// Nothing submitted yet.
    Idle,
    /// Lookup in flight without a result to show.
    Loading,
    /// Lookup failed; the message replaces the card.
    Failed(&'a DirectoryError),
    /// Profile available.
    Ready(&'a UserProfile),
}

/// Complete state of one search widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    config: SearchConfig,
    query: String,
    debounced: Debounced<String>,
    submitted: String,
    show_suggestions: bool,
    highlighted: Option<usize>,
    recents: RecentSearches,
    exact: QueryCache<String, UserProfile, DirectoryError>,
    suggestions: QueryCache<String, Vec<UserSummary>, DirectoryError>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(SearchConfig::default(), RecentSearches::default())
    }
}

impl SearchState {
    /// Fresh widget state seeded with previously stored recents.
    #[must_use]
    pub fn new(config: SearchConfig, recents: RecentSearches) -> Self {
        let stale_time_ms = config.stale_time_ms;
        Self {
            config,
            query: String::new(),
            debounced: Debounced::new(String::new()),
            submitted: String::new(),
            show_suggestions: false,
            highlighted: None,
            recents,
            exact: QueryCache::new(stale_time_ms),
            suggestions: QueryCache::new(stale_time_ms),
        }
    }

    /// Apply an action at time `now` (ms) and return the effects to run.
    pub fn apply(&mut self, action: SearchAction, now: u64) -> Vec<Effect> {
        match action {
            SearchAction::Input(text) => {
                self.show_suggestions =
                    should_show_suggestions(&text, self.config.min_suggestion_chars);
                self.highlighted = None;
                vec![self.set_query(text)]
            }
            SearchAction::DebounceElapsed(generation) => self.commit_debounced(generation, now),
            SearchAction::Submit => {
                let trimmed = self.query.trim().to_string();
                if trimmed.is_empty() {
                    return Vec::new();
                }
                self.hide_suggestions();
                let mut effects = vec![self.set_query(String::new())];
                effects.extend(self.confirm(trimmed, now));
                effects
            }
            SearchAction::SelectSuggestion(login) | SearchAction::SelectRecent(login) => {
                if login.trim().is_empty() {
                    return Vec::new();
                }
                self.hide_suggestions();
                let mut effects = vec![self.set_query(login.clone())];
                effects.extend(self.confirm(login, now));
                effects
            }
            SearchAction::ClearRecents => {
                if self.recents.is_empty() {
                    return Vec::new();
                }
                self.recents.clear();
                vec![Effect::PersistRecents(Vec::new())]
            }
            SearchAction::HighlightNext => {
                self.highlighted =
                    step_highlight(self.highlighted, self.visible_suggestions().len(), true);
                Vec::new()
            }
            SearchAction::HighlightPrev => {
                self.highlighted =
                    step_highlight(self.highlighted, self.visible_suggestions().len(), false);
                Vec::new()
            }
            SearchAction::DismissSuggestions => {
                self.hide_suggestions();
                Vec::new()
            }
            SearchAction::UserLoaded {
                login,
                ticket,
                result,
            } => {
                self.exact.resolve(&login, ticket, result, now);
                Vec::new()
            }
            SearchAction::SuggestionsLoaded {
                prefix,
                ticket,
                result,
            } => {
                if self.suggestions.resolve(&prefix, ticket, result, now)
                    && self.current_suggestion_key() == Some(prefix.as_str())
                {
                    self.highlighted = None;
                }
                Vec::new()
            }
        }
    }

    /// Raw input text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last confirmed login (empty before the first confirmation).
    #[must_use]
    pub fn submitted(&self) -> &str {
        &self.submitted
    }

    /// Presentational visibility flag for the suggestion list.
    #[must_use]
    pub const fn show_suggestions(&self) -> bool {
        self.show_suggestions
    }

    /// Suggestions to render: empty unless visible, enabled and loaded.
    ///
    /// Failed suggestion lookups render as an empty list.
    #[must_use]
    pub fn visible_suggestions(&self) -> &[UserSummary] {
        if !self.show_suggestions {
            return &[];
        }
        let Some(key) = self.current_suggestion_key() else {
            return &[];
        };
        match self.suggestions.status(&key.to_string()) {
            QueryStatus::Success(items) => {
                &items[..items.len().min(self.config.suggestion_limit)]
            }
            QueryStatus::Idle | QueryStatus::Loading | QueryStatus::Error(_) => &[],
        }
    }

    /// Highlighted suggestion index.
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Login of the highlighted suggestion, if one is visible.
    #[must_use]
    pub fn highlighted_login(&self) -> Option<&str> {
        let index = self.highlighted?;
        self.visible_suggestions()
            .get(index)
            .map(|item| item.login.as_str())
    }

    /// Phase of the exact lookup for the submitted login.
    #[must_use]
    pub fn exact_phase(&self) -> ExactPhase<'_> {
        if self.submitted.is_empty() {
            return ExactPhase::Idle;
        }
        match self.exact.status(&self.submitted) {
            QueryStatus::Idle => ExactPhase::Idle,
            QueryStatus::Loading => ExactPhase::Loading,
            QueryStatus::Error(_) if self.exact.is_fetching(&self.submitted) => {
                ExactPhase::Loading
            }
            QueryStatus::Error(err) => ExactPhase::Failed(err),
            QueryStatus::Success(profile) => ExactPhase::Ready(profile),
        }
    }

    /// Whether a shown profile is being refetched in the background.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        matches!(self.exact_phase(), ExactPhase::Ready(_))
            && self.exact.is_fetching(&self.submitted)
    }

    /// Remembered logins, most recent first.
    #[must_use]
    pub fn recents(&self) -> &[String] {
        self.recents.entries()
    }

    fn current_suggestion_key(&self) -> Option<&str> {
        suggestion_key(self.debounced.value(), self.config.min_suggestion_chars)
    }

    fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
        self.highlighted = None;
    }

    fn set_query(&mut self, text: String) -> Effect {
        self.query.clone_from(&text);
        let generation = self.debounced.set(text);
        Effect::ScheduleDebounce {
            generation,
            delay_ms: self.config.debounce_ms,
        }
    }

    fn commit_debounced(&mut self, generation: u64, now: u64) -> Vec<Effect> {
        if !self.debounced.fire(generation) {
            return Vec::new();
        }
        self.highlighted = None;
        let Some(prefix) = self.current_suggestion_key().map(str::to_string) else {
            return Vec::new();
        };
        self.suggestions
            .observe(prefix.clone(), now)
            .map(|ticket| Effect::Fetch(Fetch::Suggestions { prefix, ticket }))
            .into_iter()
            .collect()
    }

    fn confirm(&mut self, login: String, now: u64) -> Vec<Effect> {
        let mut effects = Vec::new();
        let ticket = if login == self.submitted {
            Some(self.exact.refetch(login.clone()))
        } else {
            self.submitted.clone_from(&login);
            self.exact.observe(login.clone(), now)
        };
        self.recents.promote(&login);
        if let Some(ticket) = ticket {
            effects.push(Effect::Fetch(Fetch::User { login, ticket }));
        }
        effects.push(Effect::PersistRecents(self.recents.entries().to_vec()));
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::{ExactPhase, SearchState};
    use crate::core::config::SearchConfig;
    use crate::core::directory::DirectoryError;
    use crate::core::recents::RecentSearches;
    use crate::features::user_search::actions::SearchAction;
    use crate::features::user_search::effects::{Effect, Fetch};
    use gitseek_test_support::fixtures::{profile, summaries};

    fn debounce_generation(effects: &[Effect]) -> u64 {
        effects
            .iter()
            .find_map(|effect| match effect {
                Effect::ScheduleDebounce { generation, .. } => Some(*generation),
                _ => None,
            })
            .expect("debounce scheduled")
    }

    fn fetches(effects: &[Effect]) -> Vec<Fetch> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::Fetch(fetch) => Some(fetch.clone()),
                _ => None,
            })
            .collect()
    }

    fn type_and_settle(state: &mut SearchState, text: &str, now: u64) -> Vec<Effect> {
        let effects = state.apply(SearchAction::Input(text.into()), now);
        let generation = debounce_generation(&effects);
        state.apply(SearchAction::DebounceElapsed(generation), now + 300)
    }

    #[test]
    fn whitespace_submit_changes_nothing() {
        let mut state = SearchState::default();
        state.apply(SearchAction::Input("   ".into()), 0);
        let before = state.clone();
        assert!(state.apply(SearchAction::Submit, 1).is_empty());
        assert_eq!(state, before);
        assert_eq!(state.query(), "   ");
        assert_eq!(state.submitted(), "");
        assert!(state.recents().is_empty());
    }

    #[test]
    fn submit_trims_clears_and_promotes() {
        let mut state = SearchState::default();
        state.apply(SearchAction::Input("  octocat ".into()), 0);
        let effects = state.apply(SearchAction::Submit, 10);

        assert_eq!(state.submitted(), "octocat");
        assert_eq!(state.query(), "");
        assert!(!state.show_suggestions());
        assert_eq!(state.recents(), ["octocat"]);
        assert!(matches!(
            fetches(&effects).as_slice(),
            [Fetch::User { login, .. }] if login == "octocat"
        ));
        assert!(effects.contains(&Effect::PersistRecents(vec!["octocat".into()])));
        assert_eq!(state.exact_phase(), ExactPhase::Loading);
    }

    #[test]
    fn short_queries_never_fetch_suggestions() {
        let mut state = SearchState::default();
        assert!(fetches(&type_and_settle(&mut state, "o", 0)).is_empty());
        assert!(!state.show_suggestions());
        assert!(fetches(&type_and_settle(&mut state, " o ", 1_000)).is_empty());
    }

    #[test]
    fn rapid_typing_issues_one_lookup_for_final_text() {
        let mut state = SearchState::default();
        let mut generations = Vec::new();
        for text in ["oc", "oct", "octo"] {
            let effects = state.apply(SearchAction::Input(text.into()), 0);
            generations.push(debounce_generation(&effects));
        }
        let mut issued = Vec::new();
        for generation in generations {
            issued.extend(fetches(
                &state.apply(SearchAction::DebounceElapsed(generation), 300),
            ));
        }
        assert!(matches!(
            issued.as_slice(),
            [Fetch::Suggestions { prefix, .. }] if prefix == "octo"
        ));
    }

    #[test]
    fn suggestions_render_when_visible_and_loaded() {
        let mut state = SearchState::default();
        let effects = type_and_settle(&mut state, "octo", 0);
        let issued = fetches(&effects);
        let [Fetch::Suggestions { prefix, ticket }] = issued.as_slice() else {
            panic!("expected a suggestion fetch");
        };
        assert!(state.visible_suggestions().is_empty());
        state.apply(
            SearchAction::SuggestionsLoaded {
                prefix: prefix.clone(),
                ticket: *ticket,
                result: Ok(summaries(&["octocat", "octokit", "octo-org", "a", "b", "c"])),
            },
            400,
        );
        assert_eq!(state.visible_suggestions().len(), 5);
        state.apply(SearchAction::DismissSuggestions, 500);
        assert!(state.visible_suggestions().is_empty());
    }

    #[test]
    fn failed_suggestions_render_as_empty() {
        let mut state = SearchState::default();
        let effects = type_and_settle(&mut state, "octo", 0);
        let issued = fetches(&effects);
        let [Fetch::Suggestions { prefix, ticket }] = issued.as_slice() else {
            panic!("expected a suggestion fetch");
        };
        state.apply(
            SearchAction::SuggestionsLoaded {
                prefix: prefix.clone(),
                ticket: *ticket,
                result: Err(DirectoryError::Network("offline".into())),
            },
            400,
        );
        assert!(state.show_suggestions());
        assert!(state.visible_suggestions().is_empty());
    }

    #[test]
    fn picking_current_user_again_forces_refetch() {
        let mut state = SearchState::default();
        let first = fetches(&state.apply(SearchAction::SelectSuggestion("octocat".into()), 0));
        let [Fetch::User { ticket, .. }] = first.as_slice() else {
            panic!("expected exact fetch");
        };
        state.apply(
            SearchAction::UserLoaded {
                login: "octocat".into(),
                ticket: *ticket,
                result: Ok(profile("octocat")),
            },
            5,
        );

        let again = fetches(&state.apply(SearchAction::SelectSuggestion("octocat".into()), 10));
        assert!(matches!(
            again.as_slice(),
            [Fetch::User { login, .. }] if login == "octocat"
        ));
        assert!(state.is_refreshing());
        assert!(matches!(state.exact_phase(), ExactPhase::Ready(user) if user.login == "octocat"));
        assert_eq!(state.query(), "octocat");
    }

    #[test]
    fn resubmitting_same_login_also_refetches() {
        let mut state = SearchState::default();
        state.apply(SearchAction::Input("octocat".into()), 0);
        state.apply(SearchAction::Submit, 1);
        state.apply(SearchAction::Input("octocat".into()), 2);
        let effects = state.apply(SearchAction::Submit, 3);
        assert_eq!(fetches(&effects).len(), 1);
    }

    #[test]
    fn recent_pick_keeps_text_and_promotes() {
        let recents = RecentSearches::from_entries(["torvalds", "octocat"].map(String::from), 5);
        let mut state = SearchState::new(SearchConfig::default(), recents);
        state.apply(SearchAction::Input("oc".into()), 0);
        let effects = state.apply(SearchAction::SelectRecent("octocat".into()), 1);

        assert_eq!(state.query(), "octocat");
        assert_eq!(state.submitted(), "octocat");
        assert!(!state.show_suggestions());
        assert_eq!(state.recents(), ["octocat", "torvalds"]);
        assert!(effects.contains(&Effect::PersistRecents(vec![
            "octocat".into(),
            "torvalds".into()
        ])));
    }

    #[test]
    fn not_found_shows_error_instead_of_card() {
        let mut state = SearchState::default();
        state.apply(SearchAction::Input("zzz_not_a_user_zzz".into()), 0);
        let effects = state.apply(SearchAction::Submit, 1);
        let issued = fetches(&effects);
        let [Fetch::User { login, ticket }] = issued.as_slice() else {
            panic!("expected exact fetch");
        };
        state.apply(
            SearchAction::UserLoaded {
                login: login.clone(),
                ticket: *ticket,
                result: Err(DirectoryError::NotFound {
                    login: login.clone(),
                }),
            },
            2,
        );
        let ExactPhase::Failed(err) = state.exact_phase() else {
            panic!("expected failure phase");
        };
        assert_eq!(err.to_string(), "User \"zzz_not_a_user_zzz\" not found");
    }

    #[test]
    fn late_response_for_previous_login_is_not_shown() {
        let mut state = SearchState::default();
        let first = fetches(&state.apply(SearchAction::SelectSuggestion("octocat".into()), 0));
        let [Fetch::User { ticket: old_ticket, .. }] = first.as_slice() else {
            panic!("expected exact fetch");
        };
        state.apply(SearchAction::SelectSuggestion("torvalds".into()), 1);
        state.apply(
            SearchAction::UserLoaded {
                login: "octocat".into(),
                ticket: *old_ticket,
                result: Ok(profile("octocat")),
            },
            2,
        );
        assert_eq!(state.submitted(), "torvalds");
        assert_eq!(state.exact_phase(), ExactPhase::Loading);
    }

    #[test]
    fn highlight_moves_through_visible_suggestions() {
        let mut state = SearchState::default();
        let effects = type_and_settle(&mut state, "octo", 0);
        let issued = fetches(&effects);
        let [Fetch::Suggestions { prefix, ticket }] = issued.as_slice() else {
            panic!("expected a suggestion fetch");
        };
        state.apply(
            SearchAction::SuggestionsLoaded {
                prefix: prefix.clone(),
                ticket: *ticket,
                result: Ok(summaries(&["octocat", "octokit"])),
            },
            400,
        );
        state.apply(SearchAction::HighlightNext, 401);
        state.apply(SearchAction::HighlightNext, 402);
        assert_eq!(state.highlighted_login(), Some("octokit"));
        state.apply(SearchAction::HighlightNext, 403);
        assert_eq!(state.highlighted_login(), Some("octocat"));
        state.apply(SearchAction::HighlightPrev, 404);
        assert_eq!(state.highlighted(), Some(1));
    }

    #[test]
    fn clear_recents_persists_empty_list_once() {
        let recents = RecentSearches::from_entries(["octocat"].map(String::from), 5);
        let mut state = SearchState::new(SearchConfig::default(), recents);
        assert_eq!(
            state.apply(SearchAction::ClearRecents, 0),
            vec![Effect::PersistRecents(Vec::new())]
        );
        assert!(state.apply(SearchAction::ClearRecents, 1).is_empty());
    }
}
