//! User search view.
//!
//! # Design
//! - Every interaction becomes a [`SearchAction`] applied to the shared store.
//! - Effects returned by the state machine are executed here and nowhere
//!   else: one debounce timer, spawned lookups, storage writes.
//! - Failures are logged to the console; only exact-lookup errors reach the UI.
//! - The component owns the timer slot; callbacks only hold a weak handle.

use crate::app::SearchCtx;
use crate::components::{RecentSearches, SuggestionDropdown, UserCard};
use crate::core::debounce::TimerHandle;
use crate::core::store::SearchStore;
use crate::features::user_search::actions::SearchAction;
use crate::features::user_search::effects::{Effect, run_fetch};
use crate::features::user_search::logic::{SuggestionKey, interpret_key};
use crate::features::user_search::state::{ExactPhase, SearchState};
use gloo::console;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

const PLACEHOLDER: &str = "Enter Github Username...";

#[derive(Clone)]
struct SearchRuntime {
    ctx: SearchCtx,
    dispatch: Dispatch<SearchStore>,
    timer: TimerHandle<Timeout>,
}

impl SearchRuntime {
    fn hydrate(&self) {
        let loaded = self.ctx.recents.load();
        if let Some(warning) = loaded.warning {
            console::warn!("discarding stored recent searches", self.ctx.recents.key(), warning);
        }
        let config = (*self.ctx.config).clone();
        self.dispatch.reduce_mut(|store| {
            store.search = SearchState::new(config, loaded.entries);
        });
    }

    fn send(&self, action: SearchAction) {
        let mut effects = Vec::new();
        self.dispatch.reduce_mut(|store| {
            effects = store.search.apply(action, now_ms());
        });
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        match effect {
            Effect::ScheduleDebounce {
                generation,
                delay_ms,
            } => {
                let runtime = self.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    runtime.send(SearchAction::DebounceElapsed(generation));
                });
                // Replacing the handle cancels the pending timeout.
                self.timer.replace(timeout);
            }
            Effect::Fetch(fetch) => {
                let runtime = self.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let action = run_fetch(runtime.ctx.directory.as_ref(), fetch).await;
                    log_lookup_failure(&action);
                    runtime.send(action);
                });
            }
            Effect::PersistRecents(entries) => {
                if let Err(err) = self.ctx.recents.save(&entries) {
                    console::error!("failed to persist recent searches", err.to_string());
                }
            }
        }
    }
}

fn log_lookup_failure(action: &SearchAction) {
    match action {
        SearchAction::SuggestionsLoaded {
            prefix,
            result: Err(err),
            ..
        } => console::warn!("suggestion lookup failed", prefix.clone(), err.to_string()),
        SearchAction::UserLoaded {
            login,
            result: Err(err),
            ..
        } => console::warn!("user lookup failed", login.clone(), err.to_string()),
        _ => {}
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[function_component(UserSearch)]
pub(crate) fn user_search() -> Html {
    let ctx = use_context::<SearchCtx>();
    let (store, dispatch) = use_store::<SearchStore>();
    let timer_slot = use_mut_ref(|| None as Option<Timeout>);
    let runtime = ctx.map(|ctx| SearchRuntime {
        ctx,
        dispatch,
        timer: TimerHandle::new(&timer_slot),
    });

    {
        let runtime = runtime.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(runtime) = runtime {
                    runtime.hydrate();
                }
                || ()
            },
            (),
        );
    }

    let Some(runtime) = runtime else {
        return html! {
            <p class="status error">{"Missing search context."}</p>
        };
    };

    let state = &store.search;
    let suggestions = state.visible_suggestions().to_vec();
    let has_suggestions = !suggestions.is_empty();

    let oninput = {
        let runtime = runtime.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                runtime.send(SearchAction::Input(input.value()));
            }
        })
    };

    let onkeydown = {
        let runtime = runtime.clone();
        let highlighted_login = state.highlighted_login().map(str::to_string);
        Callback::from(move |event: KeyboardEvent| match interpret_key(&event.key()) {
            Some(SuggestionKey::Next) if has_suggestions => {
                event.prevent_default();
                runtime.send(SearchAction::HighlightNext);
            }
            Some(SuggestionKey::Prev) if has_suggestions => {
                event.prevent_default();
                runtime.send(SearchAction::HighlightPrev);
            }
            Some(SuggestionKey::Dismiss) => runtime.send(SearchAction::DismissSuggestions),
            Some(SuggestionKey::Accept) => {
                if let Some(login) = highlighted_login.clone() {
                    event.prevent_default();
                    runtime.send(SearchAction::SelectSuggestion(login));
                }
            }
            _ => {}
        })
    };

    let onsubmit = {
        let runtime = runtime.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            runtime.send(SearchAction::Submit);
        })
    };

    let on_suggestion = {
        let runtime = runtime.clone();
        Callback::from(move |login: String| runtime.send(SearchAction::SelectSuggestion(login)))
    };

    let on_recent = {
        let runtime = runtime.clone();
        Callback::from(move |login: String| runtime.send(SearchAction::SelectRecent(login)))
    };

    let on_clear = {
        let runtime = runtime.clone();
        Callback::from(move |()| runtime.send(SearchAction::ClearRecents))
    };

    let result = match state.exact_phase() {
        ExactPhase::Idle => html! {},
        ExactPhase::Loading => html! { <p class="status">{"Loading..."}</p> },
        ExactPhase::Failed(err) => html! { <p class="status error">{err.to_string()}</p> },
        ExactPhase::Ready(user) => html! {
            <UserCard user={user.clone()} refreshing={state.is_refreshing()} />
        },
    };

    html! {
        <section class="user-search">
            <form class="form" {onsubmit}>
                <div class="dropdown-wrapper">
                    <input
                        type="text"
                        placeholder={PLACEHOLDER}
                        value={state.query().to_string()}
                        autocomplete="off"
                        role="combobox"
                        aria-autocomplete="list"
                        aria-controls="user-suggestions"
                        aria-expanded={if has_suggestions { "true" } else { "false" }}
                        {oninput}
                        {onkeydown}
                    />
                    {if has_suggestions {
                        html! {
                            <SuggestionDropdown
                                suggestions={suggestions}
                                highlighted={state.highlighted()}
                                on_select={on_suggestion}
                            />
                        }
                    } else {
                        html! {}
                    }}
                </div>
                <button type="submit">{"Search"}</button>
            </form>

            {result}

            {if state.recents().is_empty() {
                html! {}
            } else {
                html! {
                    <RecentSearches
                        users={state.recents().to_vec()}
                        on_select={on_recent}
                        on_clear={Some(on_clear)}
                    />
                }
            }}
        </section>
    }
}
