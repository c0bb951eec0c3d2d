//! Autocomplete list rendered under the search input.
//!
//! # Design
//! - Purely prop-driven; visibility and highlight are decided by the caller.
//! - Picks fire on `mousedown` so the input keeps focus.

use gitseek_api_models::UserSummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SuggestionDropdownProps {
    pub suggestions: Vec<UserSummary>,
    #[prop_or_default]
    pub highlighted: Option<usize>,
    pub on_select: Callback<String>,
}

#[function_component(SuggestionDropdown)]
pub(crate) fn suggestion_dropdown(props: &SuggestionDropdownProps) -> Html {
    html! {
        <ul class="suggestions" role="listbox" id="user-suggestions">
            { for props.suggestions.iter().enumerate().map(|(index, user)| {
                let active = props.highlighted == Some(index);
                let onmousedown = {
                    let on_select = props.on_select.clone();
                    let login = user.login.clone();
                    Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        on_select.emit(login.clone());
                    })
                };
                html! {
                    <li
                        key={user.login.clone()}
                        role="option"
                        aria-selected={if active { "true" } else { "false" }}
                        class={classes!("suggestion", active.then_some("active"))}
                        {onmousedown}>
                        <img class="avatar-xs" src={user.avatar_url.clone()} alt={user.login.clone()} />
                        <span>{user.login.clone()}</span>
                    </li>
                }
            }) }
        </ul>
    }
}
