//! Clickable list of recently confirmed usernames.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RecentSearchesProps {
    pub users: Vec<String>,
    pub on_select: Callback<String>,
    #[prop_or_default]
    pub on_clear: Option<Callback<()>>,
}

#[function_component(RecentSearches)]
pub(crate) fn recent_searches(props: &RecentSearchesProps) -> Html {
    html! {
        <section class="recent-searches">
            <div class="recent-header">
                <h3>{"Recent Searches"}</h3>
                {props.on_clear.clone().map(|on_clear| html! {
                    <button
                        type="button"
                        class="link"
                        onclick={Callback::from(move |_| on_clear.emit(()))}>
                        {"Clear"}
                    </button>
                }).unwrap_or_default()}
            </div>
            <ul>
                { for props.users.iter().map(|user| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let user = user.clone();
                        Callback::from(move |_| on_select.emit(user.clone()))
                    };
                    html! {
                        <li key={user.clone()}>
                            <button type="button" {onclick}>{user.clone()}</button>
                        </li>
                    }
                }) }
            </ul>
        </section>
    }
}
