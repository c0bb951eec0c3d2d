use yew::prelude::*;

#[function_component(Header)]
pub(crate) fn header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"GitHub User Search"}</h1>
        </header>
    }
}
