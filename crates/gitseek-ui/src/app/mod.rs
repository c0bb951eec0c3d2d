//! App shell: service wiring and mount point.

use crate::components::Header;
use crate::core::config::SearchConfig;
use crate::core::recents::RecentsRepository;
use crate::core::storage::{KeyValueStore, MemoryStore};
use crate::features::user_search::view::UserSearch;
use crate::services::github::GitHubDirectory;
use crate::services::storage::BrowserStore;
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;

pub(crate) mod context;
mod preferences;

pub(crate) use context::SearchCtx;

#[function_component(GitSeekApp)]
fn gitseek_app() -> Html {
    let ctx = use_memo(|_| build_context(), ());
    html! {
        <ContextProvider<SearchCtx> context={(*ctx).clone()}>
            <main class="app">
                <Header />
                <UserSearch />
            </main>
        </ContextProvider<SearchCtx>>
    }
}

fn build_context() -> SearchCtx {
    let (config, warnings) = SearchConfig::default().with_overrides(preferences::load_overrides());
    for warning in warnings {
        console::warn!(
            "ignoring config override",
            warning.field,
            warning.value,
            warning.reason
        );
    }

    let store: Box<dyn KeyValueStore> = match BrowserStore::probe() {
        Ok(store) => Box::new(store),
        Err(err) => {
            console::warn!("recent searches will not survive reloads", err.to_string());
            Box::new(MemoryStore::new())
        }
    };
    let recents = RecentsRepository::new(store, config.recents_key.clone(), config.recents_capacity);
    let directory = GitHubDirectory::new(config.api_base_url.clone(), config.suggestion_limit);

    SearchCtx {
        directory: Rc::new(directory),
        recents: Rc::new(recents),
        config: Rc::new(config),
    }
}

/// Mount the widget into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<GitSeekApp>::with_root(root).render();
    } else {
        yew::Renderer::<GitSeekApp>::new().render();
    }
}
