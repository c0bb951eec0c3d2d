//! Page-level configuration lookup.

use crate::core::config::ConfigOverrides;
use gloo::utils::document;

const API_BASE_META: &str = "gitseek:api-base";
const DEBOUNCE_META: &str = "gitseek:debounce-ms";
const RECENTS_KEY_META: &str = "gitseek:recents-key";
const RECENTS_LIMIT_META: &str = "gitseek:recents-limit";

pub(crate) fn load_overrides() -> ConfigOverrides {
    ConfigOverrides {
        api_base_url: meta_content(API_BASE_META),
        debounce_ms: meta_content(DEBOUNCE_META),
        recents_key: meta_content(RECENTS_KEY_META),
        recents_capacity: meta_content(RECENTS_LIMIT_META),
    }
}

fn meta_content(name: &str) -> Option<String> {
    document()
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .ok()
        .flatten()
        .and_then(|element| element.get_attribute("content"))
}
