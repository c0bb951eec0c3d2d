#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
//! Browser entry point for the GitSeek widget.
//!
//! Native builds have no DOM to mount into, so they print how to build for
//! the browser together with the defaults the widget starts from.

#[cfg(target_arch = "wasm32")]
fn main() {
    gitseek_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    native_notice(&mut std::io::stderr().lock())
}

#[cfg(not(target_arch = "wasm32"))]
fn native_notice(out: &mut impl std::io::Write) -> std::io::Result<()> {
    let defaults = gitseek_ui::core::config::SearchConfig::default();
    writeln!(
        out,
        "gitseek-ui mounts in a browser; build it for wasm32-unknown-unknown (e.g. `trunk serve`)."
    )?;
    writeln!(
        out,
        "defaults: api {}, debounce {}ms, {} recents under `{}`",
        defaults.api_base_url, defaults.debounce_ms, defaults.recents_capacity, defaults.recents_key
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::native_notice;

    #[test]
    fn notice_lists_defaults() -> std::io::Result<()> {
        let mut out = Vec::new();
        native_notice(&mut out)?;
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("wasm32-unknown-unknown"));
        assert!(text.contains("debounce 300ms"));
        assert!(text.contains("5 recents under `recentUsers`"));
        Ok(())
    }
}
