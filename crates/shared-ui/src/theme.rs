use dioxus::prelude::*;
use shared_types::{AppError, ThemeMode};

/// Shared theme state provided as context by [`ThemeProvider`].
///
/// Views receive it explicitly as `Option<ThemeState>` and resolve it with
/// [`use_theme_binding`].
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeState {
    pub mode: Signal<ThemeMode>,
}

impl ThemeState {
    /// Create state backed by a fresh signal. Must run inside a component scope.
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: Signal::new(initial),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        (self.mode)()
    }

    /// Flip between light and dark.
    pub fn toggle(&self) {
        let mut mode = self.mode;
        let next = mode.peek().toggled();
        mode.set(next);
    }
}

/// Resolve the theme a view should use.
///
/// With a provider the shared state is returned as is. Without one the view
/// gets a local light-mode signal whose toggle only affects that view.
pub fn use_theme_binding(provided: Option<ThemeState>) -> ThemeState {
    let fallback = use_signal(ThemeMode::default);
    let resolved = require_theme(provided);
    use_hook(|| {
        if let Err(err) = &resolved {
            tracing::warn!(%err, "using local light-mode fallback");
        }
    });
    resolved.unwrap_or(ThemeState { mode: fallback })
}

fn require_theme(provided: Option<ThemeState>) -> Result<ThemeState, AppError> {
    provided.ok_or_else(|| AppError::theme_unavailable("no ThemeProvider above this view"))
}

/// Provide [`ThemeState`] to the tree.
///
/// The initial mode is whatever was persisted under `storage_key`, else
/// `default_mode`. Every change is applied to `<html>`. Only the web build
/// persists the mode; desktop starts from `default_mode` on every launch.
#[component]
pub fn ThemeProvider(
    #[props(default)] default_mode: ThemeMode,
    #[props(into, default = "theme".to_string())] storage_key: String,
    children: Element,
) -> Element {
    let key = storage_key.clone();
    let state = use_context_provider(move || {
        ThemeState::new(load_persisted_mode(&key).unwrap_or(default_mode))
    });

    use_effect(move || {
        let mode = state.mode();
        apply_theme(mode, &storage_key);
    });

    rsx! { {children} }
}

/// Update the document's `data-theme` attribute and persist the mode.
fn apply_theme(mode: ThemeMode, storage_key: &str) {
    tracing::debug!(theme = mode.as_str(), "applying theme");
    document::eval(&data_theme_script(mode));
    persist_mode(mode, storage_key);
}

fn data_theme_script(mode: ThemeMode) -> String {
    format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        mode.as_str()
    )
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn load_persisted_mode(storage_key: &str) -> Option<ThemeMode> {
    let value = local_storage()?.get_item(storage_key).ok()??;
    Some(ThemeMode::from_key(&value))
}

#[cfg(target_arch = "wasm32")]
fn persist_mode(mode: ThemeMode, storage_key: &str) {
    let saved = local_storage().map(|storage| storage.set_item(storage_key, mode.as_str()));
    if !matches!(saved, Some(Ok(()))) {
        tracing::debug!(storage_key, "theme not persisted, localStorage unavailable");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_persisted_mode(_storage_key: &str) -> Option<ThemeMode> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
fn persist_mode(_mode: ThemeMode, _storage_key: &str) {}
