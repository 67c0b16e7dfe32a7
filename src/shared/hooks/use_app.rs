use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::shared::services::ApiClient;
use crate::shared::state::{AppController, AppState, DialogConfirm, SpawnTimer};
use crate::shared::theme::{apply_theme, get_initial_theme, PlatformThemeEnvironment};

/// Controller type the UI works with
pub type Controller = AppController<Signal<AppState>>;

/// Root state signal, seeded with the persisted theme.
/// Every theme change is mirrored onto the document and persisted.
pub fn use_app_state() -> Signal<AppState> {
    let env = use_hook(|| Rc::new(PlatformThemeEnvironment::default()));

    let initial_env = env.clone();
    let state = use_signal(move || AppState::new(get_initial_theme(&*initial_env)));

    // Memo so unrelated state changes do not re-apply the theme
    let theme = use_memo(move || state.read().theme);
    use_effect(move || {
        apply_theme(&*env, theme());
    });

    state
}

/// Controller wired to the real backend, dialog and timer.
/// Uses the `AppConfig` from context when the launcher provided one.
pub fn use_app_controller(state: Signal<AppState>) -> Controller {
    use_hook(move || {
        let config = try_consume_context::<AppConfig>().unwrap_or_default();
        tracing::info!(api = %config.api_base_url, "Document chat client starting");
        AppController::new(
            state,
            &config,
            Rc::new(ApiClient::new(config.clone())),
            Rc::new(DialogConfirm),
            Rc::new(SpawnTimer),
        )
    })
}
