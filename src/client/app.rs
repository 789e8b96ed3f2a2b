use character_gallery::gallery::{
    config::Config,
    session::{LocalStorage, SessionStore},
};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::{Page, Toaster},
    router::Route,
    store::{session::SessionState, toast::Toasts},
};

const FAVICON: Asset = asset!("/assets/logo.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        Config::from_env().inspect_err(|e| tracing::error!("Configuration error: {}", e))
    });

    rsx!(
        document::Link { rel: "icon", href: FAVICON }
        document::Stylesheet { href: TAILWIND_CSS }
        match config {
            Ok(config) => rsx!(Gallery { config }),
            Err(err) => rsx!(
                Page {
                    title: "Configuration Error",
                    class: "flex items-center justify-center",
                    div { class: "alert alert-error max-w-xl",
                        "{err}"
                    }
                }
            ),
        }
    )
}

/// Provides the shared state every route reads, then mounts the router
#[component]
fn Gallery(config: Config) -> Element {
    use_context_provider(|| config.clone());
    use_context_provider(|| SessionState::new(SessionStore::new(LocalStorage).load()));
    use_context_provider(Toasts::new);

    rsx!(
        Toaster {}
        Router::<Route> {}
    )
}
