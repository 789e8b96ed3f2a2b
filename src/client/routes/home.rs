use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::session::SessionState};

#[component]
pub fn AccountButtons() -> Element {
    let session = use_context::<SessionState>().session;

    rsx!(
        ul { class: "flex gap-2",
            if session.read().is_authenticated() {
                li {
                    Link {
                        to: Route::Characters {},
                        class: "btn btn-primary w-40",
                        "Browse Characters"
                    }
                }
            } else {
                li {
                    Link { to: Route::Login {}, class: "btn btn-primary w-28", "Login" }
                }
                li {
                    Link { to: Route::Register {}, class: "btn btn-outline w-28", "Register" }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    let session = use_context::<SessionState>().session;
    let greeting = match session.read().display_name() {
        Some(name) => format!("Welcome back, {}", name),
        None => "Welcome".to_string(),
    };

    rsx!(
        Page {
            description: "A gallery of characters you can search, add, and curate.",
            class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256 text-center",
                h1 { class: "text-4xl font-bold", "Character Gallery" }
                p { class: "text-lg", "{greeting}" }
                p {
                    "Browse the gallery and search characters by name. Log in to add your own characters, and to edit or delete the ones you created."
                }
                AccountButtons {}
                Link { to: Route::Characters {}, class: "link", "Go to the gallery" }
            }
        }
    )
}
