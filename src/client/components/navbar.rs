use character_gallery::{
    gallery::{
        api::http::HttpApi,
        auth::AuthService,
        config::Config,
        session::{LocalStorage, SessionStore},
    },
    model::session::Session,
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::{components::BrandLink, router::Route, store::session::SessionState};

fn link_class(active: bool) -> &'static str {
    if active {
        "btn btn-neutral"
    } else {
        "btn btn-ghost"
    }
}

#[component]
pub fn Navbar() -> Element {
    let config = use_context::<Config>();
    let mut session = use_context::<SessionState>().session;
    let mut menu_open = use_signal(|| false);
    let route = use_route::<Route>();

    let on_home = matches!(route, Route::Home {});
    let on_characters = matches!(route, Route::Characters {});

    let logout = use_callback(move |()| {
        let api = HttpApi::new(config.clone());
        let store = SessionStore::new(LocalStorage);
        AuthService::new(&api, &store).logout();

        session.set(Session::Anonymous);
        menu_open.set(false);
        navigator().push(Route::Login {});
    });

    let display_name = session.read().display_name().map(str::to_string);

    rsx! {
        div { class: "navbar bg-base-300 shadow-md gap-4",
            div { class: "navbar-start gap-4",
                BrandLink {}
                div { class: "hidden lg:flex gap-2",
                    Link { to: Route::Home {}, class: "{link_class(on_home)}", "Home" }
                    Link { to: Route::Characters {}, class: "{link_class(on_characters)}", "Characters" }
                }
            }
            div { class: "navbar-end",
                div { class: "hidden lg:flex items-center gap-2",
                    if let Some(name) = display_name.clone() {
                        span { class: "px-4 font-medium", "{name}" }
                        button { class: "btn btn-ghost", onclick: move |_| logout.call(()), "Logout" }
                    } else {
                        Link { to: Route::Register {}, class: "btn btn-neutral", "Register" }
                        Link { to: Route::Login {}, class: "btn btn-outline", "Login" }
                    }
                }
                button {
                    class: "btn btn-ghost lg:hidden",
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() {
                        Icon { width: 24, height: 24, icon: FaXmark }
                    } else {
                        Icon { width: 24, height: 24, icon: FaBars }
                    }
                }
            }
        }
        if menu_open() {
            div { class: "lg:hidden bg-base-300 flex flex-col gap-2 p-2",
                Link {
                    to: Route::Home {},
                    class: "{link_class(on_home)}",
                    onclick: move |_| menu_open.set(false),
                    "Home"
                }
                Link {
                    to: Route::Characters {},
                    class: "{link_class(on_characters)}",
                    onclick: move |_| menu_open.set(false),
                    "Characters"
                }
                div { class: "flex justify-center gap-2 py-2",
                    if let Some(name) = display_name {
                        span { class: "px-4 py-2 font-medium", "{name}" }
                        button { class: "btn btn-ghost", onclick: move |_| logout.call(()), "Logout" }
                    } else {
                        Link {
                            to: Route::Register {},
                            class: "btn btn-neutral",
                            onclick: move |_| menu_open.set(false),
                            "Register"
                        }
                        Link {
                            to: Route::Login {},
                            class: "btn btn-outline",
                            onclick: move |_| menu_open.set(false),
                            "Login"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
