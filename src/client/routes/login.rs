use character_gallery::{
    gallery::{
        api::http::HttpApi,
        auth::AuthService,
        config::Config,
        error::Error,
        session::{LocalStorage, SessionStore},
    },
    model::login::LoginForm,
};
use dioxus::prelude::*;

use crate::client::{
    components::Page,
    router::Route,
    store::{session::SessionState, toast::Toasts},
};

#[component]
pub fn Login() -> Element {
    let config = use_context::<Config>();
    let mut session = use_context::<SessionState>().session;
    let mut toasts = use_context::<Toasts>();

    let mut form = use_signal(LoginForm::default);
    let mut field_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if submitting() {
            return;
        }

        let config = config.clone();
        let values = form();
        submitting.set(true);
        field_error.set(None);

        spawn(async move {
            let api = HttpApi::new(config);
            let store = SessionStore::new(LocalStorage);

            match AuthService::new(&api, &store).login(&values).await {
                Ok(identity) => {
                    session.set(identity.into());
                    toasts.success("Login successful! Redirecting to home…");
                    navigator().push(Route::Home {});
                }
                Err(Error::Validation(err)) => field_error.set(Some(err.to_string())),
                Err(err) => toasts.error(err.notice("Login failed. Please try again later.")),
            }

            submitting.set(false);
        });
    };

    let current = form.read().clone();

    rsx!(
        Page {
            title: "Log In",
            class: "flex items-center justify-center bg-gradient-to-br from-success to-info",
            div { class: "card bg-base-100 shadow-2xl max-w-md w-full",
                div { class: "card-body",
                    h2 { class: "text-3xl font-bold text-center mb-4", "Log In" }
                    form { class: "flex flex-col gap-4", onsubmit: on_submit,
                        label { class: "form-control w-full",
                            span { class: "label-text mb-1", "Email Address" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "email",
                                name: "email",
                                value: "{current.email}",
                                oninput: move |e| form.write().email = e.value(),
                            }
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text mb-1", "Password" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "password",
                                name: "password",
                                value: "{current.password}",
                                oninput: move |e| form.write().password = e.value(),
                            }
                        }
                        if let Some(err) = field_error() {
                            p { class: "text-error text-sm", "{err}" }
                        }
                        button {
                            class: "btn btn-primary w-full",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Logging In..." } else { "Log In" }
                        }
                    }
                    p { class: "mt-6 text-center",
                        "Don’t have an account? "
                        Link { to: Route::Register {}, class: "link link-primary", "Register" }
                    }
                }
            }
        }
    )
}
