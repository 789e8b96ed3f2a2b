use character_gallery::{
    gallery::{
        api::http::HttpApi,
        auth::AuthService,
        config::Config,
        error::Error,
        session::{LocalStorage, SessionStore},
    },
    model::login::RegisterForm,
};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::toast::Toasts};

#[component]
pub fn Register() -> Element {
    let config = use_context::<Config>();
    let mut toasts = use_context::<Toasts>();

    let mut form = use_signal(RegisterForm::default);
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

            match AuthService::new(&api, &store).register(&values).await {
                Ok(_) => {
                    toasts.success("Registration successful! Please log in.");
                    navigator().push(Route::Login {});
                }
                Err(Error::Validation(err)) => field_error.set(Some(err.to_string())),
                Err(err) => toasts.error(err.notice("Registration failed. Please try again later.")),
            }

            submitting.set(false);
        });
    };

    let current = form.read().clone();

    rsx!(
        Page {
            title: "Register",
            class: "flex items-center justify-center bg-gradient-to-br from-info to-primary",
            div { class: "card bg-base-100 shadow-2xl max-w-md w-full",
                div { class: "card-body",
                    h2 { class: "text-3xl font-bold text-center mb-4", "Register" }
                    form { class: "flex flex-col gap-4", onsubmit: on_submit,
                        label { class: "form-control w-full",
                            span { class: "label-text mb-1", "Full Name" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "text",
                                name: "fullName",
                                value: "{current.full_name}",
                                oninput: move |e| form.write().full_name = e.value(),
                            }
                        }
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
                        label { class: "form-control w-full",
                            span { class: "label-text mb-1", "Confirm Password" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "password",
                                name: "confirmPassword",
                                value: "{current.confirm_password}",
                                oninput: move |e| form.write().confirm_password = e.value(),
                            }
                        }
                        if let Some(err) = field_error() {
                            p { class: "text-error text-sm", "{err}" }
                        }
                        button {
                            class: "btn btn-primary w-full",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Registering..." } else { "Register" }
                        }
                    }
                    p { class: "mt-6 text-center",
                        "Already have an account? "
                        Link { to: Route::Login {}, class: "link link-primary", "Log In" }
                    }
                }
            }
        }
    )
}
