use character_gallery::{
    gallery::{
        api::http::HttpApi,
        collection::{CharacterClient, DeleteOutcome},
        config::Config,
        error::AuthError,
        reconcile::reconcile,
    },
    model::character::{Character, CharacterDraft},
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaPlus, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::{
    components::{CharacterCard, CharacterForm, Page, Spinner},
    store::{session::SessionState, toast::Toasts},
};

/// Asks the browser to confirm a delete
fn confirm_delete(character: &Character) -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message(&format!(
                    "Are you sure you want to delete \"{}\"?",
                    character.name
                ))
                .ok()
        })
        .unwrap_or(false)
}

#[component]
pub fn Characters() -> Element {
    let config = use_context::<Config>();
    let session = use_context::<SessionState>().session;
    let mut toasts = use_context::<Toasts>();

    // The session is fixed for the lifetime of the page
    let client = use_hook(|| CharacterClient::new(HttpApi::new(config), session.peek().clone()));

    let mut characters = use_signal(Vec::<Character>::new);
    let mut loading = use_signal(|| true);
    let mut search_term = use_signal(String::new);
    let mut show_mine = use_signal(|| false);
    let mut show_form = use_signal(|| false);
    let mut draft = use_signal(CharacterDraft::default);
    let mut editing = use_signal(|| None::<String>);

    {
        let client = client.clone();
        use_future(move || {
            let client = client.clone();
            async move {
                match client.list().await {
                    Ok(mutation) => characters.set(reconcile(Vec::new(), mutation)),
                    Err(err) => {
                        characters.set(Vec::new());
                        toasts.error(err.notice("Failed to load characters"));
                    }
                }
                loading.set(false);
            }
        });
    }

    let mut reset_form = move || {
        draft.set(CharacterDraft::default());
        editing.set(None);
    };

    let on_toggle_form = {
        let client = client.clone();
        move |_: MouseEvent| {
            if show_form() {
                show_form.set(false);
                return;
            }
            if !client.session().is_authenticated() {
                toasts.error("Please log in to add characters");
                return;
            }
            reset_form();
            show_form.set(true);
        }
    };

    let on_submit = {
        let client = client.clone();
        move |()| {
            let client = client.clone();
            let current = draft();
            let target = editing();
            let snapshot = characters();

            spawn(async move {
                let (result, success, failure) = match target.as_deref() {
                    Some(id) => (
                        client.update(&snapshot, id, &current).await,
                        "Character updated",
                        "Failed to update character",
                    ),
                    None => (
                        client.create(&current).await,
                        "Character added",
                        "Failed to add character",
                    ),
                };

                match result {
                    Ok(mutation) => {
                        characters.with_mut(|list| *list = reconcile(std::mem::take(list), mutation));
                        toasts.success(success);
                        reset_form();
                        show_form.set(false);
                    }
                    Err(err) => toasts.error(err.notice(failure)),
                }
            });
        }
    };

    let on_edit = {
        let client = client.clone();
        move |character: Character| {
            if !client.can_modify(&character) {
                toasts.error(AuthError::NotOwnerEdit.to_string());
                return;
            }
            draft.set(CharacterDraft::from(&character));
            editing.set(Some(character.id));
            show_form.set(true);
        }
    };

    let on_delete = {
        let client = client.clone();
        move |character: Character| {
            let client = client.clone();
            let snapshot = characters();

            spawn(async move {
                match client.delete(&snapshot, &character.id, confirm_delete).await {
                    Ok(DeleteOutcome::Deleted(mutation)) => {
                        characters.with_mut(|list| *list = reconcile(std::mem::take(list), mutation));
                        if editing.peek().as_deref() == Some(character.id.as_str()) {
                            reset_form();
                            show_form.set(false);
                        }
                        toasts.info("Character deleted");
                    }
                    Ok(DeleteOutcome::Cancelled) => (),
                    Err(err) => toasts.error(err.notice("Failed to delete character")),
                }
            });
        }
    };

    if loading() {
        return rsx!(Spinner {});
    }

    let visible: Vec<Character> = client
        .filter(&characters.read(), &search_term.read(), show_mine())
        .into_iter()
        .cloned()
        .collect();
    let header = match client.session().email() {
        Some(email) => format!("Logged in as {}", email),
        None => "Please log in".to_string(),
    };
    let add_class = if client.session().is_authenticated() {
        "btn btn-ghost btn-square text-primary"
    } else {
        "btn btn-ghost btn-square opacity-50 cursor-not-allowed"
    };

    rsx!(
        Page {
            title: "Characters",
            description: "Browse, search, and manage characters.",
            class: "py-10",
            div { class: "max-w-7xl mx-auto px-4",
                header { class: "text-center mb-8",
                    h1 { class: "text-4xl font-bold", "Character Gallery" }
                    p { class: "mt-2 opacity-70", "{header}" }
                }
                div { class: "flex items-center gap-2 w-full max-w-md mx-auto mb-6",
                    label { class: "input input-bordered flex items-center gap-2 grow",
                        Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                        input {
                            class: "grow",
                            r#type: "text",
                            placeholder: "Search characters...",
                            value: "{search_term}",
                            oninput: move |e| search_term.set(e.value()),
                        }
                    }
                    if show_form() {
                        button {
                            class: "btn btn-ghost btn-square text-error",
                            title: "Close form",
                            onclick: on_toggle_form.clone(),
                            Icon { width: 24, height: 24, icon: FaXmark }
                        }
                    } else {
                        button {
                            class: add_class,
                            title: "Add character",
                            onclick: on_toggle_form,
                            Icon { width: 24, height: 24, icon: FaPlus }
                        }
                    }
                }
                div { class: "flex justify-center mb-10",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_mine.toggle(),
                        if show_mine() { "Show All" } else { "Show Mine" }
                    }
                }
                if show_form() {
                    CharacterForm {
                        draft,
                        editing: editing.read().is_some(),
                        on_submit,
                    }
                }
                if visible.is_empty() {
                    p { class: "text-center text-error text-lg mt-6", "Oops! No characters found." }
                } else {
                    div { class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6",
                        {visible.into_iter().map(|character| {
                            let key = character.id.clone();
                            let can_modify = client.can_modify(&character);
                            rsx!(
                                CharacterCard {
                                    key: "{key}",
                                    character,
                                    can_modify,
                                    on_edit: on_edit.clone(),
                                    on_delete: on_delete.clone(),
                                }
                            )
                        })}
                    }
                }
            }
        }
    )
}
