use character_gallery::model::character::{CharacterDraft, Gender};
use dioxus::prelude::*;
use dioxus_logger::tracing;

#[component]
pub fn CharacterForm(
    mut draft: Signal<CharacterDraft>,
    editing: bool,
    on_submit: EventHandler<()>,
) -> Element {
    let current = draft.read().clone();

    rsx!(
        div {
            class: "card bg-base-100 shadow-lg max-w-xl mx-auto mb-16",
            onmounted: move |element| async move {
                if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!(error = ?e, "Failed to scroll character form into view");
                }
            },
            div { class: "card-body gap-4",
                h2 { class: "card-title justify-center text-2xl",
                    if editing { "Edit Character" } else { "Add New Character" }
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Name",
                    value: "{current.name}",
                    oninput: move |e| draft.write().name = e.value(),
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "Image URL",
                    value: "{current.image}",
                    oninput: move |e| draft.write().image = e.value(),
                }
                select {
                    class: "select select-bordered w-full",
                    value: "{current.gender}",
                    onchange: move |e| draft.write().gender = Gender::from_form_value(&e.value()),
                    option { value: "male", selected: current.gender == Gender::Male, "Male" }
                    option { value: "female", selected: current.gender == Gender::Female, "Female" }
                }
                input {
                    class: "input input-bordered w-full",
                    r#type: "text",
                    placeholder: "World",
                    value: "{current.world}",
                    oninput: move |e| draft.write().world = e.value(),
                }
                button {
                    class: "btn btn-primary mt-4",
                    onclick: move |_| on_submit.call(()),
                    if editing { "Save Changes" } else { "Add Character" }
                }
            }
        }
    )
}
