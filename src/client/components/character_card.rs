use character_gallery::model::character::{Character, Gender};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEarthAmericas, FaPenToSquare, FaTrash};
use dioxus_free_icons::Icon;

fn gender_badge_class(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "badge badge-info",
        Gender::Female => "badge badge-secondary",
        Gender::Other => "badge badge-neutral",
    }
}

#[component]
pub fn CharacterCard(
    character: Character,
    can_modify: bool,
    on_edit: EventHandler<Character>,
    on_delete: EventHandler<Character>,
) -> Element {
    let edit_target = character.clone();
    let delete_target = character.clone();

    rsx!(
        div { class: "card bg-base-100 shadow-md",
            figure { class: "px-5 pt-5",
                img {
                    class: "w-full h-40 object-cover rounded-md",
                    src: "{character.image}",
                    alt: "{character.name}",
                }
            }
            div { class: "card-body items-center text-center gap-2",
                h3 { class: "card-title", "{character.name}" }
                span { class: gender_badge_class(character.gender), "{character.gender}" }
                if let Some(world) = character.world.as_ref().filter(|w| !w.is_empty()) {
                    p { class: "text-sm opacity-70 flex items-center gap-1",
                        Icon { width: 14, height: 14, icon: FaEarthAmericas }
                        "{world}"
                    }
                }
                if can_modify {
                    div { class: "card-actions mt-2",
                        button {
                            class: "btn btn-ghost btn-sm",
                            title: "Edit",
                            onclick: move |_| on_edit.call(edit_target.clone()),
                            Icon { width: 16, height: 16, icon: FaPenToSquare }
                        }
                        button {
                            class: "btn btn-ghost btn-sm",
                            title: "Delete",
                            onclick: move |_| on_delete.call(delete_target.clone()),
                            Icon { width: 16, height: 16, icon: FaTrash }
                        }
                    }
                }
            }
        }
    )
}
