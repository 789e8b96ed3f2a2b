use dioxus::prelude::*;

#[component]
pub fn Spinner() -> Element {
    rsx!(
        div { class: "flex justify-center items-center min-h-screen",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}
