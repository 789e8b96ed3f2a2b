use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

const APP_NAME: &str = "Character Gallery";

/// Full-height route body that also owns the document title.
///
/// `title` is shown before the app name; without one the tab reads only the
/// app name.
#[component]
pub fn Page(
    title: Option<&'static str>,
    description: Option<&'static str>,
    #[props(default)] class: &'static str,
    children: Element,
) -> Element {
    let document_title = match title {
        Some(title) => format!("{title} | {APP_NAME}"),
        None => APP_NAME.to_string(),
    };

    rsx!(
        Title { "{document_title}" }
        if let Some(description) = description {
            Meta { name: "description", content: description }
        }
        main { class: "min-h-screen bg-base-200 p-4 {class}", {children} }
    )
}
