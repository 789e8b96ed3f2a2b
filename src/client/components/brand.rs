use dioxus::prelude::*;

use crate::client::router::Route;

const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn BrandLink() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            class: "flex items-center gap-2",
            img { class: "h-10", src: LOGO, alt: "Logo" }
            p { class: "text-xl font-semibold", "Character Gallery" }
        }
    )
}
