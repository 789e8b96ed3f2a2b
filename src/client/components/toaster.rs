use dioxus::prelude::*;

use crate::client::store::toast::{alert_class, Toasts};

#[component]
pub fn Toaster() -> Element {
    let toasts = use_context::<Toasts>();
    let items = toasts.queue.read().items().to_vec();

    rsx!(
        div { class: "toast toast-top toast-end z-50",
            {items.into_iter().map(|toast| {
                let id = toast.id;
                let mut toasts = toasts;
                rsx!(
                    div {
                        key: "{id}",
                        class: "alert {alert_class(toast.level)} cursor-pointer",
                        onclick: move |_| toasts.dismiss(id),
                        span { "{toast.message}" }
                    }
                )
            })}
        }
    )
}
