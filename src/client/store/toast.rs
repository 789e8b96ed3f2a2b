use character_gallery::gallery::toast::{ToastLevel, ToastQueue, AUTO_DISMISS_MS};
use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use gloo_timers::future::TimeoutFuture;

pub fn alert_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "alert-success",
        ToastLevel::Info => "alert-info",
        ToastLevel::Error => "alert-error",
    }
}

/// Context handle over the shared [`ToastQueue`]
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    pub queue: Signal<ToastQueue>,
}

impl Toasts {
    /// Must be called from within a component scope
    pub fn new() -> Self {
        Self {
            queue: Signal::new(ToastQueue::new()),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.queue.write().dismiss(id);
    }

    fn push(&mut self, level: ToastLevel, message: String) {
        let id = self.queue.write().push(level, message);

        // Spawned on the root scope so the timer outlives the route that raised it
        let mut toasts = *self;
        spawn_forever(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.dismiss(id);
        });
    }
}
