//! Queue of transient notifications shown above the router.

/// Most notifications kept at once; the oldest are dropped first
pub const MAX_TOASTS: usize = 4;

/// How long a notification stays up before it is dismissed
pub const AUTO_DISMISS_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Notifications in arrival order, newest last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Appends a notification and returns its ID for a later [`Self::dismiss`]
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push(Toast {
            id,
            level,
            message: message.into(),
        });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }

        id
    }

    /// Removes the notification `id`, returning false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);

        self.items.len() != before
    }
}
