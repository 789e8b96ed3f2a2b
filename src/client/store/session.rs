use character_gallery::model::session::Session;
use dioxus::prelude::*;

/// Session read from local storage when the app mounted
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
}

impl SessionState {
    /// Must be called from within a component scope
    pub fn new(session: Session) -> Self {
        Self {
            session: Signal::new(session),
        }
    }
}
