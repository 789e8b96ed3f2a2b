use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Characters, Home, Login, NotFound, Register},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/characters")]
    Characters {},

    #[end_layout]

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
