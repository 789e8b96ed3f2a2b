//! Factories for records used across tests.

use character_gallery::model::{
    character::{Character, CharacterDraft, Gender},
    login::{LoginForm, LoginRecord, RegisterForm},
    session::Identity,
};

pub const OWNER_EMAIL: &str = "a@x.com";
pub const OTHER_EMAIL: &str = "b@x.com";
pub const PASSWORD: &str = "hunter22";

pub fn character(id: &str, name: &str, owner: &str) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("https://images.example.com/{}.png", id),
        gender: Gender::Male,
        world: Some("Earth".to_string()),
        owner: Some(owner.to_string()),
    }
}

/// A draft that passes validation
pub fn draft(name: &str) -> CharacterDraft {
    CharacterDraft {
        name: name.to_string(),
        image: "http://x/y.png".to_string(),
        gender: Gender::Female,
        world: "Midgard".to_string(),
    }
}

pub fn identity(email: &str) -> Identity {
    Identity {
        display_name: format!("User {}", email),
        email: email.to_string(),
    }
}

pub fn login_record(email: &str, password: &str) -> LoginRecord {
    LoginRecord {
        id: None,
        email: email.to_string(),
        password: password.to_string(),
        full_name: format!("User {}", email),
    }
}

pub fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    }
}

pub fn register_form(full_name: &str, email: &str, password: &str) -> RegisterForm {
    RegisterForm {
        full_name: full_name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
    }
}
