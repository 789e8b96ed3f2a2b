use std::fmt;

use serde::{Deserialize, Serialize};

/// A character record as stored by the remote collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Identifier assigned by the remote store on creation
    pub id: String,
    pub name: String,
    pub image: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world: Option<String>,
    /// Email of the session that created the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Character {
    /// Returns true if the record's stored owner matches `email`
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner.as_deref() == Some(email)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "Female")]
    Female,
    /// Any value the form does not offer; the store accepts whatever is sent
    #[serde(other)]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Parses the value of the gender `<select>`, falling back to male
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "female" => Self::Female,
            _ => Self::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form state for the add/edit character form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterDraft {
    pub name: String,
    pub image: String,
    pub gender: Gender,
    pub world: String,
}

impl From<&Character> for CharacterDraft {
    fn from(character: &Character) -> Self {
        Self {
            name: character.name.clone(),
            image: character.image.clone(),
            gender: character.gender,
            world: character.world.clone().unwrap_or_default(),
        }
    }
}

/// Request body for creating or updating a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPayload {
    pub name: String,
    pub image: String,
    pub gender: Gender,
    pub world: String,
    pub owner: String,
}
