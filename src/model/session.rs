/// Identity of the logged in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
    pub email: String,
}

/// Locally cached login state, read once per page load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Anonymous => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.identity().map(|identity| identity.email.as_str())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.identity().map(|identity| identity.display_name.as_str())
    }
}

impl From<Identity> for Session {
    fn from(identity: Identity) -> Self {
        Self::Authenticated(identity)
    }
}
