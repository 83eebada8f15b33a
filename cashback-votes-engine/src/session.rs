//! Authentication context passed explicitly to every vote.

/// The acting user's session as far as voting is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { access_token: String },
}

impl Session {
    pub fn authenticated(access_token: impl Into<String>) -> Self {
        Self::Authenticated {
            access_token: access_token.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { access_token } => Some(access_token),
            Self::Anonymous => None,
        }
    }
}
