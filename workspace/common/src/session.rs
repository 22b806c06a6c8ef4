use serde::{Deserialize, Serialize};

/// The signed-in user as exposed by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub full_name: String,
}

/// Read-only session information handed to every view that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    user: Option<CurrentUser>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_user(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    /// Decode the JSON blob the authentication layer stores. Anything that
    /// does not decode yields an anonymous session.
    pub fn from_stored_json(raw: Option<&str>) -> Self {
        match raw.map(serde_json::from_str::<CurrentUser>) {
            Some(Ok(user)) => Self::with_user(user),
            Some(Err(err)) => {
                tracing::warn!(error = %err, "Ignoring malformed stored session user");
                Self::anonymous()
            }
            None => Self::anonymous(),
        }
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn greeting(&self) -> String {
        match &self.user {
            Some(user) if !user.full_name.is_empty() => format!("Welcome back, {}!", user.full_name),
            _ => "Welcome back!".to_string(),
        }
    }
}
