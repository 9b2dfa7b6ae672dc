use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Candidate record for create, or partial patch for update.
///
/// Anything beyond `email` and `password` is a free-form profile field and
/// is carried through to the store untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserInput {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl UserInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            profile: Map::new(),
        }
    }
}
