use lazy_static::lazy_static;
use regex::Regex;

use crate::users::dto::UserInput;

/// Which schema a candidate record is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// `email` and `password` are required.
    Create,
    /// Every field optional; present fields must still be well-formed.
    Update,
}

#[derive(Debug, Clone)]
pub struct ValidationRules {
    pub password_min_len: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            password_min_len: 8,
        }
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Pure schema check; never touches a collaborator.
pub fn validate(input: &UserInput, kind: SchemaKind, rules: &ValidationRules) -> Result<(), String> {
    let mut issues = Vec::new();

    match &input.email {
        Some(email) if !is_valid_email(email) => {
            issues.push(format!("email {:?} is not a valid address", email))
        }
        None if kind == SchemaKind::Create => issues.push("email is required".to_string()),
        _ => {}
    }

    match &input.password {
        Some(password) if password.len() < rules.password_min_len => issues.push(format!(
            "password must be at least {} characters",
            rules.password_min_len
        )),
        None if kind == SchemaKind::Create => issues.push("password is required".to_string()),
        _ => {}
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ValidationRules {
        ValidationRules::default()
    }

    #[test]
    fn create_accepts_well_formed_input() {
        let input = UserInput::new("a@x.com", "secret123");
        assert!(validate(&input, SchemaKind::Create, &rules()).is_ok());
    }

    #[test]
    fn create_requires_email() {
        let input = UserInput {
            password: Some("secret123".to_string()),
            ..Default::default()
        };
        let err = validate(&input, SchemaKind::Create, &rules()).unwrap_err();
        assert!(err.contains("email is required"));
    }

    #[test]
    fn create_requires_password() {
        let input = UserInput {
            email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        let err = validate(&input, SchemaKind::Create, &rules()).unwrap_err();
        assert!(err.contains("password is required"));
    }

    #[test]
    fn create_rejects_malformed_email_and_short_password_together() {
        let input = UserInput::new("not-an-email", "short");
        let err = validate(&input, SchemaKind::Create, &rules()).unwrap_err();
        assert!(err.contains("not a valid address"));
        assert!(err.contains("at least 8 characters"));
    }

    #[test]
    fn update_accepts_empty_patch() {
        let input = UserInput::default();
        assert!(validate(&input, SchemaKind::Update, &rules()).is_ok());
    }

    #[test]
    fn update_still_checks_present_fields() {
        let input = UserInput {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(validate(&input, SchemaKind::Update, &rules()).is_err());

        let input = UserInput {
            password: Some("short".to_string()),
            ..Default::default()
        };
        assert!(validate(&input, SchemaKind::Update, &rules()).is_err());
    }

    #[test]
    fn min_password_length_is_configurable() {
        let rules = ValidationRules {
            password_min_len: 12,
        };
        let input = UserInput::new("a@x.com", "elevenchars");
        assert!(validate(&input, SchemaKind::Create, &rules).is_err());
    }
}
