use thiserror::Error;

/// Failures raised by the user-lifecycle operations.
///
/// The first three are request-scoped domain conditions a transport layer
/// would map to distinct user-visible responses. `Store` wraps opaque
/// infrastructure failures from a collaborator and passes them through
/// unchanged.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// Input failed schema checks; raised before any store interaction.
    #[error("Invalid user data: {0}")]
    Validation(String),

    /// Creation attempted with an email already bound to an existing record.
    #[error("Email is already in use")]
    UsedEmail,

    /// A lookup, update or delete targeted an id with no matching record.
    #[error("The user does not exist")]
    UndefinedUser,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
