use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::UserServiceError;
use crate::logger::EventLogger;
use crate::users::dto::UserInput;
use crate::users::password::PasswordHasher;
use crate::users::repo::UserStore;
use crate::users::repo_types::{DeleteResult, NewUser, User, UserFilter, UserPatch};
use crate::users::validation::{validate, SchemaKind, ValidationRules};

/// Core user-lifecycle component: validate, gate on uniqueness or existence,
/// transform, persist, log the outcome.
///
/// Stateless between calls; every dependency is an injected collaborator, so
/// any number of callers may share one instance.
pub struct UserLifecycleService {
    store: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    events: Arc<dyn EventLogger>,
    rules: ValidationRules,
}

impl UserLifecycleService {
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        events: Arc<dyn EventLogger>,
        rules: ValidationRules,
    ) -> Self {
        Self {
            store,
            hasher,
            events,
            rules,
        }
    }

    /// All records in the store's natural iteration order. Pure observer.
    pub async fn list_all(&self) -> Result<Vec<User>, UserServiceError> {
        Ok(self.store.find_all().await?)
    }

    /// Create a user from a candidate record. The plaintext password never
    /// reaches the store: it is replaced with the hash before insertion.
    pub async fn create(&self, candidate: UserInput) -> Result<User, UserServiceError> {
        if let Err(reason) = validate(&candidate, SchemaKind::Create, &self.rules) {
            self.events.error("Invalid user data");
            return Err(UserServiceError::Validation(reason));
        }
        let (email, password) = match (candidate.email, candidate.password) {
            (Some(email), Some(password)) => (email, password),
            _ => {
                self.events.error("Invalid user data");
                return Err(UserServiceError::Validation(
                    "email and password are required".to_string(),
                ));
            }
        };

        // Advisory fast path; the store's unique index is the backstop for
        // the race between this check and the insert.
        if self
            .store
            .find_one(&UserFilter::by_email(email.as_str()))
            .await?
            .is_some()
        {
            self.events.error("Email is already in use");
            return Err(UserServiceError::UsedEmail);
        }

        let hashed = self.hasher.hash(&password).await?;
        let now = OffsetDateTime::now_utc();
        let user = self
            .store
            .insert(NewUser {
                email,
                password: hashed,
                profile: candidate.profile,
                created_at: now,
                updated_at: now,
            })
            .await?;

        self.events.info("User created successfully", Some(&user));
        Ok(user)
    }

    /// Exact-id lookup. Returns the record unchanged; emits nothing on
    /// success.
    pub async fn get_by_id(&self, id: Uuid) -> Result<User, UserServiceError> {
        match self.store.find_one(&UserFilter::by_id(id)).await? {
            Some(user) => Ok(user),
            None => {
                self.events.error("The user does not exist");
                Err(UserServiceError::UndefinedUser)
            }
        }
    }

    /// Merge a partial patch into the record, restamping `updated_at`.
    ///
    /// A `password` in the patch is stored exactly as supplied; create is
    /// the only path that hashes, so callers patching a password must hash
    /// it themselves.
    pub async fn update_by_id(
        &self,
        id: Uuid,
        patch: UserInput,
    ) -> Result<User, UserServiceError> {
        if let Err(reason) = validate(&patch, SchemaKind::Update, &self.rules) {
            self.events.error("Invalid user data");
            return Err(UserServiceError::Validation(reason));
        }

        let patch = UserPatch {
            email: patch.email,
            password: patch.password,
            profile: patch.profile,
            updated_at: OffsetDateTime::now_utc(),
        };
        match self
            .store
            .find_one_and_update(&UserFilter::by_id(id), patch)
            .await?
        {
            Some(user) => {
                self.events.info("User updated successfully", Some(&user));
                Ok(user)
            }
            None => {
                self.events.error("The user does not exist");
                Err(UserServiceError::UndefinedUser)
            }
        }
    }

    /// Delete by exact id, returning the store's count acknowledgement.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<DeleteResult, UserServiceError> {
        let result = self.store.delete_one(&UserFilter::by_id(id)).await?;
        if result.deleted_count == 0 {
            self.events.error("The user does not exist");
            return Err(UserServiceError::UndefinedUser);
        }
        self.events.info("User deleted successfully", None);
        Ok(result)
    }
}
