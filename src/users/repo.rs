use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::users::repo_types::{DeleteResult, NewUser, User, UserFilter, UserPatch};

/// Persistence collaborator for user records.
///
/// Infrastructure failures (connection loss, index machinery, ...) surface
/// as opaque `anyhow::Error`s and pass through the service untouched. The
/// store owns the unique constraint on `email`; the service-level existence
/// check is only a fast path for a better error.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All records, in the store's natural iteration order.
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;

    async fn find_one(&self, filter: &UserFilter) -> anyhow::Result<Option<User>>;

    /// Insert a new document, assigning its id.
    async fn insert(&self, doc: NewUser) -> anyhow::Result<User>;

    /// Merge `patch` into the first record matching `filter` and return the
    /// updated value, or `None` when nothing matched.
    async fn find_one_and_update(
        &self,
        filter: &UserFilter,
        patch: UserPatch,
    ) -> anyhow::Result<Option<User>>;

    async fn delete_one(&self, filter: &UserFilter) -> anyhow::Result<DeleteResult>;
}

/// In-memory document store. Natural iteration order is insertion order.
#[derive(Default)]
pub struct InMemoryUserStore {
    records: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(user: &User, filter: &UserFilter) -> bool {
    if let Some(id) = filter.id {
        if user.id != id {
            return false;
        }
    }
    if let Some(email) = &filter.email {
        if user.email != *email {
            return false;
        }
    }
    true
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.records.read().await.clone())
    }

    async fn find_one(&self, filter: &UserFilter) -> anyhow::Result<Option<User>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|u| matches(u, filter)).cloned())
    }

    async fn insert(&self, doc: NewUser) -> anyhow::Result<User> {
        let mut records = self.records.write().await;
        if records.iter().any(|u| u.email == doc.email) {
            anyhow::bail!("duplicate key error: email {:?} already indexed", doc.email);
        }
        let user = User {
            id: Uuid::new_v4(),
            email: doc.email,
            password: doc.password,
            profile: doc.profile,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        };
        records.push(user.clone());
        Ok(user)
    }

    async fn find_one_and_update(
        &self,
        filter: &UserFilter,
        patch: UserPatch,
    ) -> anyhow::Result<Option<User>> {
        let mut records = self.records.write().await;
        let Some(pos) = records.iter().position(|u| matches(u, filter)) else {
            return Ok(None);
        };
        if let Some(email) = &patch.email {
            // Unique index applies on update too.
            if records
                .iter()
                .enumerate()
                .any(|(i, u)| i != pos && u.email == *email)
            {
                anyhow::bail!("duplicate key error: email {:?} already indexed", email);
            }
        }

        let user = &mut records[pos];
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(password) = patch.password {
            user.password = password;
        }
        for (key, value) in patch.profile {
            user.profile.insert(key, value);
        }
        user.updated_at = patch.updated_at;
        Ok(Some(user.clone()))
    }

    async fn delete_one(&self, filter: &UserFilter) -> anyhow::Result<DeleteResult> {
        let mut records = self.records.write().await;
        match records.iter().position(|u| matches(u, filter)) {
            Some(pos) => {
                records.remove(pos);
                Ok(DeleteResult { deleted_count: 1 })
            }
            None => Ok(DeleteResult { deleted_count: 0 }),
        }
    }
}
