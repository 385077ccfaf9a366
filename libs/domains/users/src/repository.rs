use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UserId};

/// Repository trait for User persistence
///
/// Implementations own id assignment and email uniqueness: both checks happen
/// in the same critical section as the write they guard.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user, assigning the next id
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: UserId) -> UserResult<Option<User>>;

    /// List all users
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Apply a partial update to an existing user
    async fn update(&self, id: UserId, input: UpdateUser) -> UserResult<User>;

    /// Delete a user by ID, returning whether it existed
    async fn delete(&self, id: UserId) -> UserResult<bool>;
}

#[derive(Debug, Default)]
struct UserTable {
    users: HashMap<UserId, User>,
    last_id: UserId,
}

impl UserTable {
    fn next_id(&mut self) -> UserId {
        self.last_id += 1;
        self.last_id
    }

    // Exact, case-sensitive comparison.
    fn email_taken(&self, email: &str) -> bool {
        self.users.values().any(|u| u.email == email)
    }
}

/// In-memory implementation of UserRepository
///
/// Cloning yields another handle to the same table.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        if table.email_taken(&input.email) {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let user = User::new(table.next_id(), input);
        table.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.users.get(&id).cloned())
    }

    async fn list(&self) -> UserResult<Vec<User>> {
        let table = self.table.read().await;
        let mut users: Vec<User> = table.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn update(&self, id: UserId, input: UpdateUser) -> UserResult<User> {
        let mut table = self.table.write().await;

        let current = table.users.get(&id).ok_or(UserError::NotFound(id))?;

        if let Some(email) = input.email.as_deref() {
            if email != current.email && table.email_taken(email) {
                return Err(UserError::DuplicateEmail(email.to_string()));
            }
        }

        let user = table.users.get_mut(&id).ok_or(UserError::NotFound(id))?;
        user.apply_update(input);

        tracing::info!(user_id = id, "Updated user");
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> UserResult<bool> {
        let mut table = self.table.write().await;

        if table.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
