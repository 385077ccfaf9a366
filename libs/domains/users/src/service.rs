//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UserId};
use crate::repository::UserRepository;

/// Service layer for User business logic
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new user
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Look up a user; absence is not an error here
    #[instrument(skip(self))]
    pub async fn find_user(&self, id: UserId) -> UserResult<Option<User>> {
        self.repository.get_by_id(id).await
    }

    /// Get a user by ID, failing with `NotFound` when absent
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> UserResult<User> {
        self.find_user(id).await?.ok_or(UserError::NotFound(id))
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Apply a partial update to a user
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: UserId, input: UpdateUser) -> UserResult<User> {
        input.validate()?;
        self.repository.update(id, input).await
    }

    /// Delete a user, returning whether one was removed
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> UserResult<bool> {
        self.repository.delete(id).await
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryUserRepository, MockUserRepository};
    use mockall::predicate::eq;

    fn ann() -> User {
        User {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
        }
    }

    fn create_input(name: &str, email: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_user_maps_absence_to_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(7))
            .returning(|_| Ok(None));

        let service = UserService::new(mock_repo);

        let result = service.get_user(7).await;
        assert!(matches!(result, Err(UserError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_find_user_returns_none_without_error() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        assert!(service.find_user(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_create_never_reaches_repository() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_create().never();

        let service = UserService::new(mock_repo);

        let result = service.create_user(create_input("", "ann@x.com")).await;
        assert!(matches!(result, Err(UserError::Validation(_))));

        let result = service.create_user(create_input("Ann", "nope")).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_invalid_update_never_reaches_repository() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_update().never();

        let service = UserService::new(mock_repo);
        let input = UpdateUser {
            name: Some("   ".to_string()),
            email: None,
        };

        assert!(matches!(
            service.update_user(1, input).await,
            Err(UserError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_update_forwards_patch() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_update()
            .withf(|id, input| *id == 1 && input.name.as_deref() == Some("Anna"))
            .times(1)
            .returning(|_, _| {
                Ok(User {
                    name: "Anna".to_string(),
                    ..ann()
                })
            });

        let service = UserService::new(mock_repo);
        let updated = service
            .update_user(
                1,
                UpdateUser {
                    name: Some("Anna".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Anna");
    }

    #[tokio::test]
    async fn test_create_then_get_returns_supplied_fields() {
        let service = UserService::new(InMemoryUserRepository::new());

        let created = service
            .create_user(create_input("Ann", "ann@x.com"))
            .await
            .unwrap();
        let fetched = service.get_user(created.id).await.unwrap();

        assert_eq!(fetched, ann());
    }

    #[tokio::test]
    async fn test_empty_patch_returns_record_unchanged() {
        let service = UserService::new(InMemoryUserRepository::new());
        let created = service
            .create_user(create_input("Ann", "ann@x.com"))
            .await
            .unwrap();

        let updated = service
            .update_user(created.id, UpdateUser::default())
            .await
            .unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found_for_any_patch() {
        let service = UserService::new(InMemoryUserRepository::new());

        let patches = [
            UpdateUser::default(),
            UpdateUser {
                name: Some("X".to_string()),
                email: None,
            },
            UpdateUser {
                name: None,
                email: Some("x@x.com".to_string()),
            },
        ];

        for patch in patches {
            assert!(matches!(
                service.update_user(5, patch).await,
                Err(UserError::NotFound(5))
            ));
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_scenario() {
        let service = UserService::new(InMemoryUserRepository::new());

        let first = service
            .create_user(create_input("Ann", "ann@x.com"))
            .await
            .unwrap();
        let second = service
            .create_user(create_input("Bob", "bob@x.com"))
            .await
            .unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let result = service
            .create_user(create_input("Impostor", "ann@x.com"))
            .await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
        assert_eq!(service.list_users().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_then_recreate_assigns_fresh_id() {
        let service = UserService::new(InMemoryUserRepository::new());

        service
            .create_user(create_input("Ann", "ann@x.com"))
            .await
            .unwrap();
        service
            .create_user(create_input("Bob", "bob@x.com"))
            .await
            .unwrap();

        assert!(service.delete_user(1).await.unwrap());
        assert!(service.find_user(1).await.unwrap().is_none());
        assert!(!service.delete_user(1).await.unwrap());

        let recreated = service
            .create_user(create_input("Ann", "ann@x.com"))
            .await
            .unwrap();
        assert_eq!(recreated.id, 3);
    }
}
