//! Item Service - Business logic layer

use domain_users::{UserId, UserRepository, UserService};
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemId, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Holds a handle to the user service to resolve item owners. Owner lookup and
/// item insertion are two separate steps: a user deleted in between still ends
/// up owning the new item.
pub struct ItemService<R: ItemRepository, U: UserRepository> {
    repository: Arc<R>,
    users: UserService<U>,
}

impl<R: ItemRepository, U: UserRepository> ItemService<R, U> {
    /// Create a new ItemService with the given repository and user service
    pub fn new(repository: R, users: UserService<U>) -> Self {
        Self {
            repository: Arc::new(repository),
            users,
        }
    }

    /// List a new item owned by `owner_id`
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, owner_id: UserId, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;

        let owner = self.users.get_user(owner_id).await?;
        self.repository.create(owner.id, input.into()).await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Update an item on behalf of `requester_id`
    #[instrument(skip(self, input))]
    pub async fn update_item(
        &self,
        requester_id: UserId,
        id: ItemId,
        input: UpdateItem,
    ) -> ItemResult<Item> {
        input.validate()?;
        self.repository.update(requester_id, id, input).await
    }

    /// All items owned by `owner_id`; unknown owners simply have none
    #[instrument(skip(self))]
    pub async fn list_items_by_owner(&self, owner_id: UserId) -> ItemResult<Vec<Item>> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Case-insensitive search over available items.
    ///
    /// Missing, empty or whitespace-only text yields no results without
    /// touching the repository.
    #[instrument(skip(self))]
    pub async fn search_items(&self, text: Option<&str>) -> ItemResult<Vec<Item>> {
        let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
            return Ok(Vec::new());
        };

        self.repository.search(&text.to_lowercase()).await
    }
}

impl<R: ItemRepository, U: UserRepository> Clone for ItemService<R, U> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            users: self.users.clone(),
        }
    }
}
