use async_trait::async_trait;
use domain_users::UserId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemId, NewItem, UpdateItem};

/// Repository trait for Item persistence
///
/// Owner resolution happens before `create` is called; the repository only
/// stores the owner id it is given.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Store a new item for `owner_id`, assigning the next id
    async fn create(&self, owner_id: UserId, input: NewItem) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>>;

    /// All items owned by `owner_id`, in id order
    async fn list_by_owner(&self, owner_id: UserId) -> ItemResult<Vec<Item>>;

    /// Available items whose name or description contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    async fn search(&self, needle: &str) -> ItemResult<Vec<Item>>;

    /// Apply a partial update on behalf of `requester_id`.
    ///
    /// Fails with `NotFound` for an unknown item and `AccessDenied` when the
    /// requester is not the owner, even if the patch is empty.
    async fn update(
        &self,
        requester_id: UserId,
        id: ItemId,
        input: UpdateItem,
    ) -> ItemResult<Item>;
}

#[derive(Debug, Default)]
struct ItemTable {
    items: HashMap<ItemId, Item>,
    last_id: ItemId,
}

impl ItemTable {
    fn next_id(&mut self) -> ItemId {
        self.last_id += 1;
        self.last_id
    }

    fn sorted(&self, filter: impl Fn(&Item) -> bool) -> Vec<Item> {
        let mut items: Vec<Item> = self.items.values().filter(|i| filter(i)).cloned().collect();
        items.sort_by_key(|i| i.id);
        items
    }
}

/// In-memory implementation of ItemRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    table: Arc<RwLock<ItemTable>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, owner_id: UserId, input: NewItem) -> ItemResult<Item> {
        let mut table = self.table.write().await;

        let item = Item::new(table.next_id(), owner_id, input);
        table.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, owner_id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let table = self.table.read().await;
        Ok(table.items.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> ItemResult<Vec<Item>> {
        let table = self.table.read().await;
        Ok(table.sorted(|i| i.owner_id == owner_id))
    }

    async fn search(&self, needle: &str) -> ItemResult<Vec<Item>> {
        let table = self.table.read().await;
        Ok(table.sorted(|i| i.matches_search(needle)))
    }

    async fn update(
        &self,
        requester_id: UserId,
        id: ItemId,
        input: UpdateItem,
    ) -> ItemResult<Item> {
        let mut table = self.table.write().await;

        let item = table.items.get_mut(&id).ok_or(ItemError::NotFound(id))?;
        if item.owner_id != requester_id {
            return Err(ItemError::AccessDenied {
                user_id: requester_id,
                item_id: id,
            });
        }

        item.apply_update(input);

        tracing::info!(item_id = id, owner_id = requester_id, "Updated item");
        Ok(item.clone())
    }
}
