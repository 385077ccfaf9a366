use domain_users::UserId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Store-assigned item identifier
pub type ItemId = i64;

/// Item entity - a thing a user offers for sharing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned on creation and never reused
    pub id: ItemId,
    /// Item name
    pub name: String,
    /// Item description
    pub description: String,
    /// Whether the item can currently be borrowed
    pub available: bool,
    /// Id of the owning user
    pub owner_id: UserId,
    /// Reserved for linking an item to the request it answers
    pub request_id: Option<i64>,
}

/// Item as returned over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            available: item.available,
            request_id: item.request_id,
        }
    }
}

/// DTO for listing a new item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[validate(custom(function = "axum_helpers::validation::not_blank"), length(max = 255))]
    pub name: String,
    #[validate(custom(function = "axum_helpers::validation::not_blank"), length(max = 1000))]
    pub description: String,
    #[validate(required)]
    pub available: Option<bool>,
    pub request_id: Option<i64>,
}

/// Fully resolved item fields, ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i64>,
}

impl From<CreateItem> for NewItem {
    // `available` is required by validation; an unchecked missing value counts as unavailable.
    fn from(input: CreateItem) -> Self {
        Self {
            name: input.name,
            description: input.description,
            available: input.available.unwrap_or(false),
            request_id: input.request_id,
        }
    }
}

/// Partial update; `None` (missing or `null`) leaves the field unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(custom(function = "axum_helpers::validation::not_blank"), length(max = 255))]
    pub name: Option<String>,
    #[validate(custom(function = "axum_helpers::validation::not_blank"), length(max = 1000))]
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl UpdateItem {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.available.is_none()
    }
}

/// Query parameters for item search
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Text to look for in name or description, case-insensitive
    pub text: Option<String>,
}

impl Item {
    pub fn new(id: ItemId, owner_id: UserId, input: NewItem) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            available: input.available,
            owner_id,
            request_id: input.request_id,
        }
    }

    /// Apply the fields present in `update`
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
    }

    /// Whether this item shows up for an already lower-cased search needle
    pub fn matches_search(&self, needle: &str) -> bool {
        self.available
            && (self.name.to_lowercase().contains(needle)
                || self.description.to_lowercase().contains(needle))
    }
}
