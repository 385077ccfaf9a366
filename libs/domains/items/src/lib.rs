//! Items Domain
//!
//! Items are things users offer to share. Each item belongs to exactly one
//! user; only that user may change it, while anyone may look items up or
//! search the available ones.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, InMemoryItemRepository, ItemService};
//! use domain_users::{InMemoryUserRepository, UserService};
//!
//! let users = UserService::new(InMemoryUserRepository::new());
//! let service = ItemService::new(InMemoryItemRepository::new(), users);
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use models::{CreateItem, Item, ItemId, ItemResponse, NewItem, UpdateItem};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
