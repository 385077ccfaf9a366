//! Application state management.
//!
//! Both stores live for the whole process. Every router that needs one gets a
//! clone of the same handle, so users created through `/api/users` are the
//! owners items are resolved against.

use domain_items::InMemoryItemRepository;
use domain_users::InMemoryUserRepository;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Authoritative user store
    pub users: InMemoryUserRepository,
    /// Authoritative item store
    pub items: InMemoryItemRepository,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            users: InMemoryUserRepository::new(),
            items: InMemoryItemRepository::new(),
        }
    }
}
