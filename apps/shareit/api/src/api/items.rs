use axum::Router;
use domain_items::{ItemService, handlers};
use domain_users::UserService;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let owners = UserService::new(state.users.clone());
    handlers::router(ItemService::new(state.items.clone(), owners))
}
