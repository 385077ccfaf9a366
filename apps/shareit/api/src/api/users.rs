use axum::Router;
use domain_users::{UserService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    handlers::router(UserService::new(state.users.clone()))
}
