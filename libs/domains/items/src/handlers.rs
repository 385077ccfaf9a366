use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use axum_helpers::{
    IdPath, SharerUserId, ValidatedJson,
    errors::responses::{
        BadRequestHeaderResponse, BadRequestIdResponse, BadRequestValidationResponse,
        ForbiddenResponse, InternalServerErrorResponse, NotFoundResponse,
    },
};
use domain_users::UserRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemResponse, SearchQuery, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

pub const TAG: &str = "items";

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_own_items, create_item, search_items, get_item, update_item),
    components(
        schemas(ItemResponse, CreateItem, UpdateItem, SearchQuery),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            BadRequestHeaderResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Item listing, search and owner updates")
    )
)]
pub struct ApiDoc;

type SharedService<R, U> = Arc<ItemService<R, U>>;

/// Create the items router with all HTTP endpoints
pub fn router<R, U>(service: ItemService<R, U>) -> Router
where
    R: ItemRepository + 'static,
    U: UserRepository + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_own_items).post(create_item))
        .route("/search", get(search_items))
        .route("/{id}", get(get_item).patch(update_item))
        .with_state(shared_service)
}

fn to_responses(items: Vec<Item>) -> Vec<ItemResponse> {
    items.into_iter().map(ItemResponse::from).collect()
}

/// List the caller's own items
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Id of the calling user")
    ),
    responses(
        (status = 200, description = "Items owned by the caller", body = Vec<ItemResponse>),
        (status = 400, response = BadRequestHeaderResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_own_items<R: ItemRepository, U: UserRepository>(
    State(service): State<SharedService<R, U>>,
    SharerUserId(owner_id): SharerUserId,
) -> ItemResult<Json<Vec<ItemResponse>>> {
    let items = service.list_items_by_owner(owner_id).await?;
    Ok(Json(to_responses(items)))
}

/// List a new item owned by the caller
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    params(
        ("X-Sharer-User-Id" = i64, Header, description = "Id of the owning user")
    ),
    request_body = CreateItem,
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository, U: UserRepository>(
    State(service): State<SharedService<R, U>>,
    SharerUserId(owner_id): SharerUserId,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.create_item(owner_id, input).await?;
    Ok(Json(item.into()))
}

/// Search available items by text
#[utoipa::path(
    get,
    path = "/search",
    tag = TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Available items matching the text", body = Vec<ItemResponse>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_items<R: ItemRepository, U: UserRepository>(
    State(service): State<SharedService<R, U>>,
    Query(query): Query<SearchQuery>,
) -> ItemResult<Json<Vec<ItemResponse>>> {
    let items = service.search_items(query.text.as_deref()).await?;
    Ok(Json(to_responses(items)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository, U: UserRepository>(
    State(service): State<SharedService<R, U>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.get_item(id).await?;
    Ok(Json(item.into()))
}

/// Partially update an item as its owner
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Item ID"),
        ("X-Sharer-User-Id" = i64, Header, description = "Id of the calling user")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository, U: UserRepository>(
    State(service): State<SharedService<R, U>>,
    SharerUserId(requester_id): SharerUserId,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.update_item(requester_id, id, input).await?;
    Ok(Json(item.into()))
}
