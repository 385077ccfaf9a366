use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::ErrorCode)
    ),
    info(
        title = "ShareIt API",
        version = "0.1.0",
        description = "Users share items with each other: register, list things to lend, search what is available"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/users", api = domain_users::handlers::ApiDoc),
        (path = "/items", api = domain_items::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
