use axum::Router;

use crate::state::AppState;

pub mod items;
pub mod users;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Returns a stateless Router; every sub-router shares the stores held by
/// `state`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/users", users::router(state))
        .nest("/items", items::router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::health_router;
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn app() -> Router {
        let config = Config {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
        };
        let state = AppState::new(config);

        axum_helpers::create_router::<ApiDoc>(routes(&state))
            .await
            .unwrap()
            .merge(health_router(state.config.app))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post(uri: &str, user: Option<i64>, body: Value) -> Request<Body> {
        let mut builder = Request::post(uri).header("content-type", "application/json");
        if let Some(user) = user {
            builder = builder.header(axum_helpers::SHARER_USER_ID_HEADER, user);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn patch(uri: &str, user: i64, body: Value) -> Request<Body> {
        Request::patch(uri)
            .header("content-type", "application/json")
            .header(axum_helpers::SHARER_USER_ID_HEADER, user)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_sharing_flow_across_domains() {
        let app = app().await;

        let (status, ann) = send(
            &app,
            post("/api/users", None, json!({"name": "Ann", "email": "ann@x.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ann["id"], 1);

        let (status, item) = send(
            &app,
            post(
                "/api/items",
                Some(1),
                json!({"name": "Drill", "description": "Cordless drill", "available": true}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["id"], 1);

        let (_, found) = send(&app, get("/api/items/search?text=drill")).await;
        assert_eq!(found.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, patch("/api/items/1", 1, json!({"available": false}))).await;
        assert_eq!(status, StatusCode::OK);

        let (_, found) = send(&app, get("/api/items/search?text=drill")).await;
        assert!(found.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_items_see_users_created_over_http() {
        let app = app().await;

        let (status, _) = send(
            &app,
            post(
                "/api/items",
                Some(1),
                json!({"name": "Saw", "description": "Hand saw", "available": true}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        send(
            &app,
            post("/api/users", None, json!({"name": "Ann", "email": "ann@x.com"})),
        )
        .await;

        let (status, _) = send(
            &app,
            post(
                "/api/items",
                Some(1),
                json!({"name": "Saw", "description": "Hand saw", "available": true}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_deleted_user_ids_are_not_reused() {
        let app = app().await;

        for (name, email) in [("Ann", "ann@x.com"), ("Bob", "bob@x.com")] {
            send(
                &app,
                post("/api/users", None, json!({"name": name, "email": email})),
            )
            .await;
        }

        let (status, _) = send(
            &app,
            Request::delete("/api/users/1").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get("/api/users/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, carl) = send(
            &app,
            post("/api/users", None, json!({"name": "Carl", "email": "carl@x.com"})),
        )
        .await;
        assert_eq!(carl["id"], 3);
    }

    #[tokio::test]
    async fn test_health_docs_and_fallback() {
        let app = app().await;

        let (status, health) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["name"], "shareit_api");

        let (status, spec) = send(&app, get("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(spec["paths"]["/users"].is_object());
        assert!(spec["paths"]["/items/{id}"].is_object());

        let (status, body) = send(&app, get("/api/bookings")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }
}
