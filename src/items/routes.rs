use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    config::Config,
    items::{handler, service::ItemService},
    middleware::auth::{admin_middleware, auth_middleware},
};

pub fn item_routes(service: ItemService, config: Config) -> Router {
    let user_routes = Router::new()
        .route("/", post(handler::submit_item))
        .route("/", get(handler::browse_items))
        .route("/mine", get(handler::my_items))
        .route("/:item_id", put(handler::update_item))
        .route("/:item_id", delete(handler::delete_item))
        .layer(middleware::from_fn_with_state(
            config.clone(),
            auth_middleware,
        ));

    let admin_routes = Router::new()
        .route("/all", get(handler::list_all_items))
        .route("/:item_id/approve", put(handler::approve_item))
        .route("/:item_id/reject", put(handler::reject_item))
        .route("/:item_id/status", put(handler::advance_status))
        .layer(middleware::from_fn_with_state(config, admin_middleware));

    Router::new()
        .merge(user_routes)
        .merge(admin_routes)
        // Image payloads are base64 strings; allow up to the 5 MB source cap
        // plus encoding overhead.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(service)
}
