use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::{
    categories::{handler, service::CategoryService},
    config::Config,
    middleware::auth::admin_middleware,
};

pub fn category_routes(service: CategoryService, config: Config) -> Router {
    let admin_routes = Router::new()
        .route("/", post(handler::add_category))
        .route("/:name", delete(handler::remove_category))
        .layer(middleware::from_fn_with_state(config, admin_middleware));

    Router::new()
        .route("/", get(handler::list_categories))
        .merge(admin_routes)
        .with_state(service)
}
