use axum::{
    middleware,
    routing::{delete, get},
    Router,
};

use crate::{
    admin::{handler, service::AdminService},
    config::Config,
    middleware::auth::admin_middleware,
};

pub fn admin_routes(service: AdminService, config: Config) -> Router {
    Router::new()
        .route("/users", get(handler::list_users))
        .route("/users/:user_id", delete(handler::delete_user))
        .route("/stats", get(handler::stats))
        .layer(middleware::from_fn_with_state(config, admin_middleware))
        .with_state(service)
}
