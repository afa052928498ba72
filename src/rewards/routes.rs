use axum::{
    middleware,
    routing::{get, put},
    Router,
};

use crate::{
    config::Config,
    middleware::auth::{admin_middleware, auth_middleware},
    rewards::{handler, service::RewardService},
};

pub fn reward_routes(service: RewardService, config: Config) -> Router {
    let user_routes = Router::new()
        .route("/mine", get(handler::my_rewards))
        .route("/mine/summary", get(handler::my_summary))
        .layer(middleware::from_fn_with_state(
            config.clone(),
            auth_middleware,
        ));

    let admin_routes = Router::new()
        .route("/", get(handler::list_rewards))
        .route("/overview", get(handler::overview))
        .route("/:reward_id/pay", put(handler::mark_paid))
        .layer(middleware::from_fn_with_state(config, admin_middleware));

    Router::new()
        .merge(user_routes)
        .merge(admin_routes)
        .with_state(service)
}
