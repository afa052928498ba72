use axum::{
  routing::get,
  http::StatusCode,
  Json, Router,
};
use serde_json::json;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  admin::{routes::admin_routes, service::AdminService},
  auth::{repository::AuthRepository, routes::auth_routes, service::AuthService},
  categories::{
    repository::CategoryRepository,
    routes::category_routes,
    service::CategoryService,
  },
  config::Config,
  db::Store,
  items::{repository::ItemRepository, routes::item_routes, service::ItemService},
  rewards::{
    repository::RewardRepository,
    routes::reward_routes,
    service::RewardService,
  },
};

pub fn create_router(store: Store, config: Config) -> Router {
  // Setup CORS
  let cors = CorsLayer::new()
      .allow_origin(Any)
      .allow_methods(Any)
      .allow_headers(Any);

  // Setup repositories
  let auth_repository = AuthRepository::new(store.clone());
  let item_repository = ItemRepository::new(store.clone());
  let reward_repository = RewardRepository::new(store.clone());
  let category_repository = CategoryRepository::new(store);

  // Setup services
  let auth_service = AuthService::new(auth_repository.clone(), config.clone());
  let reward_service = RewardService::new(reward_repository);
  let item_service = ItemService::new(
      item_repository.clone(),
      reward_service.clone(),
      auth_repository.clone(),
  );
  let category_service = CategoryService::new(category_repository);
  let admin_service = AdminService::new(auth_repository, item_repository, reward_service.clone());

  // Setup routes
  let api_routes = Router::new()
      .route("/health", get(health_check))
      .nest("/auth", auth_routes(auth_service))
      .nest("/items", item_routes(item_service, config.clone()))
      .nest("/categories", category_routes(category_service, config.clone()))
      .nest("/rewards", reward_routes(reward_service, config.clone()))
      .nest("/admin", admin_routes(admin_service, config));

  // Build the router
  Router::new()
      .nest("/api/v1", api_routes)
      .layer(TraceLayer::new_for_http())
      .layer(cors)
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
  (
      StatusCode::OK,
      Json(json!({
          "status": "success",
          "message": "Server is running"
      })),
  )
}
