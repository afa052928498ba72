use axum::{
  extract::State,
  http::StatusCode,
  Extension, Json,
};

use crate::{
  auth::{
      model::{
          AdminAuthResponse, AdminLoginRequest, AuthResponse, LoginUserRequest,
          RefreshTokenRequest, RegisterUserRequest, UserResponse,
      },
      service::AuthService,
  },
  error::AppError,
};

pub async fn register(
  State(service): State<AuthService>,
  Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
  let response = service.register(req).await?;
  Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
  State(service): State<AuthService>,
  Json(req): Json<LoginUserRequest>,
) -> Result<Json<AuthResponse>, AppError> {
  let response = service.login(req).await?;
  Ok(Json(response))
}

pub async fn admin_login(
  State(service): State<AuthService>,
  Json(req): Json<AdminLoginRequest>,
) -> Result<Json<AdminAuthResponse>, AppError> {
  let response = service.admin_login(req).await?;
  Ok(Json(response))
}

pub async fn refresh_token(
  State(service): State<AuthService>,
  Json(req): Json<RefreshTokenRequest>,
) -> Result<Json<AuthResponse>, AppError> {
  let response = service.refresh_token(&req.refresh_token).await?;
  Ok(Json(response))
}

pub async fn me(
  State(service): State<AuthService>,
  Extension(user_id): Extension<String>,
) -> Result<Json<UserResponse>, AppError> {
  let user = service.get_user_by_id(&user_id).await?;
  Ok(Json(user))
}
