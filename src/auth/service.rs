use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::{
        model::{
            AdminAuthResponse, AdminLoginRequest, AuthResponse, LoginUserRequest,
            RegisterUserRequest, User, UserResponse,
        },
        repository::AuthRepository,
    },
    config::Config,
    error::AppError,
    utils::{hash, jwt},
};

#[derive(Clone)]
pub struct AuthService {
    repository: AuthRepository,
    config: Config,
}

impl AuthService {
    pub fn new(repository: AuthRepository, config: Config) -> Self {
        Self { repository, config }
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub async fn register(&self, req: RegisterUserRequest) -> Result<AuthResponse, AppError> {
        // Validate the input
        req.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

        // Hash the password
        let hashed_password = hash::hash_password(&req.password)?;

        // Create new user, starting with an empty point balance
        let user = User::new(
            req.email.clone(),
            hashed_password,
            req.name.clone(),
            req.phone.clone(),
            req.location.clone(),
        );

        // Save user to the store; duplicate emails are rejected there
        let created_user = self.repository.create_user(user).await?;

        // Registration logs the user straight in
        self.token_response(created_user)
    }

    pub async fn login(&self, req: LoginUserRequest) -> Result<AuthResponse, AppError> {
        // Validate the input
        req.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

        // Unknown email and bad password are distinct failures
        let user = self
            .repository
            .find_user_by_email(&req.email)
            .await?
            .ok_or_else(|| AppError::NotFoundError("User not found".into()))?;

        // Verify password
        let is_valid = hash::verify_password(&req.password, &user.password_hash)?;
        if !is_valid {
            return Err(AppError::AuthError("Invalid password".into()));
        }

        self.token_response(user)
    }

    // Admins come from the injected allow-list, not the users collection.
    pub async fn admin_login(&self, req: AdminLoginRequest) -> Result<AdminAuthResponse, AppError> {
        req.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;

        for credential in &self.config.admin_credentials {
            if credential.email.eq_ignore_ascii_case(&req.email)
                && hash::verify_password(&req.password, &credential.password_hash)?
            {
                let access_token = jwt::generate_jwt(
                    &credential.email,
                    &credential.email,
                    jwt::ROLE_ADMIN,
                    &self.config.jwt_secret,
                    self.config.jwt_expires_in,
                )?;

                return Ok(AdminAuthResponse {
                    access_token,
                    token_type: "Bearer".into(),
                    expires_in: self.config.jwt_expires_in.num_seconds(),
                    email: credential.email.clone(),
                });
            }
        }

        Err(AppError::AuthError("Invalid admin credentials".into()))
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<UserResponse, AppError> {
        let user_id = Uuid::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid user ID format".into()))?;

        // Always read the persisted record, never a cached session view
        let user = self.repository.find_user_by_id(&user_id).await?;

        Ok(user.into())
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> Result<AuthResponse, AppError> {
        // Verify refresh token
        let claims = jwt::verify_jwt(refresh_token, &self.config.jwt_secret)?;

        // Find user by ID
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthError("Invalid user ID in token".into()))?;

        let user = self.repository.find_user_by_id(&user_id).await?;

        self.token_response(user)
    }

    fn token_response(&self, user: User) -> Result<AuthResponse, AppError> {
        let subject = user.id.to_string();

        let access_token = jwt::generate_jwt(
            &subject,
            &user.email,
            jwt::ROLE_USER,
            &self.config.jwt_secret,
            self.config.jwt_expires_in,
        )?;
        let refresh_token = jwt::generate_jwt(
            &subject,
            &user.email,
            jwt::ROLE_USER,
            &self.config.jwt_secret,
            self.config.jwt_refresh_expires_in,
        )?;

        Ok(AuthResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".into(),
            expires_in: self.config.jwt_expires_in.num_seconds(),
            user: user.into(),
        })
    }
}
