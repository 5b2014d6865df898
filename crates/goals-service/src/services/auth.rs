//! Authentication service
//!
//! Handles user signup, login, token refresh, and logout.

use chrono::{Duration, Utc};
use goals_common::auth::{hash_password, validate_password_strength, verify_password};
use goals_core::entities::User;
use goals_core::traits::RefreshTokenRecord;
use goals_core::Snowflake;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AuthResponse, LoginRequest, ProfileResponse, RefreshTokenRequest, SignupRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<AuthResponse> {
        if request.password != request.password_repeat {
            return Err(ServiceError::validation("Passwords do not match"));
        }

        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self
            .ctx
            .user_repo()
            .username_exists(&request.username)
            .await?
        {
            return Err(ServiceError::conflict("Username already taken"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user_id = self.ctx.generate_id();
        let now = Utc::now();

        let user = User {
            id: user_id,
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            created_at: now,
            updated_at: now,
        };

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user_id, "User registered successfully");

        self.issue_tokens(&user).await
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(goals_common::AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(goals_common::AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(goals_common::AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_tokens(&user).await
    }

    /// Refresh access token using refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        // The stored record is authoritative; the JWT signature check alone
        // is not enough because logout revokes server-side.
        let record = self
            .ctx
            .refresh_token_repo()
            .find(&request.refresh_token)
            .await?
            .ok_or(ServiceError::App(goals_common::AppError::InvalidToken))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(record.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", record.user_id.to_string()))?;

        self.ctx
            .refresh_token_repo()
            .revoke(&request.refresh_token)
            .await?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        self.issue_tokens(&user).await
    }

    /// Logout user by revoking the refresh token
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(&self, user_id: Snowflake, refresh_token: Option<String>) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            self.ctx.refresh_token_repo().revoke(&token).await?;
        }

        info!(user_id = %user_id, "User logged out successfully");
        Ok(())
    }

    /// Validate an access token and return the user ID
    #[instrument(skip(self, token))]
    pub async fn validate_token(&self, token: &str) -> ServiceResult<Snowflake> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        claims.user_id().map_err(ServiceError::from)
    }

    async fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let session_id = Uuid::new_v4().to_string();

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair_with_session(user.id, Some(session_id.clone()))
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let record = RefreshTokenRecord {
            user_id: user.id,
            session_id,
            expires_at: Utc::now()
                + Duration::seconds(self.ctx.jwt_service().refresh_token_expiry()),
        };
        self.ctx
            .refresh_token_repo()
            .store(&token_pair.refresh_token, &record)
            .await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            ProfileResponse::from(user),
        ))
    }
}
