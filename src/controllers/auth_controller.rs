use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, ProfileResponse, RegisterRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::profile_repository::ProfileRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt;

pub struct AuthController {
    repository: ProfileRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: ProfileRepository::new(pool),
            config,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict(
                "Já existe um cadastro com este email".to_string(),
            ));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Erro ao gerar hash: {}", e)))?;

        let profile = self
            .repository
            .create(request.email, request.full_name, password_hash)
            .await?;

        let token = jwt::generate_token(profile.id, &profile.email, &self.config)?;

        Ok(LoginResponse::success(token, ProfileResponse::from(profile)))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let profile = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciais inválidas".to_string()))?;

        let valid = verify(&request.password, &profile.password_hash)
            .map_err(|e| AppError::Hash(format!("Erro ao verificar hash: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
        }

        let token = jwt::generate_token(profile.id, &profile.email, &self.config)?;

        Ok(LoginResponse::success(token, ProfileResponse::from(profile)))
    }

    /// Perfil da sessão atual.
    pub async fn me(&self, user: &AuthenticatedUser) -> Result<ProfileResponse, AppError> {
        let profile = self
            .repository
            .find_by_id(user.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Perfil não encontrado".to_string()))?;

        Ok(ProfileResponse::from(profile))
    }
}
