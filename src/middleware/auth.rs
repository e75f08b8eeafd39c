//! Middleware de autenticação JWT
//!
//! Extrai o bearer token, valida o JWT e resolve o perfil no banco.
//! O usuário autenticado entra nas extensions e os handlers o repassam
//! explicitamente aos controllers: sem sessão global ambiente.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    repositories::profile_repository::ProfileRepository,
    state::AppState,
    utils::{errors::AppError, jwt},
};

/// Usuário autenticado injetado nas requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
}

impl AuthenticatedUser {
    /// Nome exibido: nome completo quando existe, senão prefixo do email.
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or("Usuário")
                .to_string(),
        }
    }
}

/// Middleware de autenticação JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extrair token do header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_str| auth_str.to_str().ok())
        .and_then(|auth_str| auth_str.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorização requerido".to_string()))?;

    // Decodificar e validar JWT
    let claims = jwt::verify_token(auth_header, &state.config)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de usuário inválido".to_string()))?;

    // Verificar que o perfil ainda existe no banco
    let profile = ProfileRepository::new(state.pool.clone())
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Usuário não encontrado".to_string()))?;

    let authenticated_user = AuthenticatedUser {
        user_id: profile.id,
        email: profile.email,
        full_name: profile.full_name,
    };

    // Injetar usuário autenticado nas extensions
    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, full_name: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
            full_name: full_name.map(str::to_string),
        }
    }

    #[test]
    fn nome_completo_tem_prioridade() {
        assert_eq!(
            user("maria@umbs.br", Some("Maria Souza")).display_name(),
            "Maria Souza"
        );
    }

    #[test]
    fn sem_nome_usa_prefixo_do_email() {
        assert_eq!(user("joao@umbs.br", None).display_name(), "joao");
        assert_eq!(user("ana@umbs.br", Some("   ")).display_name(), "ana");
    }
}
