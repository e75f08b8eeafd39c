use chrono::NaiveDate;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::general_info_dto::{GeneralInfoResponse, UpsertGeneralInfoRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::general_info_repository::GeneralInfoRepository;
use crate::utils::errors::AppError;

pub struct GeneralInfoController {
    repository: GeneralInfoRepository,
}

impl GeneralInfoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: GeneralInfoRepository::new(pool),
        }
    }

    /// Snapshot mais recente da data; sem registro, responde zeros.
    pub async fn get_by_date(&self, date: NaiveDate) -> Result<GeneralInfoResponse, AppError> {
        let info = self.repository.latest_for_date(date).await?;

        Ok(info
            .map(GeneralInfoResponse::from)
            .unwrap_or_else(|| GeneralInfoResponse::empty(date)))
    }

    pub async fn upsert(
        &self,
        user: &AuthenticatedUser,
        request: UpsertGeneralInfoRequest,
    ) -> Result<ApiResponse<GeneralInfoResponse>, AppError> {
        request.validate()?;

        let info = self
            .repository
            .upsert(
                user.user_id,
                request.date,
                request.extravasamento,
                request.servico_turma_02,
                request.servico_turma_05,
                request.oge,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            GeneralInfoResponse::from(info),
            "Informações salvas com sucesso!".to_string(),
        ))
    }
}
