use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common_dto::ApiResponse;
use crate::dto::observation_dto::{
    ObservationResponse, UpdateObservationRequest, UpsertObservationRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::observation_repository::ObservationRepository;
use crate::utils::errors::AppError;

pub struct ObservationController {
    repository: ObservationRepository,
}

impl ObservationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ObservationRepository::new(pool),
        }
    }

    /// Observação do dia, se existir.
    pub async fn get_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Option<ObservationResponse>, AppError> {
        let row = self.repository.find_by_date(date).await?;
        Ok(row.map(ObservationResponse::from))
    }

    /// Histórico da data, mais recente primeiro.
    pub async fn history(&self, date: NaiveDate) -> Result<Vec<ObservationResponse>, AppError> {
        let rows = self.repository.history_for_date(date).await?;
        Ok(rows.into_iter().map(ObservationResponse::from).collect())
    }

    pub async fn upsert(
        &self,
        user: &AuthenticatedUser,
        request: UpsertObservationRequest,
    ) -> Result<ApiResponse<ObservationResponse>, AppError> {
        if request.content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "A observação não pode ser vazia".to_string(),
            ));
        }

        let row = self
            .repository
            .upsert_by_date(user.user_id, request.date, request.content)
            .await?;

        Ok(ApiResponse::success_with_message(
            ObservationResponse::from(row),
            "Observações salvas com sucesso!".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateObservationRequest,
    ) -> Result<ApiResponse<ObservationResponse>, AppError> {
        if request.content.trim().is_empty() {
            return Err(AppError::BadRequest(
                "A observação não pode ser vazia".to_string(),
            ));
        }

        let row = self.repository.update_content(id, request.content).await?;

        Ok(ApiResponse::success_with_message(
            ObservationResponse::from(row),
            "Observação editada com sucesso!".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
