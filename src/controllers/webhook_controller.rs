use chrono::NaiveDate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::webhook_dto::{
    DailySummaryPayload, WebhookDeliveryResponse, WebhookGeneralInfo, WebhookUser,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::general_info_repository::GeneralInfoRepository;
use crate::repositories::status_repository::StatusRepository;
use crate::services::fleet_stats_service;
use crate::services::webhook_service::WebhookService;
use crate::state::AppState;
use crate::utils::dates::format_date_pt;
use crate::utils::errors::AppError;

pub struct WebhookController {
    status_repository: StatusRepository,
    general_info_repository: GeneralInfoRepository,
    webhook: WebhookService,
}

impl WebhookController {
    pub fn new(state: &AppState) -> Self {
        Self {
            status_repository: StatusRepository::new(state.pool.clone()),
            general_info_repository: GeneralInfoRepository::new(state.pool.clone()),
            webhook: WebhookService::new(
                state.config.webhook_url.clone(),
                state.http_client.clone(),
            ),
        }
    }

    /// Monta o resumo do dia e dispara para o webhook configurado.
    pub async fn send_daily_summary(
        &self,
        user: &AuthenticatedUser,
        date: NaiveDate,
    ) -> Result<ApiResponse<WebhookDeliveryResponse>, AppError> {
        let payload = self.build_payload(user, date).await?;
        let status_code = self.webhook.send_daily_summary(&payload).await?;

        Ok(ApiResponse::success_with_message(
            WebhookDeliveryResponse {
                delivered: true,
                status_code: Some(status_code),
            },
            "Informações enviadas para o webhook com sucesso!".to_string(),
        ))
    }

    async fn build_payload(
        &self,
        user: &AuthenticatedUser,
        date: NaiveDate,
    ) -> Result<DailySummaryPayload, AppError> {
        let rows = self.status_repository.find_by_date(date).await?;
        let counts =
            fleet_stats_service::count_statuses(rows.iter().map(|row| row.status.as_str()));

        let joined = self
            .status_repository
            .find_by_date_with_vehicle(date)
            .await?;
        let frota_por_tipo = fleet_stats_service::breakdown_by_type(&joined);

        let info = self.general_info_repository.latest_for_date(date).await?;
        let informativo_geral = match info {
            Some(info) => WebhookGeneralInfo {
                extravasamento: info.extravasamento,
                servico_turma_02: info.servico_turma_02,
                servico_turma_05: info.servico_turma_05,
                oge: info.oge,
            },
            None => WebhookGeneralInfo {
                extravasamento: 0,
                servico_turma_02: 0,
                servico_turma_05: 0,
                oge: 0,
            },
        };

        Ok(DailySummaryPayload {
            data: format_date_pt(date),
            frota_por_tipo,
            resumo_frota: fleet_stats_service::summarize(counts),
            informativo_geral,
            usuario: WebhookUser {
                nome: user.display_name(),
                email: user.email.clone(),
            },
        })
    }
}
