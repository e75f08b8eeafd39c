use chrono::NaiveDate;
use sqlx::PgPool;

use crate::dto::dashboard_dto::DashboardResponse;
use crate::repositories::status_repository::StatusRepository;
use crate::services::fleet_stats_service;
use crate::utils::errors::AppError;

pub struct DashboardController {
    repository: StatusRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: StatusRepository::new(pool),
        }
    }

    /// Resumo da frota na data: total + buckets com percentual e a quebra
    /// funcionando/quebrado por tipo de veículo.
    ///
    /// O total conta todos os registros do dia, inclusive órfãos; a quebra
    /// por tipo só enxerga registros com veículo resolvido.
    pub async fn get_by_date(&self, date: NaiveDate) -> Result<DashboardResponse, AppError> {
        let rows = self.repository.find_by_date(date).await?;
        let counts =
            fleet_stats_service::count_statuses(rows.iter().map(|row| row.status.as_str()));

        let joined = self.repository.find_by_date_with_vehicle(date).await?;
        let frota_por_tipo = fleet_stats_service::breakdown_by_type(&joined);

        Ok(DashboardResponse {
            date,
            resumo_frota: fleet_stats_service::summarize(counts),
            frota_por_tipo,
        })
    }
}
