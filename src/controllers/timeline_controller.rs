use sqlx::PgPool;

use crate::dto::timeline_dto::{
    LegendEntry, TimelineQuery, TimelineResponse, TimelineRowResponse,
};
use crate::models::status::{FleetStatus, NO_DATA_COLOR};
use crate::repositories::status_repository::StatusRepository;
use crate::services::timeline_service;
use crate::utils::dates::month_days;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_month;

pub struct TimelineController {
    repository: StatusRepository,
}

impl TimelineController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: StatusRepository::new(pool),
        }
    }

    /// Timeline mensal: grade de dias do calendário + uma linha por
    /// veículo com o mapeamento esparso data → status e a legenda de
    /// cores. Datas fora do mapeamento são "sem dados".
    pub async fn get_month(&self, query: TimelineQuery) -> Result<TimelineResponse, AppError> {
        let (year, month) = validate_month(&query.month)
            .map_err(|_| AppError::BadRequest("Mês inválido, use YYYY-MM".to_string()))?;

        let days = month_days(year, month);
        let (first, last) = match (days.first(), days.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(AppError::BadRequest("Mês inválido, use YYYY-MM".to_string())),
        };

        let records = self.repository.find_by_range_with_vehicle(first, last).await?;

        let mut rows = timeline_service::build_timeline(&records);
        timeline_service::sort_rows(&mut rows, query.sort, query.direction);

        let legend = FleetStatus::ALL
            .iter()
            .map(|status| LegendEntry {
                status: status.as_str().to_string(),
                color: status.color().to_string(),
            })
            .collect();

        Ok(TimelineResponse {
            month: query.month,
            days: days.iter().map(|d| d.to_string()).collect(),
            rows: rows
                .into_iter()
                .map(|row| TimelineRowResponse {
                    vehicle_id: row.vehicle_id,
                    vehicle_name: row.vehicle_name,
                    vehicle_type: row.vehicle_type,
                    driver_name: row.driver_name,
                    daily_status: row
                        .daily_status
                        .into_iter()
                        .map(|(date, status)| (date.to_string(), status))
                        .collect(),
                })
                .collect(),
            legend,
            no_data_color: NO_DATA_COLOR.to_string(),
        })
    }
}
