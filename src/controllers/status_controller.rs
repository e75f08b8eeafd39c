use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common_dto::ApiResponse;
use crate::dto::status_dto::{
    CopyPreviousDayResponse, StatusVehicleInfo, StatusWithVehicleResponse, UpsertStatusRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::status_repository::StatusRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::dates::previous_day;
use crate::utils::errors::AppError;

pub struct StatusController {
    repository: StatusRepository,
    vehicle_repository: VehicleRepository,
}

impl StatusController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: StatusRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    /// Registros do dia com o veículo resolvido. Órfãos (veículo excluído)
    /// ficam de fora; o motorista exibido é o do registro ou, na falta,
    /// o padrão do cadastro do veículo.
    pub async fn list_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<StatusWithVehicleResponse>, AppError> {
        let rows = self.repository.find_by_date_with_vehicle(date).await?;

        let response = rows
            .into_iter()
            .filter_map(|row| {
                let vehicle_name = row.vehicle_name?;
                let driver = row
                    .driver
                    .clone()
                    .filter(|d| !d.trim().is_empty())
                    .or_else(|| row.vehicle_driver.clone());

                Some(StatusWithVehicleResponse {
                    id: row.id,
                    vehicle_id: row.vehicle_id,
                    date: row.date,
                    status: row.status,
                    observations: row.observations,
                    driver,
                    vehicle: StatusVehicleInfo {
                        id: row.vehicle_id,
                        name: vehicle_name,
                        vehicle_type: row.vehicle_type.unwrap_or_default(),
                        driver: row.vehicle_driver,
                    },
                })
            })
            .collect();

        Ok(response)
    }

    pub async fn upsert(
        &self,
        user: &AuthenticatedUser,
        request: UpsertStatusRequest,
    ) -> Result<ApiResponse<StatusWithVehicleResponse>, AppError> {
        let vehicle = self
            .vehicle_repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        let row = self
            .repository
            .upsert(
                user.user_id,
                request.vehicle_id,
                request.date,
                request.status.as_str(),
                request.observations,
                request.driver,
            )
            .await?;

        let response = StatusWithVehicleResponse {
            id: row.id,
            vehicle_id: row.vehicle_id,
            date: row.date,
            status: row.status,
            observations: row.observations,
            driver: row.driver.clone().or_else(|| vehicle.driver.clone()),
            vehicle: StatusVehicleInfo::from(vehicle),
        };

        Ok(ApiResponse::success_with_message(
            response,
            "Status do dia salvo com sucesso!".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Copia os registros do dia anterior para a data alvo.
    ///
    /// Sem registros na origem: nenhum delete/insert acontece e o aviso
    /// "nada a copiar" volta ao chamador. Com registros: apaga a data alvo
    /// e insere as cópias: sequência deliberadamente não atômica; uma
    /// falha entre os dois passos deixa a data alvo vazia.
    pub async fn copy_previous_day(
        &self,
        user: &AuthenticatedUser,
        target_date: NaiveDate,
    ) -> Result<ApiResponse<CopyPreviousDayResponse>, AppError> {
        let source_date = previous_day(target_date);
        let source_rows = self.repository.find_by_date(source_date).await?;

        if source_rows.is_empty() {
            return Ok(ApiResponse::notice(
                "Não há dados do dia anterior para copiar.".to_string(),
            ));
        }

        let deleted = self.repository.delete_by_date(target_date).await?;
        tracing::debug!(
            "Copiar dia anterior: {} registros removidos de {}",
            deleted,
            target_date
        );

        let copied = self
            .repository
            .insert_copies(user.user_id, target_date, &source_rows)
            .await?;

        Ok(ApiResponse::success_with_message(
            CopyPreviousDayResponse {
                source_date,
                target_date,
                copied: copied as usize,
            },
            "Dados do dia anterior copiados com sucesso!".to_string(),
        ))
    }
}
