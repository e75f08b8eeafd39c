use crate::dto::common_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, KnownNamesResponse, UpdateVehicleRequest, VehicleResponse,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::status_repository::StatusRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::validate_plate;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleController {
    repository: VehicleRepository,
    status_repository: StatusRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            status_repository: StatusRepository::new(pool),
        }
    }

    /// Cria o veículo e o registro diário inicial da data selecionada.
    pub async fn create(
        &self,
        user: &AuthenticatedUser,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        if request.name.trim().is_empty() {
            return Err(bad_request_error("A placa é obrigatória"));
        }
        if validate_plate(&request.name).is_err() {
            return Err(bad_request_error("Placa em formato inválido"));
        }

        if self.repository.name_exists(request.name.trim()).await? {
            return Err(AppError::Conflict(
                "Já existe um veículo cadastrado com esta placa".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(
                user.user_id,
                request.name.trim().to_string(),
                request.vehicle_type.as_str().to_string(),
                request.driver.clone(),
            )
            .await?;

        self.status_repository
            .upsert(
                user.user_id,
                vehicle.id,
                request.date,
                request.status.as_str(),
                request.observations,
                request.driver,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Veículo adicionado com sucesso!".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    /// Atualiza o cadastro; quando vem `status`, o registro diário da data
    /// informada também é atualizado (upsert por veículo + data).
    pub async fn update(
        &self,
        id: Uuid,
        user: &AuthenticatedUser,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        if let Some(name) = &request.name {
            if validate_plate(name).is_err() {
                return Err(bad_request_error("Placa em formato inválido"));
            }
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.name.map(|n| n.trim().to_string()),
                request.vehicle_type.map(|t| t.as_str().to_string()),
                request.driver.clone(),
            )
            .await?;

        if let Some(status) = request.status {
            let date = request.date.ok_or_else(|| {
                AppError::BadRequest(
                    "A data é obrigatória para atualizar o status do dia".to_string(),
                )
            })?;

            self.status_repository
                .upsert(
                    user.user_id,
                    vehicle.id,
                    date,
                    status.as_str(),
                    request.observations,
                    request.driver,
                )
                .await?;
        }

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Veículo atualizado com sucesso!".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Placas e motoristas já conhecidos, para autocompletar.
    pub async fn known_names(&self) -> Result<KnownNamesResponse, AppError> {
        let plates = self.repository.list_plates().await?;
        let drivers = self.repository.list_drivers().await?;

        Ok(KnownNamesResponse { plates, drivers })
    }
}
