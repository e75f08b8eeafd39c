use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::status::FleetStatus;
use crate::models::vehicle::{Vehicle, VehicleType};

// Request para criar um veículo junto com o status do dia selecionado
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub name: String,
    pub vehicle_type: VehicleType,
    pub driver: Option<String>,
    pub date: NaiveDate,
    pub status: FleetStatus,
    pub observations: Option<String>,
}

// Request para atualizar um veículo; quando `status` vem preenchido o
// registro diário da data também é atualizado (upsert por veículo + data)
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleRequest {
    pub name: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub driver: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<FleetStatus>,
    pub observations: Option<String>,
}

// Response de veículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub vehicle_type: String,
    pub driver: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            vehicle_type: vehicle.vehicle_type,
            driver: vehicle.driver,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

// Placas e motoristas já cadastrados, para autocompletar de formulários
#[derive(Debug, Serialize)]
pub struct KnownNamesResponse {
    pub plates: Vec<String>,
    pub drivers: Vec<String>,
}
