use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::status::FleetStatus;
use crate::models::vehicle::Vehicle;

// Upsert de um registro diário por (veículo, data)
#[derive(Debug, Deserialize)]
pub struct UpsertStatusRequest {
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub status: FleetStatus,
    pub observations: Option<String>,
    pub driver: Option<String>,
}

// Filtro da listagem diária
#[derive(Debug, Deserialize)]
pub struct StatusByDateQuery {
    pub date: NaiveDate,
}

// Veículo embutido na listagem diária
#[derive(Debug, Serialize)]
pub struct StatusVehicleInfo {
    pub id: Uuid,
    pub name: String,
    pub vehicle_type: String,
    pub driver: Option<String>,
}

impl From<Vehicle> for StatusVehicleInfo {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            vehicle_type: vehicle.vehicle_type,
            driver: vehicle.driver,
        }
    }
}

// Registro diário com o veículo resolvido
#[derive(Debug, Serialize)]
pub struct StatusWithVehicleResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub status: String,
    pub observations: Option<String>,
    pub driver: Option<String>,
    pub vehicle: StatusVehicleInfo,
}

// Request do "copiar dia anterior"
#[derive(Debug, Deserialize)]
pub struct CopyPreviousDayRequest {
    pub date: NaiveDate,
}

// Resultado do "copiar dia anterior"
#[derive(Debug, Serialize)]
pub struct CopyPreviousDayResponse {
    pub source_date: NaiveDate,
    pub target_date: NaiveDate,
    pub copied: usize,
}
