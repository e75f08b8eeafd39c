//! Modelo de Vehicle
//!
//! Este módulo contém o struct Vehicle e a enumeração de tipos da frota.
//! Mapeia exatamente a tabela vehicles com primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Categoria do veículo: conjunto fixo de tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    #[serde(rename = "DESTACK")]
    Destack,
    #[serde(rename = "A.CUNHA")]
    ACunha,
    #[serde(rename = "EMBASA")]
    Embasa,
    #[serde(rename = "OUTROS")]
    Outros,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Destack => "DESTACK",
            VehicleType::ACunha => "A.CUNHA",
            VehicleType::Embasa => "EMBASA",
            VehicleType::Outros => "OUTROS",
        }
    }

    pub fn parse(value: &str) -> Option<VehicleType> {
        match value {
            "DESTACK" => Some(VehicleType::Destack),
            "A.CUNHA" => Some(VehicleType::ACunha),
            "EMBASA" => Some(VehicleType::Embasa),
            "OUTROS" => Some(VehicleType::Outros),
            _ => None,
        }
    }
}

/// Vehicle principal: mapeia exatamente a tabela vehicles.
///
/// `name` é a placa exibida; `driver` é o motorista padrão, que o registro
/// diário pode sobrescrever.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub vehicle_type: String,
    pub driver: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipo_ida_e_volta() {
        for tipo in [
            VehicleType::Destack,
            VehicleType::ACunha,
            VehicleType::Embasa,
            VehicleType::Outros,
        ] {
            assert_eq!(VehicleType::parse(tipo.as_str()), Some(tipo));
        }
        assert_eq!(VehicleType::parse("CAMINHÃO"), None);
    }
}
