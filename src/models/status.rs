//! Modelo de status diário da frota
//!
//! Este módulo contém o registro diário por veículo (tabela vehicle_status)
//! e a enumeração fechada de situações possíveis. O banco guarda a string
//! fixa de cada situação; o código só raciocina sobre a variante tipada.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Situação de um veículo em um dia: enumeração fechada.
///
/// As strings de rede/banco são as mesmas exibidas ao usuário e não mudam;
/// uma situação nova exige uma variante nova, nunca uma string solta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FleetStatus {
    #[serde(rename = "Funcionando - Operando")]
    Operando,
    #[serde(rename = "Funcionando - Parado")]
    Parado,
    #[serde(rename = "Manutenção - Veiculo")]
    ManutencaoVeiculo,
    #[serde(rename = "Manutenção - Equipamento")]
    ManutencaoEquipamento,
    #[serde(rename = "Emprestado")]
    Emprestado,
}

/// Bucket de agregação do dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBucket {
    Funcionando,
    Quebrado,
    Emprestado,
}

impl FleetStatus {
    pub const ALL: [FleetStatus; 5] = [
        FleetStatus::Operando,
        FleetStatus::Parado,
        FleetStatus::ManutencaoVeiculo,
        FleetStatus::ManutencaoEquipamento,
        FleetStatus::Emprestado,
    ];

    /// String fixa usada no banco e na API.
    pub fn as_str(&self) -> &'static str {
        match self {
            FleetStatus::Operando => "Funcionando - Operando",
            FleetStatus::Parado => "Funcionando - Parado",
            FleetStatus::ManutencaoVeiculo => "Manutenção - Veiculo",
            FleetStatus::ManutencaoEquipamento => "Manutenção - Equipamento",
            FleetStatus::Emprestado => "Emprestado",
        }
    }

    /// Converte a string do banco de volta para a variante.
    ///
    /// Linhas antigas podem carregar strings fora da enumeração; quem chama
    /// decide o que fazer com `None` (contam no total, em nenhum bucket).
    pub fn parse(value: &str) -> Option<FleetStatus> {
        match value {
            "Funcionando - Operando" => Some(FleetStatus::Operando),
            "Funcionando - Parado" => Some(FleetStatus::Parado),
            "Manutenção - Veiculo" => Some(FleetStatus::ManutencaoVeiculo),
            "Manutenção - Equipamento" => Some(FleetStatus::ManutencaoEquipamento),
            "Emprestado" => Some(FleetStatus::Emprestado),
            _ => None,
        }
    }

    /// Bucket do dashboard: função total sobre a enumeração.
    pub fn bucket(&self) -> StatusBucket {
        match self {
            FleetStatus::Operando | FleetStatus::Parado => StatusBucket::Funcionando,
            FleetStatus::ManutencaoVeiculo | FleetStatus::ManutencaoEquipamento => {
                StatusBucket::Quebrado
            }
            FleetStatus::Emprestado => StatusBucket::Emprestado,
        }
    }

    /// Cor do timeline: função total; "sem dados" usa NO_DATA_COLOR,
    /// que nenhuma situação real mapeia.
    pub fn color(&self) -> &'static str {
        match self {
            FleetStatus::Operando => "green-500",
            FleetStatus::Parado => "green-300",
            FleetStatus::ManutencaoVeiculo => "red-500",
            FleetStatus::ManutencaoEquipamento => "red-300",
            FleetStatus::Emprestado => "yellow-500",
        }
    }
}

/// Cor da célula sem registro no timeline.
pub const NO_DATA_COLOR: &str = "gray-200";

/// Registro diário: mapeia a tabela vehicle_status.
///
/// Invariante upstream: no máximo uma linha por (vehicle_id, date),
/// garantida pelo unique do banco e pelo upsert por chave natural.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyStatus {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: NaiveDate,
    pub status: String,
    pub observations: Option<String>,
    pub driver: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_fixa_ida_e_volta() {
        for status in FleetStatus::ALL {
            assert_eq!(FleetStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn string_desconhecida_rejeitada() {
        assert_eq!(FleetStatus::parse("Quebrado"), None);
        assert_eq!(FleetStatus::parse(""), None);
        assert_eq!(FleetStatus::parse("funcionando - operando"), None);
    }

    #[test]
    fn buckets_do_dashboard() {
        assert_eq!(FleetStatus::Operando.bucket(), StatusBucket::Funcionando);
        assert_eq!(FleetStatus::Parado.bucket(), StatusBucket::Funcionando);
        assert_eq!(
            FleetStatus::ManutencaoVeiculo.bucket(),
            StatusBucket::Quebrado
        );
        assert_eq!(
            FleetStatus::ManutencaoEquipamento.bucket(),
            StatusBucket::Quebrado
        );
        assert_eq!(FleetStatus::Emprestado.bucket(), StatusBucket::Emprestado);
    }

    #[test]
    fn nenhuma_cor_real_coincide_com_sem_dados() {
        for status in FleetStatus::ALL {
            assert_ne!(status.color(), NO_DATA_COLOR);
        }
    }

    #[test]
    fn serde_usa_as_strings_de_exibicao() {
        let json = serde_json::to_string(&FleetStatus::ManutencaoVeiculo).unwrap();
        assert_eq!(json, "\"Manutenção - Veiculo\"");
        let back: FleetStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FleetStatus::ManutencaoVeiculo);
    }
}
