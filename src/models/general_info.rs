//! Modelo do informativo geral
//!
//! Snapshot diário de quatro contadores operacionais independentes
//! (tabela general_info, upsert por date + created_by). Os contadores não
//! têm relação com o status da frota.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneralInfo {
    pub id: Uuid,
    pub date: NaiveDate,
    pub extravasamento: i32,
    pub servico_turma_02: i32,
    pub servico_turma_05: i32,
    pub oge: i32,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
