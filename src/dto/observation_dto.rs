use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::observation::DailyObservation;

// Upsert da observação do dia (no máximo uma por data)
#[derive(Debug, Deserialize)]
pub struct UpsertObservationRequest {
    pub date: NaiveDate,
    pub content: String,
}

// Edição de uma observação existente
#[derive(Debug, Deserialize)]
pub struct UpdateObservationRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ObservationByDateQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct ObservationResponse {
    pub id: Uuid,
    pub date: NaiveDate,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DailyObservation> for ObservationResponse {
    fn from(obs: DailyObservation) -> Self {
        Self {
            id: obs.id,
            date: obs.date,
            content: obs.content,
            created_at: obs.created_at,
            updated_at: obs.updated_at,
        }
    }
}
