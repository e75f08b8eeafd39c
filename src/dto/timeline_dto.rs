use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

// Coluna de ordenação do timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    #[default]
    VehicleName,
    DriverName,
    VehicleType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

// Query do timeline mensal: mês "YYYY-MM" + ordenação
#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    pub month: String,
    #[serde(default)]
    pub sort: SortColumn,
    #[serde(default)]
    pub direction: SortDirection,
}

// Uma linha do timeline: veículo + mapeamento esparso data → status.
// Datas ausentes do mapeamento são "sem dados" e recebem a cor própria
// da legenda, nunca um status real.
#[derive(Debug, Serialize)]
pub struct TimelineRowResponse {
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub vehicle_type: String,
    pub driver_name: String,
    pub daily_status: BTreeMap<String, String>,
}

// Entrada da legenda de cores
#[derive(Debug, Serialize)]
pub struct LegendEntry {
    pub status: String,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub month: String,
    pub days: Vec<String>,
    pub rows: Vec<TimelineRowResponse>,
    pub legend: Vec<LegendEntry>,
    pub no_data_color: String,
}
