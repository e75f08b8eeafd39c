use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub date: NaiveDate,
}

// Quantidade e percentual de um bucket sobre o total do dia
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BucketSummary {
    pub quantidade: u32,
    pub percentual: u32,
}

// Resumo da frota em uma data
#[derive(Debug, Serialize)]
pub struct FleetSummary {
    pub total: u32,
    pub funcionando: BucketSummary,
    pub quebrados: BucketSummary,
    pub emprestados: BucketSummary,
}

// Funcionando/quebrado por tipo de veículo
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TypeBreakdown {
    pub funcionando: u32,
    pub quebrado: u32,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub date: NaiveDate,
    pub resumo_frota: FleetSummary,
    pub frota_por_tipo: BTreeMap<String, TypeBreakdown>,
}
