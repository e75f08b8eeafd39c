use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::general_info::GeneralInfo;

// Upsert do informativo geral do dia
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertGeneralInfoRequest {
    pub date: NaiveDate,
    #[validate(range(min = 0))]
    pub extravasamento: i32,
    #[validate(range(min = 0))]
    pub servico_turma_02: i32,
    #[validate(range(min = 0))]
    pub servico_turma_05: i32,
    #[validate(range(min = 0))]
    pub oge: i32,
}

#[derive(Debug, Deserialize)]
pub struct GeneralInfoByDateQuery {
    pub date: NaiveDate,
}

// Snapshot do dia; datas sem registro respondem com zeros
#[derive(Debug, Serialize)]
pub struct GeneralInfoResponse {
    pub date: NaiveDate,
    pub extravasamento: i32,
    pub servico_turma_02: i32,
    pub servico_turma_05: i32,
    pub oge: i32,
    pub saved: bool,
}

impl GeneralInfoResponse {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            extravasamento: 0,
            servico_turma_02: 0,
            servico_turma_05: 0,
            oge: 0,
            saved: false,
        }
    }
}

impl From<GeneralInfo> for GeneralInfoResponse {
    fn from(info: GeneralInfo) -> Self {
        Self {
            date: info.date,
            extravasamento: info.extravasamento,
            servico_turma_02: info.servico_turma_02,
            servico_turma_05: info.servico_turma_05,
            oge: info.oge,
            saved: true,
        }
    }
}
