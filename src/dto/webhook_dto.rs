use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dto::dashboard_dto::{FleetSummary, TypeBreakdown};

#[derive(Debug, Deserialize)]
pub struct DailySummaryRequest {
    pub date: NaiveDate,
}

// Identidade de quem disparou o envio
#[derive(Debug, Serialize)]
pub struct WebhookUser {
    pub nome: String,
    pub email: String,
}

// Informativo geral embutido no resumo
#[derive(Debug, Serialize)]
pub struct WebhookGeneralInfo {
    pub extravasamento: i32,
    pub servico_turma_02: i32,
    pub servico_turma_05: i32,
    pub oge: i32,
}

// Payload enviado ao webhook externo. As chaves são o contrato com o
// consumidor e não mudam com refatorações internas.
#[derive(Debug, Serialize)]
pub struct DailySummaryPayload {
    pub data: String,
    pub frota_por_tipo: BTreeMap<String, TypeBreakdown>,
    pub resumo_frota: FleetSummary,
    pub informativo_geral: WebhookGeneralInfo,
    pub usuario: WebhookUser,
}

// Resultado reportado ao chamador; o corpo da resposta do webhook é ignorado
#[derive(Debug, Serialize)]
pub struct WebhookDeliveryResponse {
    pub delivered: bool,
    pub status_code: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::dashboard_dto::{BucketSummary, FleetSummary};

    #[test]
    fn payload_mantem_as_chaves_do_contrato() {
        let mut frota_por_tipo = BTreeMap::new();
        frota_por_tipo.insert(
            "EMBASA".to_string(),
            TypeBreakdown {
                funcionando: 2,
                quebrado: 1,
            },
        );

        let payload = DailySummaryPayload {
            data: "sexta-feira, 1 de março de 2024".to_string(),
            frota_por_tipo,
            resumo_frota: FleetSummary {
                total: 4,
                funcionando: BucketSummary {
                    quantidade: 3,
                    percentual: 75,
                },
                quebrados: BucketSummary {
                    quantidade: 1,
                    percentual: 25,
                },
                emprestados: BucketSummary {
                    quantidade: 0,
                    percentual: 0,
                },
            },
            informativo_geral: WebhookGeneralInfo {
                extravasamento: 1,
                servico_turma_02: 2,
                servico_turma_05: 3,
                oge: 4,
            },
            usuario: WebhookUser {
                nome: "Maria".to_string(),
                email: "maria@umbs.br".to_string(),
            },
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["resumo_frota"]["funcionando"]["percentual"], 75);
        assert_eq!(value["frota_por_tipo"]["EMBASA"]["quebrado"], 1);
        assert_eq!(value["informativo_geral"]["oge"], 4);
        assert_eq!(value["usuario"]["nome"], "Maria");
        assert_eq!(value["data"], "sexta-feira, 1 de março de 2024");
    }
}
