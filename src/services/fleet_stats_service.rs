//! Agregação do dashboard
//!
//! Classificação dos registros de um dia nos buckets funcionando /
//! quebrado / emprestado e cálculo de percentuais. Strings fora da
//! enumeração contam no total mas em nenhum bucket.

use std::collections::BTreeMap;

use crate::dto::dashboard_dto::{BucketSummary, FleetSummary, TypeBreakdown};
use crate::models::status::{FleetStatus, StatusBucket};
use crate::repositories::status_repository::StatusWithVehicleRow;

/// Contagens cruas de um dia.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetCounts {
    pub total: u32,
    pub funcionando: u32,
    pub quebrado: u32,
    pub emprestado: u32,
}

/// round(part/total × 100); 0 quando o total é 0.
pub fn percentage(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}

/// Conta os status de um dia por bucket.
pub fn count_statuses<'a>(statuses: impl IntoIterator<Item = &'a str>) -> FleetCounts {
    let mut counts = FleetCounts::default();

    for status in statuses {
        counts.total += 1;
        match FleetStatus::parse(status).map(|s| s.bucket()) {
            Some(StatusBucket::Funcionando) => counts.funcionando += 1,
            Some(StatusBucket::Quebrado) => counts.quebrado += 1,
            Some(StatusBucket::Emprestado) => counts.emprestado += 1,
            None => {} // conta no total, em nenhum bucket
        }
    }

    counts
}

/// Resumo com percentuais a partir das contagens.
pub fn summarize(counts: FleetCounts) -> FleetSummary {
    FleetSummary {
        total: counts.total,
        funcionando: BucketSummary {
            quantidade: counts.funcionando,
            percentual: percentage(counts.funcionando, counts.total),
        },
        quebrados: BucketSummary {
            quantidade: counts.quebrado,
            percentual: percentage(counts.quebrado, counts.total),
        },
        emprestados: BucketSummary {
            quantidade: counts.emprestado,
            percentual: percentage(counts.emprestado, counts.total),
        },
    }
}

/// Funcionando/quebrado por tipo de veículo. Registros órfãos ficam de
/// fora; emprestados não entram na quebra por tipo.
pub fn breakdown_by_type(rows: &[StatusWithVehicleRow]) -> BTreeMap<String, TypeBreakdown> {
    let mut by_type: BTreeMap<String, TypeBreakdown> = BTreeMap::new();

    for row in rows {
        let vehicle_type = match &row.vehicle_type {
            Some(t) => t.clone(),
            None => continue,
        };

        let entry = by_type.entry(vehicle_type).or_default();
        match FleetStatus::parse(&row.status).map(|s| s.bucket()) {
            Some(StatusBucket::Funcionando) => entry.funcionando += 1,
            Some(StatusBucket::Quebrado) => entry.quebrado += 1,
            _ => {}
        }
    }

    by_type
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentual_sem_divisao_por_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(3, 4), 75);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn contagem_por_bucket() {
        let counts = count_statuses([
            "Funcionando - Operando",
            "Funcionando - Parado",
            "Manutenção - Veiculo",
            "Manutenção - Equipamento",
            "Emprestado",
        ]);

        assert_eq!(counts.total, 5);
        assert_eq!(counts.funcionando, 2);
        assert_eq!(counts.quebrado, 2);
        assert_eq!(counts.emprestado, 1);
    }

    #[test]
    fn string_desconhecida_conta_so_no_total() {
        let counts = count_statuses(["Funcionando - Operando", "Sumiu", ""]);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.funcionando, 1);
        assert_eq!(counts.quebrado, 0);
        assert_eq!(counts.emprestado, 0);
    }

    #[test]
    fn resumo_com_percentuais() {
        let summary = summarize(FleetCounts {
            total: 4,
            funcionando: 3,
            quebrado: 1,
            emprestado: 0,
        });

        assert_eq!(summary.funcionando.percentual, 75);
        assert_eq!(summary.quebrados.percentual, 25);
        assert_eq!(summary.emprestados.quantidade, 0);
        assert_eq!(summary.emprestados.percentual, 0);
    }

    #[test]
    fn dia_vazio_resume_em_zeros() {
        let summary = summarize(count_statuses([]));
        assert_eq!(summary.total, 0);
        assert_eq!(summary.funcionando.percentual, 0);
    }
}
