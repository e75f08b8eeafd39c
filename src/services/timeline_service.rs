//! Agregador do timeline mensal
//!
//! Transforma os registros diários esparsos de um mês em uma linha por
//! veículo, com o mapeamento data → status que a grade densa consome.
//! A lógica é pura: o controller busca as linhas e entrega aqui.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

use crate::dto::timeline_dto::{SortColumn, SortDirection};
use crate::repositories::status_repository::StatusWithVehicleRow;

/// Linha agregada do timeline: um veículo e seus status do mês.
///
/// `daily_status` é esparso: datas sem registro ficam fora do mapa e o
/// consumidor as renderiza como "sem dados": nunca um status real.
#[derive(Debug, Clone)]
pub struct TimelineRow {
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub vehicle_type: String,
    pub driver_name: String,
    pub daily_status: BTreeMap<NaiveDate, String>,
}

/// Agrupa os registros do mês por veículo.
///
/// - registros órfãos (veículo já excluído) são ignorados em silêncio;
/// - a primeira aparição de um veículo inicializa a linha;
/// - status duplicados na mesma data não derrubam nada: a última escrita
///   na ordem de iteração vence (o unique do banco impede o caso, mas o
///   agregador não depende disso);
/// - motorista é "o último visto vence": qualquer registro com motorista
///   não vazio sobrescreve o da linha, sem supor ordem de chegada.
pub fn build_timeline(records: &[StatusWithVehicleRow]) -> Vec<TimelineRow> {
    let mut rows: Vec<TimelineRow> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for record in records {
        let vehicle_name = match &record.vehicle_name {
            Some(name) => name.clone(),
            None => continue, // órfão
        };

        let position = *index.entry(record.vehicle_id).or_insert_with(|| {
            rows.push(TimelineRow {
                vehicle_id: record.vehicle_id,
                vehicle_name,
                vehicle_type: record.vehicle_type.clone().unwrap_or_default(),
                driver_name: record.driver.clone().unwrap_or_default(),
                daily_status: BTreeMap::new(),
            });
            rows.len() - 1
        });

        let row = &mut rows[position];
        row.daily_status.insert(record.date, record.status.clone());

        if let Some(driver) = &record.driver {
            if !driver.trim().is_empty() {
                row.driver_name = driver.clone();
            }
        }
    }

    rows
}

/// Ordena as linhas por coluna e direção.
///
/// Comparação lexicográfica de strings, estável (re-ordenar uma lista já
/// ordenada é no-op); motorista vazio ordena como string vazia.
pub fn sort_rows(rows: &mut [TimelineRow], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::VehicleName => a.vehicle_name.cmp(&b.vehicle_name),
            SortColumn::DriverName => a.driver_name.cmp(&b.driver_name),
            SortColumn::VehicleType => a.vehicle_type.cmp(&b.vehicle_type),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        vehicle_id: Uuid,
        name: Option<&str>,
        date: (i32, u32, u32),
        status: &str,
        driver: Option<&str>,
    ) -> StatusWithVehicleRow {
        StatusWithVehicleRow {
            id: Uuid::new_v4(),
            vehicle_id,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            status: status.to_string(),
            observations: None,
            driver: driver.map(str::to_string),
            vehicle_name: name.map(str::to_string),
            vehicle_type: name.map(|_| "OUTROS".to_string()),
            vehicle_driver: None,
        }
    }

    #[test]
    fn cada_veiculo_aparece_uma_unica_vez() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let records = vec![
            record(a, Some("AAA-0001"), (2024, 3, 1), "Emprestado", None),
            record(b, Some("BBB-0002"), (2024, 3, 1), "Emprestado", None),
            record(a, Some("AAA-0001"), (2024, 3, 2), "Emprestado", None),
            record(a, Some("AAA-0001"), (2024, 3, 15), "Emprestado", None),
        ];

        let rows = build_timeline(&records);
        assert_eq!(rows.len(), 2);
        let row_a = rows.iter().find(|r| r.vehicle_id == a).unwrap();
        assert_eq!(row_a.daily_status.len(), 3);
    }

    #[test]
    fn orfaos_sao_ignorados_sem_erro() {
        let a = Uuid::new_v4();
        let records = vec![
            record(a, Some("AAA-0001"), (2024, 3, 1), "Emprestado", None),
            record(Uuid::new_v4(), None, (2024, 3, 1), "Emprestado", None),
        ];

        let rows = build_timeline(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].vehicle_id, a);
    }

    #[test]
    fn datas_sem_registro_ficam_fora_do_mapa() {
        let a = Uuid::new_v4();
        let records = vec![
            record(a, Some("AAA-0001"), (2024, 3, 1), "Funcionando - Operando", None),
            record(a, Some("AAA-0001"), (2024, 3, 3), "Emprestado", None),
        ];

        let rows = build_timeline(&records);
        let map = &rows[0].daily_status;
        assert_eq!(
            map.get(&NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).unwrap(),
            "Funcionando - Operando"
        );
        assert!(map
            .get(&NaiveDate::from_ymd_opt(2024, 3, 2).unwrap())
            .is_none());
        assert_eq!(
            map.get(&NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()).unwrap(),
            "Emprestado"
        );
    }

    #[test]
    fn data_duplicada_nao_falha_e_ultima_escrita_vence() {
        let a = Uuid::new_v4();
        let records = vec![
            record(a, Some("AAA-0001"), (2024, 3, 1), "Funcionando - Operando", None),
            record(a, Some("AAA-0001"), (2024, 3, 1), "Emprestado", None),
        ];

        let rows = build_timeline(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0]
                .daily_status
                .get(&NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
                .unwrap(),
            "Emprestado"
        );
    }

    #[test]
    fn motorista_ultimo_visto_vence() {
        let a = Uuid::new_v4();
        let records = vec![
            record(a, Some("AAA-0001"), (2024, 3, 1), "Emprestado", Some("Carlos")),
            record(a, Some("AAA-0001"), (2024, 3, 2), "Emprestado", None),
            record(a, Some("AAA-0001"), (2024, 3, 3), "Emprestado", Some("  ")),
            record(a, Some("AAA-0001"), (2024, 3, 4), "Emprestado", Some("Paulo")),
        ];

        let rows = build_timeline(&records);
        // vazios e espaços não sobrescrevem; "Paulo" é o último não vazio
        assert_eq!(rows[0].driver_name, "Paulo");
    }

    #[test]
    fn motorista_ausente_ordena_como_string_vazia() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let mut rows = build_timeline(&[
            record(a, Some("AAA-0001"), (2024, 3, 1), "Emprestado", Some("Zeca")),
            record(b, Some("BBB-0002"), (2024, 3, 1), "Emprestado", None),
        ]);

        sort_rows(&mut rows, SortColumn::DriverName, SortDirection::Asc);
        assert_eq!(rows[0].driver_name, "");
        assert_eq!(rows[1].driver_name, "Zeca");
    }

    #[test]
    fn cenario_marco_2024_grade_completa() {
        use crate::utils::dates::month_days;

        let a = Uuid::new_v4();
        let records = vec![
            record(a, Some("AAA-0001"), (2024, 3, 1), "Funcionando - Operando", None),
            record(a, Some("AAA-0001"), (2024, 3, 3), "Emprestado", None),
        ];

        let rows = build_timeline(&records);
        assert_eq!(rows.len(), 1);

        let days = month_days(2024, 3);
        assert_eq!(days.len(), 31);

        // cada dia da grade ou tem o status registrado ou é "sem dados"
        for day in &days {
            let status = rows[0].daily_status.get(day).map(String::as_str);
            match day.to_string().as_str() {
                "2024-03-01" => assert_eq!(status, Some("Funcionando - Operando")),
                "2024-03-03" => assert_eq!(status, Some("Emprestado")),
                _ => assert_eq!(status, None),
            }
        }
    }

    #[test]
    fn reordenar_lista_ja_ordenada_e_noop() {
        let mut rows = Vec::new();
        for name in ["CCC-3", "AAA-1", "BBB-2"] {
            let id = Uuid::new_v4();
            rows.extend(build_timeline(&[record(
                id,
                Some(name),
                (2024, 3, 1),
                "Emprestado",
                None,
            )]));
        }

        sort_rows(&mut rows, SortColumn::VehicleName, SortDirection::Desc);
        let first: Vec<String> = rows.iter().map(|r| r.vehicle_name.clone()).collect();
        sort_rows(&mut rows, SortColumn::VehicleName, SortDirection::Desc);
        let second: Vec<String> = rows.iter().map(|r| r.vehicle_name.clone()).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["CCC-3", "BBB-2", "AAA-1"]);
    }
}
