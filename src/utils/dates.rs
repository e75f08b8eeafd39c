//! Utilitários de calendário
//!
//! Geração da grade de dias de um mês, navegação entre dias e
//! formatação de datas por extenso (pt-BR) para o resumo diário.

use chrono::{Datelike, Duration, NaiveDate};

const WEEKDAYS_PT: [&str; 7] = [
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
    "domingo",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Todos os dias do mês, do dia 1 ao último, em ordem crescente.
///
/// A grade é definida pelo calendário, não pelos dados: meses sem
/// registro algum ainda produzem a lista completa de dias.
pub fn month_days(year: i32, month: u32) -> Vec<NaiveDate> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return Vec::new(),
    };

    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    let last_day = match next_month {
        Some(d) => (d - Duration::days(1)).day(),
        None => return Vec::new(),
    };

    (1..=last_day)
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

/// Dia anterior a uma data.
pub fn previous_day(date: NaiveDate) -> NaiveDate {
    date - Duration::days(1)
}

/// Data por extenso em pt-BR: "quinta-feira, 1 de agosto de 2026"
pub fn format_date_pt(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_PT[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS_PT[date.month0() as usize];
    format!("{}, {} de {} de {}", weekday, date.day(), month, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_tem_todos_os_dias_do_mes() {
        assert_eq!(month_days(2024, 1).len(), 31);
        assert_eq!(month_days(2024, 4).len(), 30);
        // Fevereiro bissexto e não bissexto
        assert_eq!(month_days(2024, 2).len(), 29);
        assert_eq!(month_days(2023, 2).len(), 28);
        assert_eq!(month_days(2024, 12).len(), 31);
    }

    #[test]
    fn grade_comeca_no_dia_um() {
        let days = month_days(2024, 3);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(days[30], NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn mes_invalido_produz_grade_vazia() {
        assert!(month_days(2024, 13).is_empty());
        assert!(month_days(2024, 0).is_empty());
    }

    #[test]
    fn dia_anterior_cruza_mes_e_ano() {
        assert_eq!(
            previous_day(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            previous_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
        );
    }

    #[test]
    fn data_por_extenso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_date_pt(date), "sexta-feira, 1 de março de 2024");
    }
}
