//! Utilitários de validação
//!
//! Este módulo contém funções helper para validação de dados
//! vindos da API.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Placas no formato livre usado pela frota: "ABC-1234", "ABC1D23" etc.
    static ref PLATE_RE: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 .\-]{1,19}$").unwrap();
}

/// Validar e decompor um identificador de mês "YYYY-MM"
pub fn validate_month(value: &str) -> Result<(i32, u32), ValidationError> {
    let invalid = |value: &str| {
        let mut error = ValidationError::new("month");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM".to_string());
        error
    };

    let (year_str, month_str) = value.split_once('-').ok_or_else(|| invalid(value))?;
    let year: i32 = year_str.parse().map_err(|_| invalid(value))?;
    let month: u32 = month_str.parse().map_err(|_| invalid(value))?;

    if !(1..=12).contains(&month) {
        return Err(invalid(value));
    }

    Ok((year, month))
}

/// Validar formato de placa de veículo
pub fn validate_plate(value: &str) -> Result<(), ValidationError> {
    if !PLATE_RE.is_match(value.trim()) {
        let mut error = ValidationError::new("plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_valido_e_decomposto() {
        assert_eq!(validate_month("2024-03").unwrap(), (2024, 3));
        assert_eq!(validate_month("1999-12").unwrap(), (1999, 12));
    }

    #[test]
    fn month_invalido_rejeitado() {
        assert!(validate_month("2024-13").is_err());
        assert!(validate_month("2024").is_err());
        assert!(validate_month("abc-01").is_err());
    }

    #[test]
    fn placa_comum_aceita() {
        assert!(validate_plate("ABC-1234").is_ok());
        assert!(validate_plate("ABC1D23").is_ok());
        assert!(validate_plate("RETRO 01").is_ok());
    }

    #[test]
    fn placa_vazia_rejeitada() {
        assert!(validate_plate("").is_err());
        assert!(validate_plate("   ").is_err());
    }
}
