//! Utilidades do sistema
//!
//! Este módulo contém utilidades para tratamento de erros, validação,
//! JWT, calendário e outras funcionalidades comuns.

pub mod dates;
pub mod errors;
pub mod jwt;
pub mod validation;
