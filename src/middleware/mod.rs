//! Middleware do sistema
//!
//! Este módulo contém o middleware de autenticação e CORS.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
