//! Services module
//!
//! Este módulo contém a lógica de negócio da aplicação: agregações do
//! dashboard e do timeline e integrações externas (webhook e clima).

pub mod fleet_stats_service;
pub mod timeline_service;
pub mod weather_service;
pub mod webhook_service;
