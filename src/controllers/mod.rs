//! Controllers da API
//!
//! Orquestram repositórios e services por trás de cada rota; recebem o
//! usuário autenticado como parâmetro explícito.

pub mod auth_controller;
pub mod dashboard_controller;
pub mod general_info_controller;
pub mod observation_controller;
pub mod status_controller;
pub mod timeline_controller;
pub mod vehicle_controller;
pub mod webhook_controller;
