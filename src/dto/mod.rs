//! DTOs da API
//!
//! Requests e responses serializáveis de cada superfície da API.

pub mod auth_dto;
pub mod common_dto;
pub mod dashboard_dto;
pub mod general_info_dto;
pub mod observation_dto;
pub mod status_dto;
pub mod timeline_dto;
pub mod vehicle_dto;
pub mod weather_dto;
pub mod webhook_dto;
