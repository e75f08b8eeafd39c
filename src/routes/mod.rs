pub mod auth_routes;
pub mod dashboard_routes;
pub mod general_info_routes;
pub mod observation_routes;
pub mod status_routes;
pub mod timeline_routes;
pub mod vehicle_routes;
pub mod weather_routes;
pub mod webhook_routes;
