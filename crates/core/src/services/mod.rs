pub mod auth_service;
pub mod chart_service;
pub mod export_service;
pub mod forecast_service;
pub mod ledger_service;
pub mod month_service;
pub mod profit_service;
pub mod summary_service;
