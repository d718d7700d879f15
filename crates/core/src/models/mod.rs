pub mod chart;
pub mod dashboard;
pub mod entry;
pub mod forecast;
pub mod ledger;
pub mod month;
pub mod settings;
pub mod summary;
pub mod user;
