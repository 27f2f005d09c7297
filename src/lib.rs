pub mod catalog;
pub mod config;
pub mod errors;
pub mod export;
pub mod filter;
pub mod hints;
pub mod logging;
pub mod models;
pub mod router;
pub mod ui;
pub mod views;
