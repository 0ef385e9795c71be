pub mod api;
pub mod calc;
pub mod cli;
pub mod client;
pub mod config;
pub mod ui;
