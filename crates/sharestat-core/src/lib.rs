pub mod config;
pub mod logging;

pub mod client;
pub mod count_api;
pub mod fetch;
pub mod popularity;
pub mod report;
