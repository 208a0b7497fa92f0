pub mod configuration;
pub mod domain;
pub mod repository;
pub mod routes;
pub mod services;
pub mod startup;
pub mod telemetry;
pub mod utils;

pub use utils::{build_error_response, error_chain_fmt};
