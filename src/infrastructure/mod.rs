// Infrastructure layer - External dependencies and adapters
pub mod cbm_client;
pub mod config;
