// Application layer - controllers and use cases
pub mod controller;
pub mod dashboard_service;
pub mod sensor_data_repository;
