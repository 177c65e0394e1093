pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod otel;
pub mod repository;
pub mod routes;
pub mod service;
pub mod shutdown;
pub mod state;
pub mod telemetry;
