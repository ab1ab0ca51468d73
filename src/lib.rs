pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod metrics;
pub mod relay;
pub mod seed;
pub mod state;
pub mod transactions;
