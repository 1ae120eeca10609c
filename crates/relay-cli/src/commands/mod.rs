//! CLI commands

pub mod models;
pub mod resolve;
pub mod routes;
