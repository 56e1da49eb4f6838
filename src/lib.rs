//! Project-management REST service: users, tasks and projects over SQLite.

pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
