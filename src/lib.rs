pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod observability;
pub mod ranking;
pub mod security;
