pub mod booking;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod routes;
pub mod store;
