// Library for tests to access modules

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;
pub mod store;
pub mod ui;
