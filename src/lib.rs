pub mod completion;
pub mod config;
pub mod languages;
pub mod routes;
pub mod state;
pub mod translation;
