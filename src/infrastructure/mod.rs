pub mod databases;
pub mod models;
pub mod repositories;
