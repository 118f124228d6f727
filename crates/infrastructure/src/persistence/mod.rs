//! SQLite persistence for the city catalog

mod city_store;
mod connection;
mod migrations;
pub mod seeder;

pub use city_store::SqliteCityStore;
pub use connection::{ConnectionPool, DatabaseError, PooledConn, create_pool};
