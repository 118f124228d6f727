//! Domain entities

mod city;

pub use city::City;
