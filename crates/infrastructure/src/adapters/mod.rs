//! Adapters bridging external clients to application ports

mod weather_adapter;

pub use weather_adapter::OpenWeatherAdapter;
