//! Port traits between the domain and its adapters.

pub mod config_port;
pub mod observer_port;
pub mod trade_source_port;
