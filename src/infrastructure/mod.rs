pub mod config;
pub mod gnews;
pub mod http;
