pub mod client;
pub mod endpoints;
pub mod fetcher;
pub mod models;
