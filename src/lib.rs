pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

#[cfg(test)]
pub(crate) mod test_support;
