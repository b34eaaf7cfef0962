pub mod admin;
pub mod browse;
pub mod utils;
