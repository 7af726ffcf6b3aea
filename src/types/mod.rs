pub mod config;
pub mod needs;
pub mod profile;
pub mod result;
