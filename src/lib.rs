//! This is the library of the marvin bot.
pub mod config;
pub mod github;
pub mod marvin;
pub mod utils;
