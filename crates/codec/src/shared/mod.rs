pub mod config;
pub mod placeholder;
pub mod value_format;
