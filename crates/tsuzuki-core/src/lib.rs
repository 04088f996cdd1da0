pub mod assemble;
pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod view;

pub use error::CoreError;
