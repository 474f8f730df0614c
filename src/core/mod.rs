pub mod config;
pub mod error;
pub mod types;

pub use config::ExportConfig;
pub use error::{ExportError, Result};
