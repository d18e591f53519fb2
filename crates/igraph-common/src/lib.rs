//! Common utilities and types for igraph intermission analysis

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{IGraphError, Result};
pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig};
pub use types::*;
pub use utils::*;
