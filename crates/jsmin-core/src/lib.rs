pub mod config;
pub mod error;
pub mod stats;

pub use config::{BatchConfig, MinifyConfig};
pub use error::{JsMinError, MinifyError, Result};
pub use stats::MinifyStats;
