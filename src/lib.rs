pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod session;
pub mod visualization;

pub use analysis::*;
pub use config::{Config, ConfigSettings, MatchMode};
pub use data::*;
pub use error::{ConfigError, MatchError};
pub use session::Session;

pub type Result<T> = anyhow::Result<T>;
