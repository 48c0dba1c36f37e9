pub mod errors;

pub use errors::{ConfigError, TinkerError};

pub type Result<T> = std::result::Result<T, TinkerError>;
