//! Error handling for swig.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod storage_error;
pub mod swig_error;

pub use config_error::ConfigError;
pub use error_code::SwigErrorCode;
pub use storage_error::StorageError;
pub use swig_error::{SwigError, SwigResult};
