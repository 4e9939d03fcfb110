//! Stable error codes and HTTP status classes for service-layer consumers.

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const GAME_NOT_FOUND: &str = "GAME_NOT_FOUND";
pub const RULE_NOT_FOUND: &str = "RULE_NOT_FOUND";
pub const GENERATION_FAILED: &str = "GENERATION_FAILED";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error onto a stable code string and the status class a request
/// handler should answer with.
pub trait SwigErrorCode {
    /// Stable, machine-readable code.
    fn error_code(&self) -> &'static str;

    /// 400 for bad input, 404 for missing or expired records, 500 otherwise.
    fn status_code(&self) -> u16;
}
