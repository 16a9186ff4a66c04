//! Per-deployment configuration for the submission client

use serde::{Deserialize, Serialize};

/// Message installed under the generic error key when a failure payload is
/// unusable.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Per-deployment defaults read by the submission coordinator.
///
/// Passed in at construction; the library holds no process-wide mutable
/// state and does no file I/O of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Message used when a failure payload carries nothing usable
    pub error_message: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}
