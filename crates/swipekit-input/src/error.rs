//! Common error types for swipekit-input.

use swipekit_core::ConfigError;
use thiserror::Error;

/// Input-layer errors.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid density scale: {0}")]
    InvalidDensity(f32),
    #[error("tracker queue full")]
    QueueFull,
    #[error("tracker stopped")]
    TrackerStopped,
    #[error("failed to spawn tracker thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for input operations.
pub type InputResult<T> = Result<T, InputError>;
