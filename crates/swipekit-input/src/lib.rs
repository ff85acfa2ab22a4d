//! swipekit-input: host-facing input boundary for swipekit.
//!
//! This crate provides:
//! - Translation of host motion action codes into touch phases
//! - Density-independent unit conversion for incoming coordinates
//! - A background tracker thread that owns a recognizer
//! - Logging setup via `tracing-subscriber`
//!
//! ## Module Structure
//!
//! - `error` - Common error types
//! - `density` - Pixel / density-independent unit conversion
//! - `motion` - Raw motion events and action decoding
//! - `tracker` - Swipe tracker worker and handle
//! - `logging` - Subscriber installation

mod density;
mod error;
mod logging;
mod motion;
mod tracker;

// Re-export error types
pub use error::{InputError, InputResult};

pub use density::Density;

pub use motion::{MotionAction, RawMotionEvent, ACTION_MASK};

pub use tracker::{start_swipe_tracker, SwipeTrackerHandle, TrackerCommand, TrackerConfig};

pub use logging::{setup as setup_logging, LogConfig};
