//! swipekit-core: touch model + horizontal swipe recognition.
//!
//! Design goal: keep this crate UI-agnostic and platform-agnostic.
//! Host input translation and the tracker thread live in `swipekit-input`.

mod config;
mod listener;
mod recognizer;

pub use config::{
    default_config_path, load_or_default, load_yaml, parse_yaml, save_yaml, ConfigError,
    ConfigResult, EmissionPolicy, RecognizerConfig, DEFAULT_MIN_DISTANCE,
};
pub use listener::{ChannelListener, SwipeListener, SwipeTarget, TargetListener};
pub use recognizer::{classify, Classification, GestureState, SwipeRecognizer};

use serde::{Deserialize, Serialize};

/// Phase of a single touch sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One touch sample, in density-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchSample {
    pub x: f32,
    pub y: f32,
    pub phase: TouchPhase,
}

impl TouchSample {
    pub fn new(x: f32, y: f32, phase: TouchPhase) -> Self {
        Self { x, y, phase }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(x, y, TouchPhase::Down)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(x, y, TouchPhase::Move)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(x, y, TouchPhase::Up)
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(x, y, TouchPhase::Cancel)
    }
}

/// Horizontal direction of a recognized swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Finger travelled towards smaller x.
    Left,
    /// Finger travelled towards larger x.
    Right,
}

/// Emitted when a sample completes a qualifying horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwipeEvent {
    pub direction: SwipeDirection,
}

impl SwipeEvent {
    pub fn new(direction: SwipeDirection) -> Self {
        Self { direction }
    }
}
