//! Horizontal swipe recognition over a stream of touch samples.
//!
//! Every non-`Down` sample is evaluated the same way, so a swipe can be
//! reported in the middle of a gesture as well as on release. Coordinates
//! recorded at `Down` are only overwritten by the next `Down`, never cleared.

use crate::config::{ConfigResult, EmissionPolicy, RecognizerConfig};
use crate::listener::SwipeListener;
use crate::{SwipeDirection, SwipeEvent, TouchPhase, TouchSample};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Coordinates tracked across one gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    pub down_x: f32,
    pub down_y: f32,
    pub last_x: f32,
    pub last_y: f32,
}

impl GestureState {
    /// Horizontal travel, positive when the finger moved left.
    pub fn delta_x(&self) -> f32 {
        self.down_x - self.last_x
    }

    /// Vertical travel, positive when the finger moved up.
    pub fn delta_y(&self) -> f32 {
        self.down_y - self.last_y
    }
}

/// Outcome of evaluating a gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Vertical travel dominates (or there is no horizontal travel at all).
    NotHorizontal,
    /// Horizontal, but not beyond the minimum distance.
    TooShort { distance: f32 },
    Swipe(SwipeDirection),
}

/// Classify the current state against a minimum horizontal distance.
pub fn classify(state: &GestureState, min_distance: f32) -> Classification {
    let delta_x = state.delta_x();
    let delta_y = state.delta_y();

    if delta_x.abs() <= delta_y.abs() {
        return Classification::NotHorizontal;
    }

    let distance = delta_x.abs();
    if distance <= min_distance {
        return Classification::TooShort { distance };
    }

    if delta_x < 0.0 {
        Classification::Swipe(SwipeDirection::Right)
    } else if delta_x > 0.0 {
        Classification::Swipe(SwipeDirection::Left)
    } else {
        Classification::NotHorizontal
    }
}

/// Turns touch samples for one surface into swipe events.
pub struct SwipeRecognizer {
    config: RecognizerConfig,
    state: GestureState,
    emitted_this_gesture: bool,
    listener: Option<Box<dyn SwipeListener + Send>>,
}

impl SwipeRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            config,
            state: GestureState::default(),
            emitted_this_gesture: false,
            listener: None,
        }
    }

    /// Like [`SwipeRecognizer::new`], but refuses a config that fails validation.
    pub fn try_new(config: RecognizerConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn with_defaults() -> Self {
        Self::new(RecognizerConfig::default())
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Register the observer for emitted swipes, replacing any previous one.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: SwipeListener + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Process one sample. Returns the swipe it completes, if any; the
    /// registered listener is notified with the same event.
    pub fn on_touch(&mut self, sample: TouchSample) -> Option<SwipeEvent> {
        match sample.phase {
            TouchPhase::Down => {
                self.state.down_x = sample.x;
                self.state.down_y = sample.y;
                self.emitted_this_gesture = false;
                None
            }
            TouchPhase::Move | TouchPhase::Up | TouchPhase::Cancel => {
                self.state.last_x = sample.x;
                self.state.last_y = sample.y;
                self.evaluate(sample.phase)
            }
        }
    }

    /// Run a whole recorded sample stream, collecting emitted swipes in order.
    pub fn feed<I>(&mut self, samples: I) -> Vec<SwipeEvent>
    where
        I: IntoIterator<Item = TouchSample>,
    {
        samples
            .into_iter()
            .filter_map(|sample| self.on_touch(sample))
            .collect()
    }

    fn evaluate(&mut self, phase: TouchPhase) -> Option<SwipeEvent> {
        let direction = match classify(&self.state, self.config.min_distance) {
            Classification::NotHorizontal => return None,
            Classification::TooShort { distance } => {
                debug!(
                    ?phase,
                    distance,
                    min_distance = self.config.min_distance,
                    "Horizontal swipe too short"
                );
                return None;
            }
            Classification::Swipe(direction) => direction,
        };

        if self.config.emission == EmissionPolicy::OncePerGesture && self.emitted_this_gesture {
            trace!(?direction, ?phase, "Swipe already reported for this gesture");
            return None;
        }
        self.emitted_this_gesture = true;

        let event = SwipeEvent::new(direction);
        debug!(?direction, ?phase, delta_x = self.state.delta_x(), "Swipe recognized");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_swipe(event);
        }
        Some(event)
    }
}

impl Default for SwipeRecognizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for SwipeRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeRecognizer")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("emitted_this_gesture", &self.emitted_this_gesture)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
