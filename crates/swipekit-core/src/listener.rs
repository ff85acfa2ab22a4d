//! Output boundary: who hears about recognized swipes.

use crate::{SwipeDirection, SwipeEvent};
use crossbeam_channel::{Sender, TrySendError};
use tracing::warn;

/// Observer notified with every swipe a recognizer emits.
pub trait SwipeListener {
    fn on_swipe(&mut self, event: SwipeEvent);
}

impl<F> SwipeListener for F
where
    F: FnMut(SwipeEvent),
{
    fn on_swipe(&mut self, event: SwipeEvent) {
        self(event)
    }
}

/// Forwards swipes into a channel without blocking the caller.
pub struct ChannelListener {
    tx: Sender<SwipeEvent>,
}

impl ChannelListener {
    pub fn new(tx: Sender<SwipeEvent>) -> Self {
        Self { tx }
    }
}

impl SwipeListener for ChannelListener {
    fn on_swipe(&mut self, event: SwipeEvent) {
        match self.tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => warn!(?event, "Swipe channel full, dropping event"),
            Err(TrySendError::Disconnected(_)) => {
                warn!(?event, "Swipe channel disconnected, dropping event")
            }
        }
    }
}

/// A control that reacts to left and right swipes.
pub trait SwipeTarget {
    fn on_left_swipe(&mut self);
    fn on_right_swipe(&mut self);
}

/// Adapts a [`SwipeTarget`] into a [`SwipeListener`].
pub struct TargetListener<T> {
    target: T,
}

impl<T: SwipeTarget> TargetListener<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_inner(self) -> T {
        self.target
    }
}

impl<T: SwipeTarget> SwipeListener for TargetListener<T> {
    fn on_swipe(&mut self, event: SwipeEvent) {
        match event.direction {
            SwipeDirection::Left => self.target.on_left_swipe(),
            SwipeDirection::Right => self.target.on_right_swipe(),
        }
    }
}
