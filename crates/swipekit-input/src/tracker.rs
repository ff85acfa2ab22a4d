//! Background swipe tracker.
//!
//! Hosts whose motion events arrive off the UI thread submit them to a
//! handle; a dedicated worker thread owns the recognizer and processes
//! events strictly in submission order.

use crate::density::Density;
use crate::error::{InputError, InputResult};
use crate::motion::RawMotionEvent;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use swipekit_core::{ChannelListener, RecognizerConfig, SwipeEvent, SwipeRecognizer};
use tracing::{debug, info, trace, warn};

/// Configuration for the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub recognizer: RecognizerConfig,
    /// Display density used to convert incoming pixel coordinates.
    pub density: Density,
    /// Capacity of both the motion queue and the swipe queue.
    pub queue_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            recognizer: RecognizerConfig::default(),
            density: Density::default(),
            queue_capacity: 256,
        }
    }
}

/// Commands for the tracker worker.
#[derive(Debug)]
pub enum TrackerCommand {
    /// Feed a motion event to the recognizer.
    Motion(RawMotionEvent),
    /// Stop the worker.
    Stop,
}

/// Handle to control the swipe tracker.
pub struct SwipeTrackerHandle {
    cmd_tx: Sender<TrackerCommand>,
    event_rx: Receiver<SwipeEvent>,
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl SwipeTrackerHandle {
    /// Queue a motion event without blocking.
    pub fn submit(&self, event: RawMotionEvent) -> InputResult<()> {
        if !self.is_running() {
            return Err(InputError::TrackerStopped);
        }
        match self.cmd_tx.try_send(TrackerCommand::Motion(event)) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(InputError::QueueFull),
            Err(TrySendError::Disconnected(_)) => Err(InputError::TrackerStopped),
        }
    }

    /// Try to receive a swipe (non-blocking).
    pub fn try_recv(&self) -> Option<SwipeEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next swipe.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<SwipeEvent> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Drain all pending swipes.
    pub fn drain(&self) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// Signal the worker to stop. Events already queued may be discarded.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        // If the queue is full the worker is busy and will see the flag.
        let _ = self.cmd_tx.try_send(TrackerCommand::Stop);
    }

    /// Check if the worker is still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
            && self.thread.as_ref().map_or(false, |t| !t.is_finished())
    }
}

impl Drop for SwipeTrackerHandle {
    fn drop(&mut self) {
        self.stop();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("Swipe tracker thread panicked");
            }
        }
    }
}

/// Start the swipe tracker.
///
/// Validates the configuration and spawns the worker thread.
pub fn start_swipe_tracker(config: TrackerConfig) -> InputResult<SwipeTrackerHandle> {
    config.recognizer.validate()?;

    let capacity = config.queue_capacity.max(1);
    let (cmd_tx, cmd_rx) = bounded(capacity);
    let (event_tx, event_rx) = bounded(capacity);
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    let thread = thread::Builder::new()
        .name("swipekit-tracker".into())
        .spawn(move || run_tracker(config, cmd_rx, event_tx, running_clone))?;

    Ok(SwipeTrackerHandle {
        cmd_tx,
        event_rx,
        running,
        thread: Some(thread),
    })
}

fn run_tracker(
    config: TrackerConfig,
    cmd_rx: Receiver<TrackerCommand>,
    event_tx: Sender<SwipeEvent>,
    running: Arc<AtomicBool>,
) {
    info!(
        density = config.density.scale(),
        min_distance = config.recognizer.min_distance,
        "Swipe tracker thread started"
    );

    let density = config.density;
    let mut recognizer = SwipeRecognizer::new(config.recognizer);
    recognizer.set_listener(ChannelListener::new(event_tx));

    for cmd in cmd_rx.iter() {
        if !running.load(Ordering::SeqCst) {
            break;
        }
        match cmd {
            TrackerCommand::Motion(raw) => match raw.to_sample(density) {
                Some(sample) => {
                    recognizer.on_touch(sample);
                }
                None => trace!(action = raw.action, "Ignoring motion event"),
            },
            TrackerCommand::Stop => {
                debug!("Stop command received");
                break;
            }
        }
    }

    running.store(false, Ordering::SeqCst);
    info!("Swipe tracker thread exiting");
}
