//! Translation of host motion events into touch samples.
//!
//! Action codes follow the Android `MotionEvent` numbering. The upper bits
//! carry a pointer index and are masked off before decoding.

use crate::density::Density;
use serde::{Deserialize, Serialize};
use swipekit_core::{TouchPhase, TouchSample};

/// Bits of an action code that hold the action itself.
pub const ACTION_MASK: i32 = 0xff;

/// Host motion actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionAction {
    Down,
    Up,
    Move,
    Cancel,
    Outside,
    PointerDown,
    PointerUp,
    HoverMove,
    Scroll,
    HoverEnter,
    HoverExit,
}

impl MotionAction {
    /// Decode a raw action code. Unknown codes yield `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        let action = match code & ACTION_MASK {
            0 => Self::Down,
            1 => Self::Up,
            2 => Self::Move,
            3 => Self::Cancel,
            4 => Self::Outside,
            5 => Self::PointerDown,
            6 => Self::PointerUp,
            7 => Self::HoverMove,
            8 => Self::Scroll,
            9 => Self::HoverEnter,
            10 => Self::HoverExit,
            _ => return None,
        };
        Some(action)
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Down => 0,
            Self::Up => 1,
            Self::Move => 2,
            Self::Cancel => 3,
            Self::Outside => 4,
            Self::PointerDown => 5,
            Self::PointerUp => 6,
            Self::HoverMove => 7,
            Self::Scroll => 8,
            Self::HoverEnter => 9,
            Self::HoverExit => 10,
        }
    }

    /// Touch phase the recognizer sees, if this action takes part in swipes.
    pub fn phase(self) -> Option<TouchPhase> {
        match self {
            Self::Down => Some(TouchPhase::Down),
            Self::Up => Some(TouchPhase::Up),
            Self::Move => Some(TouchPhase::Move),
            Self::Cancel => Some(TouchPhase::Cancel),
            _ => None,
        }
    }
}

/// A motion event as delivered by the host, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawMotionEvent {
    pub action: i32,
    pub x: f32,
    pub y: f32,
}

impl RawMotionEvent {
    pub fn new(action: MotionAction, x: f32, y: f32) -> Self {
        Self {
            action: action.code(),
            x,
            y,
        }
    }

    pub fn action(&self) -> Option<MotionAction> {
        MotionAction::from_code(self.action)
    }

    /// Convert to a density-independent sample; `None` for actions that do
    /// not participate in swipe recognition.
    pub fn to_sample(&self, density: Density) -> Option<TouchSample> {
        let phase = self.action()?.phase()?;
        Some(TouchSample::new(density.to_dp(self.x), density.to_dp(self.y), phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_masks_pointer_index() {
        // ACTION_POINTER_UP for pointer index 1.
        assert_eq!(MotionAction::from_code(0x0106), Some(MotionAction::PointerUp));
        assert_eq!(MotionAction::from_code(0x0002), Some(MotionAction::Move));
        assert_eq!(MotionAction::from_code(42), None);
        assert_eq!(MotionAction::from_code(-1), None);
    }

    #[test]
    fn test_only_touch_actions_have_phases() {
        assert_eq!(MotionAction::Down.phase(), Some(TouchPhase::Down));
        assert_eq!(MotionAction::Cancel.phase(), Some(TouchPhase::Cancel));
        assert_eq!(MotionAction::PointerDown.phase(), None);
        assert_eq!(MotionAction::HoverMove.phase(), None);
    }

    #[test]
    fn test_to_sample_scales_coordinates() {
        let density = Density::new(2.0).unwrap();
        let event = RawMotionEvent::new(MotionAction::Move, 40.0, 8.0);
        assert_eq!(event.to_sample(density), Some(TouchSample::moved(20.0, 4.0)));

        let scroll = RawMotionEvent::new(MotionAction::Scroll, 40.0, 8.0);
        assert_eq!(scroll.to_sample(density), None);

        let unknown = RawMotionEvent {
            action: 99,
            x: 0.0,
            y: 0.0,
        };
        assert_eq!(unknown.to_sample(density), None);
    }
}
