//! Transient status toast
//!
//! A toast lives for exactly `TOAST_VISIBLE_SECS` from the moment it is
//! shown, fading out over the last `TOAST_FADE_SECS` of that window.
//! Replacing it with a new message restarts the clock.

use crate::constants::{TOAST_FADE_SECS, TOAST_VISIBLE_SECS};
use crate::types::StatusKind;
use std::time::Instant;

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    kind: StatusKind,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Current opacity, or `None` once the toast has expired.
    pub fn alpha(&self) -> Option<f32> {
        Self::alpha_at(self.shown_at.elapsed().as_secs_f32())
    }

    pub fn is_expired(&self) -> bool {
        self.alpha().is_none()
    }

    fn alpha_at(elapsed: f32) -> Option<f32> {
        if elapsed >= TOAST_VISIBLE_SECS {
            return None;
        }
        let fade_start = TOAST_VISIBLE_SECS - TOAST_FADE_SECS;
        if elapsed > fade_start {
            Some((TOAST_VISIBLE_SECS - elapsed) / TOAST_FADE_SECS)
        } else {
            Some(1.0)
        }
    }
}
