//! Per-platform request state: `Idle -> Resolving -> Success | Failed`.
//!
//! Requests are not cancelled. A newer `begin` simply makes older tickets
//! stale, and outcomes delivered with a stale ticket are dropped, so only the
//! latest request is ever observed.

use crate::error::UserFacingError;
use crate::model::MediaResult;
use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Resolving,
    Success(MediaResult),
    Failed(String),
}

/// Handle for one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Whether [`ResolutionSession::finish`] applied the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Yes,
    Stale,
}

#[derive(Debug)]
pub struct ResolutionSession {
    platform: Platform,
    generation: u64,
    state: SessionState,
}

impl ResolutionSession {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            generation: 0,
            state: SessionState::Idle,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// True while a request is in flight; the trigger should be disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, SessionState::Resolving)
    }

    /// Starts a request, discarding the previous result or error.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = SessionState::Resolving;
        Ticket(self.generation)
    }

    pub fn finish(
        &mut self,
        ticket: Ticket,
        outcome: Result<MediaResult, UserFacingError>,
    ) -> Applied {
        if ticket.0 != self.generation {
            tracing::debug!(
                "{} session: dropping outcome of request {} (latest is {})",
                self.platform,
                ticket.0,
                self.generation
            );
            return Applied::Stale;
        }
        self.state = match outcome {
            Ok(result) => SessionState::Success(result),
            Err(err) => SessionState::Failed(err.message),
        };
        Applied::Yes
    }

    /// Back to `Idle`, e.g. when the view is cleared. In-flight tickets go stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = SessionState::Idle;
    }
}
