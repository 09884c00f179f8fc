//! Submission guards.
//!
//! One [`SubmissionGuard`] per form. A guard validates its precondition on
//! every submit and moves through
//! `Idle -> Validating -> {Blocked -> Idle, Submitting}`. `Submitting` is
//! terminal: the page is about to navigate away.

use serde::Serialize;

use crate::types::{AppError, AppResult};

/// Which form a guard protects, and therefore what it requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardKind {
    /// Needs a chosen file.
    Upload,
    /// Needs at least one checked measure.
    Selection,
}

impl GuardKind {
    fn check(&self, count: usize) -> AppResult<()> {
        match (self, count) {
            (GuardKind::Upload, 0) => Err(AppError::NoFileSelected),
            (GuardKind::Selection, 0) => Err(AppError::NoMeasureSelected),
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardState {
    Idle,
    Validating,
    Blocked,
    Submitting,
}

/// What the submit handler must do with the event.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardDecision {
    /// Let the browser submit and run the feedback side effects.
    Proceed,
    /// Prevent submission and report the error.
    Block(AppError),
    /// Already submitting: prevent submission, do nothing else.
    Duplicate,
}

#[derive(Debug, Serialize)]
pub struct SubmissionGuard {
    kind: GuardKind,
    state: GuardState,
}

impl SubmissionGuard {
    pub fn new(kind: GuardKind) -> Self {
        Self {
            kind,
            state: GuardState::Idle,
        }
    }

    pub fn kind(&self) -> GuardKind {
        self.kind
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Compact JSON snapshot for console logs.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }

    /// Evaluate a submit attempt. `count` is the number of chosen files
    /// (upload) or checked measures (selection).
    pub fn evaluate(&mut self, count: usize) -> GuardDecision {
        if self.state == GuardState::Submitting {
            log::debug!("{:?} form already submitting, ignoring", self.kind);
            return GuardDecision::Duplicate;
        }

        self.state = GuardState::Validating;
        match self.kind.check(count) {
            Ok(()) => {
                self.state = GuardState::Submitting;
                log::info!("🚀 {:?} form submitting", self.kind);
                log::debug!("Guard {}", self.to_json());
                GuardDecision::Proceed
            }
            Err(e) => {
                self.state = GuardState::Blocked;
                log::debug!("{:?} form blocked: {} ({})", self.kind, e, self.to_json());
                // Blocked is transient; the user may fix the form and retry.
                self.state = GuardState::Idle;
                GuardDecision::Block(e)
            }
        }
    }
}
