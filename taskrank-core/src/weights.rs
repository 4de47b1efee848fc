//! Adaptive weights for `smart_balance` and the feedback rule that nudges them.
//!
//! The weights are process-lifetime state: created once, shared (usually via
//! `Arc`) between scoring calls, and changed only by [`AdaptiveWeights::apply_feedback`].
//! Nothing is persisted and nothing resets them.

use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

use crate::mode::ScoringMode;
use crate::task::Feedback;

/// Step applied per feedback round.
pub const FEEDBACK_STEP: f64 = 0.05;

/// Per-factor multipliers for the adaptive blend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub importance: f64,
    pub urgency: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            importance: 1.0,
            urgency: 0.8,
            effort: 0.6,
            dependency: 1.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    /// Helpful votes won; importance went up.
    ImportanceRaised,
    /// Not-helpful votes won; importance went down, urgency up.
    UrgencyRaised,
    /// Equal votes; nothing changed.
    Tied,
    /// Not the adaptive mode, or no feedback given.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackOutcome {
    pub status: FeedbackStatus,
    pub helpful: usize,
    pub not_helpful: usize,
    /// Weights after the update (unchanged unless the status says otherwise).
    pub weights: Weights,
}

/// Shared, lock-guarded weight state.
#[derive(Debug, Default)]
pub struct AdaptiveWeights {
    inner: RwLock<Weights>,
}

impl AdaptiveWeights {
    pub fn new(initial: Weights) -> Self {
        Self {
            inner: RwLock::new(initial),
        }
    }

    /// Copy of the current weights.
    pub fn snapshot(&self) -> Weights {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Nudge the weights from a batch of votes.
    ///
    /// The whole read-modify-write happens under one write lock. There is no
    /// clamp: repeated one-sided feedback keeps moving the weights.
    pub fn apply_feedback(&self, mode: ScoringMode, feedback: &[Feedback]) -> FeedbackOutcome {
        let helpful = feedback.iter().filter(|f| f.helpful).count();
        let not_helpful = feedback.len() - helpful;

        if !mode.is_adaptive() || feedback.is_empty() {
            tracing::debug!(%mode, votes = feedback.len(), "feedback ignored");
            return FeedbackOutcome {
                status: FeedbackStatus::Ignored,
                helpful,
                not_helpful,
                weights: self.snapshot(),
            };
        }

        let mut w = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let status = if helpful > not_helpful {
            w.importance = round2(w.importance + FEEDBACK_STEP);
            FeedbackStatus::ImportanceRaised
        } else if not_helpful > helpful {
            w.importance = round2(w.importance - FEEDBACK_STEP);
            w.urgency = round2(w.urgency + FEEDBACK_STEP);
            FeedbackStatus::UrgencyRaised
        } else {
            FeedbackStatus::Tied
        };

        if status != FeedbackStatus::Tied {
            tracing::info!(
                helpful,
                not_helpful,
                importance = w.importance,
                urgency = w.urgency,
                "adaptive weights updated"
            );
        }

        FeedbackOutcome {
            status,
            helpful,
            not_helpful,
            weights: *w,
        }
    }
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
