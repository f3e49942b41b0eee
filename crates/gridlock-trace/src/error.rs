//! Divergence reporting for trace comparison.

use std::error::Error;
use std::fmt;

use gridlock_core::{RunOutcome, StepEvent, StepId};

/// The first located difference between two run traces.
///
/// Returned by [`compare_traces`](crate::compare_traces). Carries just
/// enough context to point a debugging session at the exact step that
/// went wrong; the variants are ordered from "wrong scenario" down to
/// "same history, different ending".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Divergence {
    /// The scenarios themselves differ; comparing the runs is
    /// meaningless.
    Descriptor {
        /// Which part of the descriptor differed.
        detail: String,
    },
    /// One run recorded more frames than the other.
    FrameCount {
        /// Frame count in the left trace.
        left: usize,
        /// Frame count in the right trace.
        right: usize,
    },
    /// The frames at one index carry different step numbers.
    StepMismatch {
        /// Index of the mismatched frame pair.
        index: usize,
        /// Step id recorded by the left trace.
        left: StepId,
        /// Step id recorded by the right trace.
        right: StepId,
    },
    /// A step executed a different number of commands in each run.
    EventCount {
        /// The step in question.
        step: StepId,
        /// Event count in the left trace.
        left: usize,
        /// Event count in the right trace.
        right: usize,
    },
    /// A step executed a command differently in each run.
    Event {
        /// The step in which the runs diverged.
        step: StepId,
        /// Index of the event within the step.
        index: usize,
        /// The event as the left trace recorded it.
        left: StepEvent,
        /// The event as the right trace recorded it.
        right: StepEvent,
    },
    /// Identical histories that ended differently.
    Outcome {
        /// The left trace's outcome.
        left: RunOutcome,
        /// The right trace's outcome.
        right: RunOutcome,
    },
    /// Hashes differ but no structural divergence was located.
    ///
    /// Should not happen: the hash folds exactly the fields the
    /// structural walk compares.
    Hash {
        /// The left trace's hash.
        left: u64,
        /// The right trace's hash.
        right: u64,
    },
}

fn describe(event: &StepEvent) -> String {
    let nullified = if event.nullified { ", absorbed" } else { "" };
    format!(
        "vehicle {} ran {} to {}{}",
        event.vehicle, event.command, event.after, nullified
    )
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descriptor { detail } => {
                write!(f, "scenario descriptors differ: {detail}")
            }
            Self::FrameCount { left, right } => {
                write!(f, "frame counts differ: {left} vs {right}")
            }
            Self::StepMismatch { index, left, right } => {
                write!(f, "frames at index {index} differ in step: {left} vs {right}")
            }
            Self::EventCount { step, left, right } => {
                write!(f, "step {step} executed {left} commands vs {right}")
            }
            Self::Event {
                step,
                index,
                left,
                right,
            } => {
                write!(
                    f,
                    "step {step}, event {index} differs: {} vs {}",
                    describe(left),
                    describe(right)
                )
            }
            Self::Outcome { left, right } => {
                write!(f, "outcomes differ: {left:?} vs {right:?}")
            }
            Self::Hash { left, right } => {
                write!(
                    f,
                    "trace hashes differ ({left:#018x} vs {right:#018x}) \
                     with no structural divergence located"
                )
            }
        }
    }
}

impl Error for Divergence {}
