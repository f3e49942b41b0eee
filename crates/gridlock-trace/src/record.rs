//! Incremental trace recording.

use gridlock_core::{RunOutcome, StepEvent};
use gridlock_field::Field;
use smallvec::smallvec;

use crate::types::{RunTrace, ScenarioDescriptor, StepFrame};

/// Records a run incrementally: begin, record each event, finish.
///
/// Use this when driving a simulation step by step; a caller who
/// already has the whole event history can build the same trace in one
/// call with [`RunTrace::from_run`].
#[derive(Clone, Debug)]
pub struct TraceRecorder {
    descriptor: ScenarioDescriptor,
    frames: Vec<StepFrame>,
}

impl TraceRecorder {
    /// Starts recording a run over `field`, capturing its descriptor.
    ///
    /// The descriptor reads from immutable origin records rather than
    /// current poses, so beginning mid-run captures the same scenario
    /// as beginning before the first step.
    pub fn begin(field: &Field) -> Self {
        Self {
            descriptor: ScenarioDescriptor::from_field(field),
            frames: Vec::new(),
        }
    }

    /// Appends one executed command to the trace.
    ///
    /// Events must arrive in execution order; a new frame opens
    /// whenever the step id advances.
    pub fn record(&mut self, event: &StepEvent) {
        match self.frames.last_mut() {
            Some(frame) if frame.step == event.step => frame.events.push(*event),
            _ => self.frames.push(StepFrame {
                step: event.step,
                events: smallvec![*event],
            }),
        }
    }

    /// Number of frames opened so far.
    pub fn frames_recorded(&self) -> usize {
        self.frames.len()
    }

    /// Closes the trace with the run's outcome.
    #[must_use]
    pub fn finish(self, outcome: RunOutcome) -> RunTrace {
        RunTrace {
            descriptor: self.descriptor,
            frames: self.frames,
            outcome,
        }
    }
}

impl RunTrace {
    /// Builds a trace from a finished run in one call.
    ///
    /// Equivalent to a [`TraceRecorder`] fed every event in order:
    /// because origin records never change, the descriptor captured
    /// from the finished field matches the one a recorder would have
    /// captured up front.
    pub fn from_run(field: &Field, events: &[StepEvent], outcome: RunOutcome) -> Self {
        let mut recorder = TraceRecorder::begin(field);
        for event in events {
            recorder.record(event);
        }
        recorder.finish(outcome)
    }
}
