//! Trace comparison: hash fast path, structural walk on mismatch.

use crate::error::Divergence;
use crate::hash::trace_hash;
use crate::types::{RunTrace, ScenarioDescriptor};

/// Compares two traces for exact equality.
///
/// The fast path hashes both traces and returns `Ok(())` when the
/// hashes match. On mismatch the traces are walked front to back to
/// locate the first divergence: descriptor, frame shape, individual
/// event, or outcome. A determinism failure therefore names the exact
/// step that went wrong instead of a bare boolean.
///
/// # Errors
///
/// Returns the first [`Divergence`] found.
///
/// # Examples
///
/// ```
/// use gridlock_core::{RunOutcome, StepId};
/// use gridlock_field::Field;
/// use gridlock_trace::{compare_traces, RunTrace};
///
/// let outcome = RunOutcome::Exhausted { steps: StepId(0) };
/// let a = RunTrace::from_run(&Field::new(5, 5), &[], outcome);
/// let b = RunTrace::from_run(&Field::new(5, 5), &[], outcome);
/// assert!(compare_traces(&a, &b).is_ok());
///
/// let c = RunTrace::from_run(&Field::new(6, 5), &[], outcome);
/// assert!(compare_traces(&a, &c).is_err());
/// ```
pub fn compare_traces(left: &RunTrace, right: &RunTrace) -> Result<(), Divergence> {
    let left_hash = trace_hash(left);
    let right_hash = trace_hash(right);
    if left_hash == right_hash {
        return Ok(());
    }

    if let Some(detail) = descriptor_divergence(&left.descriptor, &right.descriptor) {
        return Err(Divergence::Descriptor { detail });
    }

    if left.frames.len() != right.frames.len() {
        return Err(Divergence::FrameCount {
            left: left.frames.len(),
            right: right.frames.len(),
        });
    }

    for (index, (lf, rf)) in left.frames.iter().zip(&right.frames).enumerate() {
        if lf.step != rf.step {
            return Err(Divergence::StepMismatch {
                index,
                left: lf.step,
                right: rf.step,
            });
        }
        if lf.events.len() != rf.events.len() {
            return Err(Divergence::EventCount {
                step: lf.step,
                left: lf.events.len(),
                right: rf.events.len(),
            });
        }
        for (event_index, (le, re)) in lf.events.iter().zip(&rf.events).enumerate() {
            if le != re {
                return Err(Divergence::Event {
                    step: lf.step,
                    index: event_index,
                    left: *le,
                    right: *re,
                });
            }
        }
    }

    if left.outcome != right.outcome {
        return Err(Divergence::Outcome {
            left: left.outcome,
            right: right.outcome,
        });
    }

    Err(Divergence::Hash {
        left: left_hash,
        right: right_hash,
    })
}

fn descriptor_divergence(left: &ScenarioDescriptor, right: &ScenarioDescriptor) -> Option<String> {
    if left.width != right.width || left.height != right.height {
        return Some(format!(
            "field {}x{} vs {}x{}",
            left.width, left.height, right.width, right.height
        ));
    }
    if left.vehicles.len() != right.vehicles.len() {
        return Some(format!(
            "vehicle count {} vs {}",
            left.vehicles.len(),
            right.vehicles.len()
        ));
    }
    for (lv, rv) in left.vehicles.iter().zip(&right.vehicles) {
        if lv != rv {
            return Some(format!(
                "vehicle {}: '{}' {} [{}] vs '{}' {} [{}]",
                lv.id, lv.name, lv.origin, lv.commands, rv.name, rv.origin, rv.commands
            ));
        }
    }
    None
}
