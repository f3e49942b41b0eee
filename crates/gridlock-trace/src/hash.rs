//! FNV-1a hashing over traces for cheap determinism checks.
//!
//! Not cryptographic. The hash exists so two runs that are expected to
//! match can be compared in one `u64` equality before anyone walks the
//! frames; [`compare_traces`](crate::compare_traces) uses it as its
//! fast path.

use gridlock_core::{Pose, RunOutcome, StepEvent};

use crate::types::{RunTrace, ScenarioDescriptor};

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01B3;

#[inline]
fn fold_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fold_u32(mut hash: u64, value: u32) -> u64 {
    for byte in value.to_le_bytes() {
        hash = fold_byte(hash, byte);
    }
    hash
}

#[inline]
fn fold_u64(mut hash: u64, value: u64) -> u64 {
    for byte in value.to_le_bytes() {
        hash = fold_byte(hash, byte);
    }
    hash
}

#[inline]
fn fold_i32(hash: u64, value: i32) -> u64 {
    fold_u32(hash, value as u32)
}

fn fold_str(mut hash: u64, s: &str) -> u64 {
    hash = fold_u64(hash, s.len() as u64);
    for &byte in s.as_bytes() {
        hash = fold_byte(hash, byte);
    }
    hash
}

fn fold_pose(mut hash: u64, pose: Pose) -> u64 {
    hash = fold_i32(hash, pose.position.x);
    hash = fold_i32(hash, pose.position.y);
    fold_byte(hash, pose.direction.symbol() as u8)
}

fn fold_descriptor(mut hash: u64, descriptor: &ScenarioDescriptor) -> u64 {
    hash = fold_u32(hash, descriptor.width);
    hash = fold_u32(hash, descriptor.height);
    hash = fold_u64(hash, descriptor.vehicles.len() as u64);
    for vehicle in &descriptor.vehicles {
        hash = fold_u32(hash, vehicle.id.0);
        hash = fold_str(hash, &vehicle.name);
        hash = fold_pose(hash, vehicle.origin);
        hash = fold_str(hash, &vehicle.commands);
    }
    hash
}

fn fold_event(mut hash: u64, event: &StepEvent) -> u64 {
    hash = fold_u64(hash, event.step.0);
    hash = fold_u32(hash, event.vehicle.0);
    hash = fold_byte(hash, event.command.symbol() as u8);
    hash = fold_pose(hash, event.before);
    hash = fold_pose(hash, event.after);
    fold_byte(hash, u8::from(event.nullified))
}

fn fold_outcome(mut hash: u64, outcome: &RunOutcome) -> u64 {
    match outcome {
        RunOutcome::Collision(event) => {
            hash = fold_byte(hash, 0);
            hash = fold_u64(hash, event.step.0);
            hash = fold_u32(hash, event.vehicle.0);
            hash = fold_u32(hash, event.other.0);
            hash = fold_i32(hash, event.position.x);
            fold_i32(hash, event.position.y)
        }
        RunOutcome::Exhausted { steps } => {
            hash = fold_byte(hash, 1);
            fold_u64(hash, steps.0)
        }
    }
}

/// Hashes a scenario descriptor on its own.
///
/// Lets tooling tell "different scenario" from "same scenario, different
/// run" before any frames are compared.
#[must_use]
pub fn descriptor_hash(descriptor: &ScenarioDescriptor) -> u64 {
    fold_descriptor(FNV_OFFSET, descriptor)
}

/// Hashes a complete trace: descriptor, every frame, and the outcome.
///
/// Every field that [`compare_traces`](crate::compare_traces) inspects
/// is folded in, so equal hashes stand in for structural equality.
#[must_use]
pub fn trace_hash(trace: &RunTrace) -> u64 {
    let mut hash = fold_descriptor(FNV_OFFSET, &trace.descriptor);
    hash = fold_u64(hash, trace.frames.len() as u64);
    for frame in &trace.frames {
        hash = fold_u64(hash, frame.step.0);
        hash = fold_u64(hash, frame.events.len() as u64);
        for event in &frame.events {
            hash = fold_event(hash, event);
        }
    }
    fold_outcome(hash, &trace.outcome)
}
