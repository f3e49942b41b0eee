//! Run tracing, hashing, and determinism checks for Gridlock.
//!
//! The engine promises that the same scenario always plays out the same
//! way. This crate makes that promise checkable: record a run as a
//! [`RunTrace`] (scenario descriptor, per-step frames, outcome), hash
//! it with [`trace_hash`], and compare runs with [`compare_traces`],
//! which names the exact step where two runs diverged instead of
//! returning a bare boolean.
//!
//! # Architecture
//!
//! - [`types`]: plain trace data, captured from a field's immutable
//!   origin records and the engine's step events.
//! - [`record`]: [`TraceRecorder`] for incremental capture, or
//!   [`RunTrace::from_run`] for a finished run in one call.
//! - [`hash`]: FNV-1a folding of every compared field into one `u64`.
//! - [`compare`]: hash fast path, structural walk on mismatch.
//!
//! The crate depends only on the core vocabulary and the field state,
//! never on the engine, so any driver of a field can be traced.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod record;
pub mod types;

pub use compare::compare_traces;
pub use error::Divergence;
pub use hash::{descriptor_hash, trace_hash};
pub use record::TraceRecorder;
pub use types::{RunTrace, ScenarioDescriptor, StepFrame, VehicleDescriptor};
