//! Application operations, one struct per operation.
//!
//! Each use case owns `Arc`s to the ports it needs and exposes a single
//! `execute`. Absence is a return value (`None`, `false`, or a
//! [`movie::MovieWriteOutcome`] variant); only backend failures are errors,
//! and those are logged here before being handed back unchanged.

pub mod director;
pub mod movie;

#[cfg(test)]
pub(crate) mod fixtures;
