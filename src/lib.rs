//! Capacity-constrained batching and rod-cutting optimization.
//!
//! Two independent, stateless routines:
//!
//! - **Batching**: greedy priority-ordered packing of jobs into batches
//!   under a volume limit and an item-count limit. A batch costs its
//!   longest job; the schedule costs the sum over batches.
//! - **Rod cutting**: profit-maximizing partition of a rod by dynamic
//!   programming, with interchangeable memoized and tabulated strategies
//!   that return identical results.
//!
//! Inputs are validated before any work starts. Invalid inputs yield
//! [`Error::InvalidInput`] naming the offending field; there are no
//! partial results.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for jobs, constraints and results.
//!   Deserializing a [`batching::PrintJob`] goes through the same checks
//!   as [`batching::PrintJob::new`].
//!
//! Diagnostics are emitted through the `log` facade; no logger is
//! installed by this crate.

pub mod batching;
pub mod error;
pub mod rod;

pub use error::{Error, Result};
