//! # Engine Module
//!
//! The verification logic that sits between the pure energy model in
//! [`crate::core`] and the end-to-end [`crate::workflows`].
//!
//! - **Configuration** ([`config`]) - Closeness tolerances and component selection
//! - **Consistency Check** ([`consistency`]) - Comparison of a computed energy with a reference
//! - **Error Handling** ([`error`]) - The aggregated error surfaced to callers
//!
//! Errors are raised at the point of detection and never recovered or retried
//! here; a verification run is a one-shot computation.

pub mod config;
pub mod consistency;
pub mod error;
