//! # primkit
//!
//! Utility primitives for sequences, numbers, and callables.
//!
//! This crate provides small, independent, domain-agnostic building blocks:
//! grouping and deduplicating ordered sequences, descriptive numeric
//! aggregates, and combinators that wrap callables with debounce or
//! interception behavior. It knows nothing about any consumer domain.
//!
//! ## Modules
//!
//! - [`partition`] — Fixed-size sequence grouping under a rounding policy
//! - [`seq`] — Deduplication and linear range generation
//! - [`stats`] — Compensated sums and descriptive aggregates
//! - [`debounce`] — Edge-triggered invocation collapsing
//! - [`intercept`] — Call interception with veto/replace semantics
//! - [`wrap`] — One-shot invocation and argument/output taps
//! - [`timer`] — Cancellable one-shot timers (consumed by [`debounce`])
//! - [`ext`] — Opt-in extension trait over slice-like containers
//!
//! ## Design Philosophy
//!
//! - **Validation up front**: argument errors surface synchronously at the
//!   offending call, never inside a deferred callback
//! - **Numerical stability first**: Neumaier summation for accumulation
//! - **Property-based testing**: structural invariants verified via proptest

pub mod debounce;
pub mod error;
pub mod ext;
pub mod intercept;
pub mod partition;
pub mod seq;
pub mod stats;
pub mod timer;
pub mod wrap;

pub use error::Error;
